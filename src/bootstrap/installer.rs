//! pip availability, the get-pip fallback, and pip self-upgrade.

use std::io::Write;

use super::{describe_exit, Bootstrapper};
use crate::config::EnvironmentMode;
use crate::detection::{PackageManagerKind, RuntimeHandle};
use crate::error::{FreezeupError, Result};
use crate::shell::CommandSpec;

impl Bootstrapper<'_> {
    fn pip_available(&mut self, runtime: &RuntimeHandle) -> bool {
        let check = runtime.pip(["--version"]);
        self.execute(&check).success
    }

    /// Make sure `<runtime> -m pip` works.
    ///
    /// After confirmation, tries the system package manager first and
    /// falls back to `get-pip.py`.
    pub fn ensure_package_installer(
        &mut self,
        runtime: &RuntimeHandle,
        package_manager: PackageManagerKind,
        mode: EnvironmentMode,
    ) -> Result<()> {
        if self.pip_available(runtime) {
            self.ui.success("pip is available");
            return Ok(());
        }

        self.ui
            .warning(&format!("pip is not available for {}", runtime.command));
        if !self.confirm("install_pip", "Install pip?")? {
            return Err(FreezeupError::InstallerUnavailable {
                message: "installation declined".to_string(),
            });
        }

        if let Some(install) = package_manager.pip_install_command(self.is_elevated()) {
            let result = self.execute(&install);
            if result.success && self.pip_available(runtime) {
                self.ui.success("pip installed");
                return Ok(());
            }
            self.ui.warning(&format!(
                "{} did not provide pip; falling back to get-pip.py",
                package_manager.name()
            ));
        }

        self.bootstrap_pip(runtime, mode)?;

        if !self.pip_available(runtime) {
            return Err(FreezeupError::InstallerUnavailable {
                message: "pip is still missing after running get-pip.py".to_string(),
            });
        }
        self.ui.success("pip installed");
        Ok(())
    }

    /// Download `get-pip.py` to a temporary file and run it.
    ///
    /// The file is deleted before the outcome is inspected, so it never
    /// outlives this call whether the install worked or not.
    fn bootstrap_pip(&mut self, runtime: &RuntimeHandle, mode: EnvironmentMode) -> Result<()> {
        let url = self.config.bootstrap_url.as_str();
        self.ui.info(&format!("Downloading {}", url));
        let body = self
            .fetcher
            .fetch(url)
            .map_err(|e| FreezeupError::InstallerUnavailable {
                message: format!("{:#}", e),
            })?;

        let mut script = tempfile::Builder::new()
            .prefix("get-pip-")
            .suffix(".py")
            .tempfile()?;
        script.write_all(&body)?;
        script.flush()?;

        let run = CommandSpec::new(runtime.command.as_str())
            .arg(script.path().to_string_lossy())
            .args(mode.install_flags().iter().copied())
            .streamed();
        let result = self.execute(&run);

        let cleanup = script.close();
        if let Err(e) = &cleanup {
            tracing::warn!("Failed to delete get-pip.py: {}", e);
        }

        if !result.success {
            return Err(FreezeupError::InstallerUnavailable {
                message: format!("get-pip.py {}", describe_exit(&result)),
            });
        }
        cleanup?;
        Ok(())
    }

    /// Upgrade pip in place. Returns whether an upgrade ran and succeeded.
    ///
    /// Skipped in isolated environments; a failure only warns.
    pub fn upgrade_installer(&mut self, runtime: &RuntimeHandle, mode: EnvironmentMode) -> bool {
        if !mode.upgrades_installer() {
            self.ui.info("Skipping pip upgrade in isolated environment");
            return false;
        }

        let upgrade = runtime.pip(["install", "--upgrade", "pip"]).streamed();
        let result = self.execute(&upgrade);
        if result.success {
            self.ui.success("pip is up to date");
        } else {
            tracing::warn!("pip upgrade {}", describe_exit(&result));
            self.ui
                .warning("Could not upgrade pip; continuing with the installed version");
        }
        result.success
    }
}
