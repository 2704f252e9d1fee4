//! Required package resolution, the batch install, and the bundler.

use super::{describe_exit, Bootstrapper};
use crate::config::{EnvironmentMode, BUNDLER_PACKAGE};
use crate::detection::RuntimeHandle;
use crate::error::{FreezeupError, Result};
use crate::shell::CommandRunner;

/// Packages from `packages` that `pip show` does not know, in input order.
///
/// Any failure of `pip show` counts as missing.
pub fn missing_packages(
    runner: &dyn CommandRunner,
    runtime: &RuntimeHandle,
    packages: &[String],
) -> Vec<String> {
    packages
        .iter()
        .filter(|name| {
            let present = runner.succeeds(&runtime.pip(["show", name.as_str()]));
            tracing::debug!("{}: {}", name, if present { "present" } else { "missing" });
            !present
        })
        .cloned()
        .collect()
}

impl Bootstrapper<'_> {
    /// Check every required package.
    pub fn resolve_missing(&mut self, runtime: &RuntimeHandle) -> Vec<String> {
        let mut spinner = self.ui.start_spinner("Checking required packages...");
        let missing = missing_packages(self.runner, runtime, &self.config.packages);
        if missing.is_empty() {
            spinner.finish_success("All required packages are installed");
        } else {
            spinner.finish_success(&format!("Missing: {}", missing.join(", ")));
        }
        missing
    }

    /// Install every missing package in one pip invocation after a single
    /// confirmation. Does nothing when `missing` is empty.
    pub fn install_missing(
        &mut self,
        runtime: &RuntimeHandle,
        mode: EnvironmentMode,
        missing: &[String],
    ) -> Result<()> {
        if missing.is_empty() {
            return Ok(());
        }

        let listed = missing.join(", ");
        let question = format!("Install missing packages ({})?", listed);
        if !self.confirm("install_packages", &question)? {
            return Err(FreezeupError::DependencyInstallFailed {
                packages: listed,
                message: "installation declined".to_string(),
            });
        }

        let install = runtime
            .pip(["install"])
            .args(mode.install_flags().iter().copied())
            .args(missing.iter().cloned())
            .streamed();
        let result = self.execute(&install);
        if !result.success {
            return Err(FreezeupError::DependencyInstallFailed {
                packages: listed,
                message: format!("pip {}", describe_exit(&result)),
            });
        }

        self.ui.success(&format!("Installed {}", listed));
        Ok(())
    }

    /// Install the bundler if `pip show` does not find it.
    ///
    /// Returns whether this run installed it.
    pub fn ensure_bundler(&mut self, runtime: &RuntimeHandle, mode: EnvironmentMode) -> Result<bool> {
        let bundler = BUNDLER_PACKAGE.to_string();
        if self.runner.succeeds(&runtime.pip(["show", bundler.as_str()])) {
            self.ui.success(&format!("{} is installed", bundler));
            return Ok(false);
        }

        self.ui.warning(&format!("{} is not installed", bundler));
        let question = format!("Install {}?", bundler);
        if !self.confirm("install_bundler", &question)? {
            return Err(FreezeupError::BundlerUnavailable {
                bundler,
                message: "installation declined".to_string(),
            });
        }

        let install = runtime
            .pip(["install"])
            .args(mode.install_flags().iter().copied())
            .arg(bundler.as_str())
            .streamed();
        let result = self.execute(&install);
        if !result.success {
            return Err(FreezeupError::BundlerUnavailable {
                bundler,
                message: format!("pip {}", describe_exit(&result)),
            });
        }

        self.ui.success(&format!("Installed {}", bundler));
        Ok(true)
    }
}
