//! Interpreter discovery with a single install offer.

use super::{describe_exit, Bootstrapper};
use crate::detection::{PackageManagerKind, RuntimeHandle};
use crate::error::{FreezeupError, Result};

impl Bootstrapper<'_> {
    /// Find the interpreter, offering one install through the system
    /// package manager when none of the candidates answer.
    pub fn discover_runtime(&mut self, package_manager: PackageManagerKind) -> Result<RuntimeHandle> {
        let config = self.config;
        let candidates = &config.runtime_candidates;
        if let Some(runtime) = RuntimeHandle::discover(self.runner, candidates) {
            self.ui.success(&format!("Found {}", runtime.label()));
            return Ok(runtime);
        }

        self.ui.warning(&format!(
            "No Python interpreter found (tried {})",
            candidates.join(", ")
        ));

        let Some(install) = package_manager.runtime_install_command(self.is_elevated()) else {
            return Err(FreezeupError::PackageManagerUnsupported {
                tool: "Python".to_string(),
            });
        };

        let question = format!("Install Python using {}?", package_manager.name());
        if !self.confirm("install_runtime", &question)? {
            return Err(FreezeupError::RuntimeNotFound {
                message: "installation declined".to_string(),
            });
        }

        let result = self.execute(&install);
        if !result.success {
            return Err(FreezeupError::RuntimeNotFound {
                message: format!("'{}' {}", install, describe_exit(&result)),
            });
        }

        match RuntimeHandle::discover(self.runner, candidates) {
            Some(runtime) => {
                self.ui.success(&format!("Installed {}", runtime.label()));
                Ok(runtime)
            }
            None => Err(FreezeupError::RuntimeNotFound {
                message: "still not found after installation".to_string(),
            }),
        }
    }
}
