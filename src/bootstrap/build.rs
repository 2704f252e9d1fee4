//! Freezing the target script into a one-file executable.

use std::path::PathBuf;

use super::Bootstrapper;
use crate::config::{BUNDLER_MODULE, DEFAULT_OUTPUT_DIR};
use crate::detection::RuntimeHandle;
use crate::error::{FreezeupError, Result};

impl Bootstrapper<'_> {
    /// Run `<runtime> -m PyInstaller --onefile <target>` from the working
    /// directory and return the path of the produced executable.
    pub fn build_executable(&mut self, runtime: &RuntimeHandle) -> Result<PathBuf> {
        let config = self.config;
        let target_path = config.target_path();
        if !target_path.is_file() {
            return Err(FreezeupError::BuildTargetNotFound { path: target_path });
        }

        let mut build = runtime.module(BUNDLER_MODULE, ["--onefile", config.target.as_str()]);
        if config.output_dir != DEFAULT_OUTPUT_DIR {
            build = build.args(["--distpath", config.output_dir.as_str()]);
        }
        let build = build.in_dir(&config.working_dir).streamed();

        self.ui.info(&format!("Building {}", config.target));
        let result = self.execute(&build);
        if !result.success {
            return Err(FreezeupError::BuildFailed {
                command: build.to_string(),
                code: result.exit_code,
            });
        }

        let artifact = config.artifact_path();
        if !artifact.exists() {
            return Err(FreezeupError::ArtifactNotFound { path: artifact });
        }

        self.ui.success(&format!("Built {}", artifact.display()));
        Ok(artifact)
    }
}
