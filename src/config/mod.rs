//! Run configuration.
//!
//! Everything the pipeline needs to know about the outside world is
//! collected once, at startup, into a [`BootstrapConfig`]:
//! - Built-in defaults (this module)
//! - The optional project file, see [`loader`] and [`schema`]
//! - The environment snapshot, see [`environment`]
//!
//! The config is immutable afterwards and passed by reference to every
//! stage. No stage reads the process environment or working directory on
//! its own.
//!
//! # Example
//!
//! ```
//! use freezeup::config::{BootstrapConfig, EnvSnapshot};
//! use std::path::Path;
//!
//! let config = BootstrapConfig::new(Path::new("/work"), EnvSnapshot::default());
//! assert_eq!(config.target, "report.py");
//! assert!(config.artifact_path().starts_with("/work/dist"));
//! ```

pub mod environment;
pub mod loader;
pub mod schema;

pub use environment::{EnvSnapshot, EnvironmentMode, ISOLATED_ENV_VAR, OVERRIDE_FLAG};
pub use loader::{load_project_file, CONFIG_FILE};
pub use schema::ProjectFile;

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Script frozen when nothing else is configured.
pub const DEFAULT_SCRIPT: &str = "report.py";

/// Libraries the default script imports.
pub const DEFAULT_PACKAGES: &[&str] = &["pandas", "matplotlib", "seaborn", "numpy"];

/// pip package name of the bundler.
pub const BUNDLER_PACKAGE: &str = "pyinstaller";

/// Module name used to run the bundler through the interpreter.
pub const BUNDLER_MODULE: &str = "PyInstaller";

/// Directory PyInstaller writes one-file executables into.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Official pip bootstrap script.
pub const GET_PIP_URL: &str = "https://bootstrap.pypa.io/get-pip.py";

/// Interpreter names, versioned first.
pub const RUNTIME_CANDIDATES: &[&str] = &["python3", "python"];

/// Immutable settings for one run.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    /// Directory the script lives in and the build runs from.
    pub working_dir: PathBuf,

    /// Script to freeze, relative to `working_dir`.
    pub target: String,

    /// Packages the script needs, in order.
    pub packages: Vec<String>,

    /// Output directory name under `working_dir`.
    pub output_dir: String,

    /// URL of `get-pip.py`.
    pub bootstrap_url: String,

    /// Interpreter names to try, in preference order.
    pub runtime_candidates: Vec<String>,

    /// Environment captured at startup.
    pub env: EnvSnapshot,
}

impl BootstrapConfig {
    /// Defaults for a working directory.
    pub fn new(working_dir: &Path, env: EnvSnapshot) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            target: DEFAULT_SCRIPT.to_string(),
            packages: DEFAULT_PACKAGES.iter().map(|p| p.to_string()).collect(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            bootstrap_url: GET_PIP_URL.to_string(),
            runtime_candidates: RUNTIME_CANDIDATES.iter().map(|c| c.to_string()).collect(),
            env,
        }
    }

    /// Build the config from defaults, `freezeup.yml`, and a script override.
    ///
    /// The override (from the command line or `FREEZEUP_SCRIPT`) beats the
    /// project file.
    pub fn load(working_dir: &Path, env: EnvSnapshot, script: Option<&str>) -> Result<Self> {
        let file = load_project_file(working_dir)?;
        let mut config = Self::new(working_dir, env).with_project_file(file);
        if let Some(script) = script {
            config.target = script.to_string();
        }
        Ok(config)
    }

    /// Apply the keys present in a project file.
    pub fn with_project_file(mut self, file: ProjectFile) -> Self {
        if let Some(script) = file.script {
            self.target = script;
        }
        if let Some(packages) = file.packages {
            self.packages = packages;
        }
        if let Some(output_dir) = file.output_dir {
            self.output_dir = output_dir;
        }
        if let Some(url) = file.bootstrap_url {
            self.bootstrap_url = url;
        }
        self
    }

    /// Replace the build target.
    pub fn with_target(mut self, target: &str) -> Self {
        self.target = target.to_string();
        self
    }

    /// Replace the required package list.
    pub fn with_packages(mut self, packages: &[&str]) -> Self {
        self.packages = packages.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Absolute path of the script to freeze.
    pub fn target_path(&self) -> PathBuf {
        self.working_dir.join(&self.target)
    }

    /// Base name of the target, which PyInstaller uses for the executable.
    pub fn target_base_name(&self) -> String {
        Path::new(&self.target)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.target.clone())
    }

    /// Where the executable is expected after a successful build.
    pub fn artifact_path(&self) -> PathBuf {
        let mut name = self.target_base_name();
        if cfg!(windows) {
            name.push_str(".exe");
        }
        self.working_dir.join(&self.output_dir).join(name)
    }

    /// Operator's home directory, if the environment names one.
    pub fn home_dir(&self) -> Option<PathBuf> {
        self.env
            .get("HOME")
            .or_else(|| self.env.get("USERPROFILE"))
            .filter(|h| !h.is_empty())
            .map(PathBuf::from)
    }
}
