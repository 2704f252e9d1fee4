//! freezeup - Bootstrap a Python toolchain and freeze a script.
//!
//! freezeup finds (or offers to install) a Python interpreter and pip,
//! installs the packages a script needs in one batch, makes sure
//! PyInstaller is present, and builds a one-file executable.
//!
//! # Modules
//!
//! - [`bootstrap`] - The staged pipeline and its report
//! - [`cli`] - Command-line argument parsing
//! - [`config`] - Defaults, `freezeup.yml`, and the environment snapshot
//! - [`detection`] - Package manager and interpreter discovery
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - Downloading `get-pip.py`
//! - [`shell`] - External command execution and shell detection
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use freezeup::bootstrap::missing_packages;
//! use freezeup::detection::RuntimeHandle;
//! use freezeup::shell::MockRunner;
//!
//! let mut runner = MockRunner::new();
//! runner.succeed("python3 -m pip show numpy");
//!
//! let runtime = RuntimeHandle { command: "python3".to_string(), version: None };
//! let wanted = vec!["pandas".to_string(), "numpy".to_string()];
//! assert_eq!(missing_packages(&runner, &runtime, &wanted), vec!["pandas"]);
//! ```

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod fetch;
pub mod shell;
pub mod ui;

pub use error::{FreezeupError, Result};
