//! Error types for freezeup operations.
//!
//! This module defines [`FreezeupError`], the error type every pipeline
//! stage returns, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A failed external command is a value ([`crate::shell::CommandResult`]),
//!   not an error. Stages inspect it and decide whether it is fatal.
//! - Each fatal stage failure has its own variant so the message names the
//!   stage that stopped the run.
//! - Use `anyhow::Error` (via `FreezeupError::Other`) at the HTTP boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for freezeup operations.
#[derive(Debug, Error)]
pub enum FreezeupError {
    /// No Python interpreter could be found or installed.
    #[error("Python runtime not found: {message}")]
    RuntimeNotFound { message: String },

    /// No supported system package manager is available to install a tool.
    #[error("No supported package manager available to install {tool}")]
    PackageManagerUnsupported { tool: String },

    /// pip is missing and could not be installed.
    #[error("pip is unavailable: {message}")]
    InstallerUnavailable { message: String },

    /// Required Python packages were declined or failed to install.
    #[error("Failed to install {packages}: {message}")]
    DependencyInstallFailed { packages: String, message: String },

    /// The bundler is missing and could not be installed.
    #[error("Bundler '{bundler}' is unavailable: {message}")]
    BundlerUnavailable { bundler: String, message: String },

    /// The script to freeze does not exist.
    #[error("Build target not found: {path}")]
    BuildTargetNotFound { path: PathBuf },

    /// The bundler exited unsuccessfully.
    #[error("Build failed with exit code {code:?}: {command}")]
    BuildFailed { command: String, code: Option<i32> },

    /// The bundler reported success but produced no artifact.
    #[error("Expected build artifact missing: {path}")]
    ArtifactNotFound { path: PathBuf },

    /// Failed to parse the project config file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FreezeupError {
    /// Process exit code for this error. Every fatal failure exits with 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Result type alias for freezeup operations.
pub type Result<T> = std::result::Result<T, FreezeupError>;
