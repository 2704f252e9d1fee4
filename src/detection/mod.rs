//! Tool detection: system package manager and Python interpreter.

pub mod package_manager;
pub mod runtime;

pub use package_manager::PackageManagerKind;
pub use runtime::{parse_version, RuntimeHandle};
