//! External command execution and shell detection.

pub mod command;
pub mod mock;
pub mod platform;

pub use command::{CommandResult, CommandRunner, CommandSpec, SystemRunner};
pub use mock::MockRunner;
pub use platform::ShellType;
