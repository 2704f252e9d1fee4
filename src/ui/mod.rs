//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI and `--yes` runs
//! - [`MockUI`] with canned answers for tests
//!
//! # Example
//!
//! ```
//! use freezeup::ui::{create_ui, OutputMode, Prompt};
//!
//! // Non-interactive mode answers every confirmation from `assume_yes`
//! let mut ui = create_ui(false, true, true, OutputMode::Quiet);
//! assert!(ui.confirm(&Prompt::confirm("install", "Install packages?")).unwrap());
//! ui.success("Setup complete!");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI};
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::{confirm_lines, parse_answer};
pub use spinner::ProgressSpinner;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, FreezeupTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// Pipeline stages talk to the operator only through this trait.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display an informational status line.
    fn info(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every output mode.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a contextual hint.
    fn show_hint(&mut self, hint: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &Prompt) -> Result<bool>;

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Check if an operator is answering prompts.
    fn is_interactive(&self) -> bool;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);
}

/// A yes/no question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Stable key (used by `MockUI` to look up canned answers).
    pub key: String,
    /// The question to display.
    pub question: String,
}

impl Prompt {
    /// A confirmation with no default: the operator must answer.
    pub fn confirm(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
        }
    }
}

/// Create the UI for this run.
///
/// Interactive runs get a [`TerminalUI`]; otherwise prompts are answered
/// with `assume_yes`.
pub fn create_ui(
    interactive: bool,
    assume_yes: bool,
    colors: bool,
    mode: OutputMode,
) -> Box<dyn UserInterface> {
    if interactive && !assume_yes {
        Box::new(TerminalUI::new(mode, colors))
    } else {
        Box::new(NonInteractiveUI::new(mode, assume_yes, colors))
    }
}
