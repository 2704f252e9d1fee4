//! Non-interactive UI for CI and `--yes` runs.

use crate::error::Result;

use super::spinner::ProgressSpinner;
use super::theme::FreezeupTheme;
use super::{OutputMode, Prompt, SpinnerHandle, UserInterface};

/// UI implementation that never reads input.
///
/// Every confirmation is answered with the fixed `assume_yes` value and
/// the answer is echoed so logs show what was decided.
pub struct NonInteractiveUI {
    mode: OutputMode,
    assume_yes: bool,
    theme: FreezeupTheme,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode, assume_yes: bool, colors: bool) -> Self {
        Self {
            mode,
            assume_yes,
            theme: FreezeupTheme::for_colors(colors),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn info(&mut self, msg: &str) {
        if self.mode.shows_info() {
            println!("{}", self.theme.format_info(msg));
        }
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        println!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_info() {
            println!("\n{}\n", self.theme.format_header(title));
        }
    }

    fn show_hint(&mut self, hint: &str) {
        println!("{}", self.theme.format_hint(hint));
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        let answer = if self.assume_yes { "yes" } else { "no" };
        println!("{} {}", prompt.question, answer);
        if !self.assume_yes {
            tracing::debug!("Declining '{}' without a terminal", prompt.key);
        }
        Ok(self.assume_yes)
    }

    fn start_spinner(&mut self, _message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(ProgressSpinner::hidden())
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
