//! Visual theme and styling.

use console::Style;

use crate::config::EnvSnapshot;

/// Status line styles.
#[derive(Debug, Clone)]
pub struct FreezeupTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational messages (blue).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for headers (bold cyan).
    pub header: Style,
    /// Style for commands and paths the operator may copy (cyan).
    pub command: Style,
}

impl Default for FreezeupTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl FreezeupTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            info: Style::new().blue(),
            dim: Style::new().dim(),
            header: Style::new().bold().cyan(),
            command: Style::new().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            command: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_colors(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format an informational message.
    pub fn format_info(&self, msg: &str) -> String {
        format!("{}", self.info.apply_to(format!("[INFO] {}", msg)))
    }

    /// Format a success message.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("[OK] {}", msg)))
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("[WARN] {}", msg)))
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("[ERROR] {}", msg)))
    }

    /// Format a header.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(format!("== {} ==", title)))
    }

    /// Format a hint.
    pub fn format_hint(&self, hint: &str) -> String {
        format!("  {}", self.command.apply_to(hint))
    }
}

/// Whether to emit ANSI colors.
///
/// Honors `NO_COLOR` (https://no-color.org/) and stdout being a TTY.
pub fn should_use_colors(env: &EnvSnapshot, no_color_flag: bool) -> bool {
    if no_color_flag || env.is_set("NO_COLOR") {
        return false;
    }
    console::Term::stdout().is_term()
}
