//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// freezeup - Bootstrap Python and freeze a script into a one-file executable.
#[derive(Debug, Parser)]
#[command(name = "freezeup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Script to freeze (overrides freezeup.yml; defaults to report.py)
    #[arg(env = "FREEZEUP_SCRIPT")]
    pub script: Option<String>,

    /// Answer yes to every prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Directory containing the script (overrides current directory)
    #[arg(short = 'C', long = "dir")]
    pub dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_script_and_flags() {
        let cli = Cli::try_parse_from(["freezeup", "plot.py", "-y", "-C", "/work", "--debug"]).unwrap();
        assert_eq!(cli.script.as_deref(), Some("plot.py"));
        assert!(cli.yes);
        assert_eq!(cli.dir, Some(PathBuf::from("/work")));
        assert!(cli.debug);
        assert!(!cli.verbose);
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["freezeup", "-v", "-q"]).is_err());
    }
}
