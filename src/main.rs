//! freezeup CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use freezeup::bootstrap::Bootstrapper;
use freezeup::cli::Cli;
use freezeup::config::{BootstrapConfig, EnvSnapshot};
use freezeup::error::Result;
use freezeup::fetch::HttpFetcher;
use freezeup::shell::SystemRunner;
use freezeup::ui::{create_ui, should_use_colors, OutputMode, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("freezeup=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("freezeup=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli, env: EnvSnapshot, ui: &mut dyn UserInterface) -> Result<()> {
    let working_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    let config = BootstrapConfig::load(&working_dir, env, cli.script.as_deref())?;
    tracing::debug!("Resolved config: {:?}", config);

    let fetcher = HttpFetcher::new()?;
    let runner = SystemRunner;

    let report = Bootstrapper::new(&config, &runner, &fetcher, ui).run()?;
    tracing::debug!("Bootstrap report: {:?}", report);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("freezeup starting with args: {:?}", cli);

    let env = EnvSnapshot::capture();
    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);
    let colors = should_use_colors(&env, cli.no_color);
    let is_interactive = !env.is_ci();

    let mut ui = create_ui(is_interactive, cli.yes, colors, output_mode);

    match run(&cli, env, ui.as_mut()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(e.exit_code())
        }
    }
}
