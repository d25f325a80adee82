//! stationup CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use stationup::cli::{resolve_project_root, Cli, CommandDispatcher, Commands};
use stationup::shell::is_ci;
use stationup::ui::create_ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so they never mix with status output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("stationup=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stationup=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("stationup starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Check if non-interactive (CI mode or explicit flag)
    let is_interactive = match &cli.command {
        Some(Commands::Run(args)) => !args.non_interactive && !is_ci(),
        _ => !is_ci(),
    };

    // Create UI
    let mut ui = create_ui(is_interactive, cli.output_mode());

    let project_root = match resolve_project_root(cli.project.as_deref(), std::env::current_dir)
    {
        Ok(root) => root,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    // Dispatch command
    let dispatcher = CommandDispatcher::new(project_root).with_config(cli.config.clone());

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
