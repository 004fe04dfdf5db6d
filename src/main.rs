//! photosort-setup CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use photosort_setup::cli::Cli;
use photosort_setup::manifest::Manifest;
use photosort_setup::runner::{self, BootstrapOptions};
use photosort_setup::ui::{Output, OutputMode, SetupTheme};
use photosort_setup::platform;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("photosort_setup=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("photosort_setup=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let project_root = cli
        .project
        .clone()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let output = Output::new(output_mode, SetupTheme::auto());
    let opts = BootstrapOptions {
        project_root,
        dry_run: cli.dry_run,
    };

    let manifest = match Manifest::embedded() {
        Ok(m) => m,
        Err(e) => {
            output.error(&format!("Error: {}", e));
            return ExitCode::from(1);
        }
    };

    match runner::run(platform::current(), &manifest, &output, &opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output.error(&format!("Error: {}", e));
            ExitCode::from(e.exit_code())
        }
    }
}
