//! Notifier - a small local notification dispatcher.
//!
//! Reads `~/.notifier` (INI), runs every backend named by a config
//! section, and exits non-zero if any of them failed to deliver.

use clap::Parser;
use notifier::{app, cli::Cli, config::Config};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr so passthrough output from external notifiers
    // stays clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => match Config::default_path() {
            Ok(path) => path,
            Err(e) => {
                error!("{e}");
                return ExitCode::FAILURE;
            }
        },
    };

    if !config_path.exists() {
        info!(path = %config_path.display(), "no configuration file, nothing to do");
        return ExitCode::SUCCESS;
    }

    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let summary = app::dispatch(&config, &cli.args);
    info!(
        dispatched = summary.dispatched,
        skipped = summary.skipped,
        failed = summary.failed,
        "dispatch complete"
    );

    if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
