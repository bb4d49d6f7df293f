//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments for the application using
//! the `clap` crate. Apart from the `--config` override, every argument is
//! treated as opaque passthrough data for the configured backends.

use clap::Parser;
use std::path::PathBuf;

/// Dispatches a message to every notification backend enabled in the
/// configuration file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the INI configuration file (defaults to ~/.notifier).
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Arguments forwarded verbatim to each enabled backend. The webhook
    /// backend extracts its message from these; the executable backend
    /// receives them as its own argument list.
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}
