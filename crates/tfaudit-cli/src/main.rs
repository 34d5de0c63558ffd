//! tfaudit CLI.
//!
//! View Terraform Cloud audit events in your terminal.
//!
//! # Quick Start
//!
//! ```bash
//! # Events from the last day
//! tfaudit --token "$TFC_ORG_TOKEN"
//!
//! # Events from the last week, token from the environment
//! TFAUDIT_API__TOKEN="$TFC_ORG_TOKEN" tfaudit --since 7
//! ```

mod commands;
mod style;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// View terraform cloud audit events in your terminal.
#[derive(Parser)]
#[command(name = "tfaudit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Terraform Cloud organization token.
    ///
    /// Falls back to `api.token` from the config file or TFAUDIT_API__TOKEN.
    #[arg(short, long)]
    token: Option<String>,

    /// Audit events since (in number of days) [default: 1].
    #[arg(short, long)]
    since: Option<u32>,
}

fn main() -> ExitCode {
    // Logs go to stderr and stay quiet unless TFAUDIT_LOG asks for more.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TFAUDIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match commands::view::run(cli.token.as_deref(), cli.since) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            style::print_error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
