//! SpendLens CLI - Transaction categorization
//!
//! Usage:
//!   spendlens predict "CCD AP ₹892"          Categorize one transaction
//!   spendlens batch --file in.csv -o out.csv  Add prediction columns to a CSV
//!   spendlens report --file in.csv [--json]   Category/location/amount reports
//!   spendlens tables                          Show the lookup tables in use

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = commands::load_tables(cli.config.as_deref())?;

    match cli.command {
        Commands::Predict { text, json } => commands::cmd_predict(&config, &text, json),
        Commands::Batch {
            file,
            output,
            column,
            limit,
        } => commands::cmd_batch(
            &config,
            &file,
            output.as_deref(),
            column.as_deref(),
            limit,
        ),
        Commands::Report {
            file,
            kind,
            column,
            json,
        } => commands::cmd_report(&config, &file, &kind, column.as_deref(), json),
        Commands::Tables => commands::cmd_tables(&config),
    }
}
