//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// SpendLens - Categorize transaction descriptions
#[derive(Parser)]
#[command(name = "spendlens")]
#[command(
    about = "Keyword-based transaction categorization, location and amount extraction",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Lookup table config file
    ///
    /// Defaults to ~/.local/share/spendlens/tables.toml when present,
    /// otherwise the built-in tables are used.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict category, location and amount for one transaction
    Predict {
        /// Transaction text (e.g. "CCD AP 11:58 TXN#001 ₹892")
        text: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add prediction columns to every row of a CSV file
    Batch {
        /// CSV file to process
        #[arg(short, long)]
        file: PathBuf,

        /// Write the augmented CSV here
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Column holding the transaction text (defaults to the configured one)
        #[arg(short, long)]
        column: Option<String>,

        /// Maximum rows to print
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },

    /// Show aggregate reports for a CSV file
    Report {
        /// CSV file to analyze
        #[arg(short, long)]
        file: PathBuf,

        /// Report kind: category, location, amount, summary, all
        #[arg(short, long, default_value = "all")]
        kind: String,

        /// Column holding the transaction text (defaults to the configured one)
        #[arg(short, long)]
        column: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the lookup tables in use and where they were loaded from
    Tables,
}
