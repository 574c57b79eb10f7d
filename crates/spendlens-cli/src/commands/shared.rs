//! Shared command utilities
//!
//! This module contains:
//! - `load_tables` - Resolve the lookup table configuration
//! - `read_dataset` - Open and parse an input CSV
//! - `process_file` - Run the batch pipeline over a CSV file

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use spendlens_core::{BatchProcessor, Dataset, ProcessedBatch, TableConfig, TransactionPipeline};
use tracing::debug;

/// Load lookup tables from an explicit path, the default override location,
/// or the built-in defaults
pub fn load_tables(config_path: Option<&Path>) -> Result<TableConfig> {
    let config = TableConfig::load(config_path).context("Failed to load lookup tables")?;
    debug!("Lookup tables: {}", config.source);
    Ok(config)
}

pub fn build_pipeline(config: &TableConfig) -> Result<TransactionPipeline> {
    TransactionPipeline::from_config(config).context("Failed to build extraction pipeline")
}

pub fn read_dataset(file: &Path) -> Result<Dataset> {
    let csv_file =
        File::open(file).with_context(|| format!("Failed to open file: {}", file.display()))?;
    Dataset::from_csv(csv_file).with_context(|| format!("Failed to parse CSV: {}", file.display()))
}

/// Read a CSV file and add prediction columns to every row
pub fn process_file(
    config: &TableConfig,
    file: &Path,
    column: Option<&str>,
) -> Result<ProcessedBatch> {
    let dataset = read_dataset(file)?;
    let pipeline = build_pipeline(config)?;
    let column = column.unwrap_or(&config.text_column);

    BatchProcessor::new(&pipeline)
        .with_text_column(column)
        .process(&dataset)
        .with_context(|| format!("Failed to process {}", file.display()))
}
