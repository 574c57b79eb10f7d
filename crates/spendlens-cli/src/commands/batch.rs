//! Batch processing and CSV export

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use spendlens_core::batch::format_confidence;
use spendlens_core::{ProcessedBatch, TableConfig};

use super::{process_file, truncate};

pub fn cmd_batch(
    config: &TableConfig,
    file: &Path,
    output: Option<&Path>,
    column: Option<&str>,
    limit: usize,
) -> Result<()> {
    let column = column.unwrap_or(&config.text_column);
    let batch = process_file(config, file, Some(column))?;

    println!(
        "✅ Processed {} ({} rows)",
        file.display(),
        batch.len()
    );
    println!();
    print_transactions(&batch, column, limit);

    if let Some(output) = output {
        write_output(&batch, output)?;
        println!();
        println!("💾 Saved results to {}", output.display());
    }

    Ok(())
}

/// Write the augmented dataset as CSV
pub fn write_output(batch: &ProcessedBatch, output: &Path) -> Result<()> {
    let out_file = File::create(output)
        .with_context(|| format!("Failed to create file: {}", output.display()))?;
    batch
        .dataset
        .to_csv(BufWriter::new(out_file))
        .with_context(|| format!("Failed to write CSV: {}", output.display()))
}

fn print_transactions(batch: &ProcessedBatch, column: &str, limit: usize) {
    if batch.is_empty() {
        println!("   No transactions found.");
        return;
    }

    println!("🧾 All Transactions");
    println!(
        "   {:40} │ {:24} │ {:16} │ {:>10} │ {:>5}",
        "Merchant", "Category", "Location", "Amount", "Conf"
    );
    println!("   ─────────────────────────────────────────┼──────────────────────────┼──────────────────┼────────────┼──────");

    for (i, extraction) in batch.extractions.iter().enumerate().take(limit) {
        let text = batch.dataset.cell(i, column).unwrap_or_default();
        println!(
            "   {:40} │ {:24} │ {:16} │ {:>10} │ {:>5}",
            truncate(text, 40),
            truncate(&extraction.category, 24),
            truncate(&extraction.location, 16),
            format!("₹{}", extraction.amount),
            format_confidence(extraction.confidence)
        );
    }

    if batch.len() > limit {
        println!("   ... and {} more", batch.len() - limit);
    }
}
