//! Single transaction prediction

use anyhow::Result;
use spendlens_core::batch::format_confidence;
use spendlens_core::{Extraction, TableConfig};

use super::build_pipeline;

pub fn cmd_predict(config: &TableConfig, text: &str, json: bool) -> Result<()> {
    if text.trim().is_empty() {
        println!("⚠️  Please enter a transaction!");
        return Ok(());
    }

    let pipeline = build_pipeline(config)?;
    let result = pipeline.extract(Some(text));

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("✅ Prediction Complete!");
        print!("{}", format_prediction(&result));
    }

    Ok(())
}

/// Human-readable prediction block
pub fn format_prediction(result: &Extraction) -> String {
    format!(
        "   Category:   {}\n   Location:   {}\n   Confidence: {}\n   Amount:     ₹{}\n",
        result.category,
        result.location,
        format_confidence(result.confidence),
        result.amount
    )
}
