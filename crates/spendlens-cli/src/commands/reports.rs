//! Report command implementations

use std::path::Path;

use anyhow::Result;
use serde_json::{Map, Value};
use spendlens_core::report::{self, CategoryAmount, LabelCount};
use spendlens_core::{Extraction, TableConfig};

use super::{bar, process_file, truncate};

const BAR_WIDTH: usize = 30;

/// Report kinds accepted by `report --kind`
pub const REPORT_KINDS: &[&str] = &["category", "location", "amount", "summary", "all"];

pub fn cmd_report(
    config: &TableConfig,
    file: &Path,
    kind: &str,
    column: Option<&str>,
    json: bool,
) -> Result<()> {
    let kind = kind.to_lowercase();
    if !REPORT_KINDS.contains(&kind.as_str()) {
        anyhow::bail!(
            "Unknown report kind: {}. Available: {}",
            kind,
            REPORT_KINDS.join(", ")
        );
    }

    let batch = process_file(config, file, column)?;
    let extractions = &batch.extractions;

    if json {
        let value = report_json(extractions, &kind)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match kind.as_str() {
        "category" => print_category_counts(extractions),
        "location" => print_location_counts(extractions),
        "amount" => print_amount_by_category(extractions),
        "summary" => print_summary(extractions),
        _ => {
            print_summary(extractions);
            print_category_counts(extractions);
            print_location_counts(extractions);
            print_amount_by_category(extractions);
        }
    }

    Ok(())
}

/// JSON object keyed by report kind. `all` includes every report.
pub fn report_json(extractions: &[Extraction], kind: &str) -> Result<Value> {
    let mut reports = Map::new();
    let all = kind == "all";

    if all || kind == "summary" {
        reports.insert(
            "summary".into(),
            serde_json::to_value(report::summary(extractions))?,
        );
    }
    if all || kind == "category" {
        reports.insert(
            "category".into(),
            serde_json::to_value(report::category_counts(extractions))?,
        );
    }
    if all || kind == "location" {
        reports.insert(
            "location".into(),
            serde_json::to_value(report::location_counts(extractions))?,
        );
    }
    if all || kind == "amount" {
        reports.insert(
            "amount".into(),
            serde_json::to_value(report::amount_by_category(extractions))?,
        );
    }

    Ok(Value::Object(reports))
}

fn print_category_counts(extractions: &[Extraction]) {
    println!();
    println!("📊 Category Distribution");
    print_counts(&report::category_counts(extractions));
}

fn print_location_counts(extractions: &[Extraction]) {
    println!();
    println!("📍 Location Distribution");
    print_counts(&report::location_counts(extractions));
}

fn print_counts(counts: &[LabelCount]) {
    println!("   ─────────────────────────────────────────────────────────────");
    if counts.is_empty() {
        println!("   No transactions found.");
        return;
    }

    let max = counts.iter().map(|c| c.count as u64).max().unwrap_or(0);
    for c in counts {
        println!(
            "   {:25} │ {:>5} │ {}",
            truncate(&c.label, 25),
            c.count,
            bar(c.count as u64, max, BAR_WIDTH)
        );
    }
}

fn print_amount_by_category(extractions: &[Extraction]) {
    println!();
    println!("💰 Total Amount by Category");
    println!("   ─────────────────────────────────────────────────────────────");

    let totals: Vec<CategoryAmount> = report::amount_by_category(extractions);
    if totals.is_empty() {
        println!("   No transactions found.");
        return;
    }

    let max = totals.iter().map(|t| t.total).max().unwrap_or(0);
    for t in &totals {
        println!(
            "   {:25} │ {:>12} │ {}",
            truncate(&t.category, 25),
            format!("₹{}", t.total),
            bar(t.total, max, BAR_WIDTH)
        );
    }
}

fn print_summary(extractions: &[Extraction]) {
    let summary = report::summary(extractions);

    println!();
    println!("📦 Summary");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Total Transactions:    {}", summary.total_transactions);
    println!("   Total Amount (₹):      {}", summary.total_amount);
    println!("   Most Common Category:  {}", summary.top_category);
    println!("   Most Common Location:  {}", summary.top_location);
}
