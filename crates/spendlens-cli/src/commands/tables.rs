//! Lookup table inspection

use anyhow::Result;
use spendlens_core::config::default_config_path;
use spendlens_core::TableConfig;

pub fn cmd_tables(config: &TableConfig) -> Result<()> {
    println!("🗂️  Lookup tables: {}", config.source);
    if let Some(path) = default_config_path() {
        println!("   Override path: {}", path.display());
    }
    println!("   Text column: {}", config.text_column);
    println!("   Currency markers: {}", config.currency_markers.join(" "));
    println!(
        "   Full confidence at {} keyword hits",
        config.full_confidence_hits
    );

    println!();
    println!("🏷️  Categories ({}, earlier wins ties)", config.categories.len());
    for (i, rule) in config.categories.iter().enumerate() {
        println!("   {:>2}. {:25} {}", i + 1, rule.name, rule.keywords.join(", "));
    }

    println!();
    println!("📍 Locations ({}, first match wins)", config.locations.len());
    for (i, entry) in config.locations.iter().enumerate() {
        println!("   {:>2}. {:10} {}", i + 1, entry.code, entry.region);
    }

    Ok(())
}
