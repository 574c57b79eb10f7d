//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `batch` - CSV batch processing and export
//! - `predict` - Single transaction prediction
//! - `reports` - Report generation commands
//! - `shared` - Shared utilities (load_tables, read_dataset, process_file)
//! - `tables` - Lookup table inspection

pub mod batch;
pub mod predict;
pub mod reports;
pub mod shared;
pub mod tables;

// Re-export command functions for main.rs
pub use batch::*;
pub use predict::*;
pub use reports::*;
pub use shared::*;
pub use tables::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Horizontal bar scaled so that `max` fills `width` cells
pub fn bar(value: u64, max: u64, width: usize) -> String {
    if max == 0 || value == 0 {
        return String::new();
    }
    let cells = ((value as f64 / max as f64) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}
