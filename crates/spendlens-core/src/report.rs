//! Aggregate reports over processed transactions

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::pipeline::Extraction;

/// Placeholder for "most common" values of an empty batch
pub const NOT_AVAILABLE: &str = "N/A";

/// Number of transactions sharing a label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Total amount for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryAmount {
    pub category: String,
    pub total: u64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_transactions: usize,
    pub total_amount: u64,
    pub top_category: String,
    pub top_location: String,
}

/// Transactions per predicted category, most frequent first
pub fn category_counts(extractions: &[Extraction]) -> Vec<LabelCount> {
    value_counts(extractions.iter().map(|e| e.category.as_str()))
}

/// Transactions per predicted location, most frequent first
pub fn location_counts(extractions: &[Extraction]) -> Vec<LabelCount> {
    value_counts(extractions.iter().map(|e| e.location.as_str()))
}

/// Total amount per category, ordered by category name
pub fn amount_by_category(extractions: &[Extraction]) -> Vec<CategoryAmount> {
    let mut groups: BTreeMap<&str, (u64, usize)> = BTreeMap::new();
    for e in extractions {
        let entry = groups.entry(e.category.as_str()).or_insert((0, 0));
        entry.0 = entry.0.saturating_add(e.amount);
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(category, (total, count))| CategoryAmount {
            category: category.to_string(),
            total,
            count,
        })
        .collect()
}

pub fn summary(extractions: &[Extraction]) -> Summary {
    let total_amount = extractions
        .iter()
        .fold(0u64, |acc, e| acc.saturating_add(e.amount));

    Summary {
        total_transactions: extractions.len(),
        total_amount,
        top_category: mode(&category_counts(extractions)),
        top_location: mode(&location_counts(extractions)),
    }
}

/// Count labels; descending by count, ties by label ascending
fn value_counts<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<LabelCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut result: Vec<LabelCount> = counts
        .into_iter()
        .map(|(label, count)| LabelCount {
            label: label.to_string(),
            count,
        })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    result
}

/// Most common label (smallest label among ties), or "N/A"
fn mode(counts: &[LabelCount]) -> String {
    counts
        .first()
        .map(|c| c.label.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
