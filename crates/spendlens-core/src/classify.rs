//! Keyword-scoring category classifier
//!
//! Each category scores one point per keyword found anywhere in the
//! lower-cased text (plain substring match, no word boundaries). The highest
//! score wins; on equal scores the category listed first in the table keeps
//! the win. Confidence is the score relative to a "fully confident" hit
//! count, capped at 1.0. It is a heuristic, not a probability.

use std::cmp::Ordering;

use crate::tables::CategoryTable;

/// Category assigned when no keyword matches
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Keyword hits that count as full confidence
pub const DEFAULT_FULL_CONFIDENCE_HITS: u32 = 3;

/// Result of classifying a transaction text
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub category: String,
    pub confidence: f64,
}

impl Classification {
    fn unknown() -> Self {
        Self {
            category: UNKNOWN_CATEGORY.to_string(),
            confidence: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    table: CategoryTable,
    full_confidence_hits: u32,
}

impl CategoryClassifier {
    pub fn new(table: CategoryTable) -> Self {
        Self {
            table,
            full_confidence_hits: DEFAULT_FULL_CONFIDENCE_HITS,
        }
    }

    /// Override the number of keyword hits that yield confidence 1.0.
    /// Zero is treated as one.
    pub fn with_full_confidence_hits(mut self, hits: u32) -> Self {
        self.full_confidence_hits = hits.max(1);
        self
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    /// Classify a transaction text. Never fails; worst case is
    /// `("Unknown", 0.0)`.
    pub fn classify(&self, text: &str) -> Classification {
        let text = text.to_lowercase();

        let mut best: Option<&str> = None;
        let mut best_score = 0usize;

        for rule in self.table.iter() {
            let score = rule
                .keywords
                .iter()
                .filter(|keyword| text.contains(keyword.as_str()))
                .count();

            // Strictly greater: ties keep the earlier category
            if score > best_score {
                best_score = score;
                best = Some(rule.name.as_str());
            }
        }

        match best {
            Some(category) => Classification {
                category: category.to_string(),
                confidence: self.confidence(best_score),
            },
            None => Classification::unknown(),
        }
    }

    /// `score / hits` capped at 1.0, rounded to two decimals with ties to
    /// even (1 of 8 hits is 0.12, 3 of 8 is 0.38)
    fn confidence(&self, score: usize) -> f64 {
        let hits = u64::from(self.full_confidence_hits);
        let score = (score as u64).min(hits);
        round_half_even(score * 100, hits) as f64 / 100.0
    }
}

/// `numerator / denominator` rounded to the nearest integer, ties to even
fn round_half_even(numerator: u64, denominator: u64) -> u64 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    match (remainder * 2).cmp(&denominator) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal if quotient % 2 == 0 => quotient,
        Ordering::Equal => quotient + 1,
    }
}
