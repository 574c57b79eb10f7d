//! Batch processing: run the pipeline over every row of a dataset
//!
//! Appends four derived columns: `Predicted_Category`, `Confidence`,
//! `Predicted_Location` and `Amount`. Each row is processed on its own; no
//! row influences another. If the dataset already carries the derived
//! columns they are overwritten in place, so re-running over an augmented
//! dataset reproduces the same output.

use tracing::debug;

use crate::config::DEFAULT_TEXT_COLUMN;
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::pipeline::{Extraction, TransactionPipeline};

pub const PREDICTED_CATEGORY: &str = "Predicted_Category";
pub const CONFIDENCE: &str = "Confidence";
pub const PREDICTED_LOCATION: &str = "Predicted_Location";
pub const AMOUNT: &str = "Amount";

/// Result of processing a batch
#[derive(Debug, Clone)]
pub struct ProcessedBatch {
    /// Input dataset with the derived columns added
    pub dataset: Dataset,
    /// One extraction per input row, in row order
    pub extractions: Vec<Extraction>,
}

impl ProcessedBatch {
    pub fn len(&self) -> usize {
        self.extractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extractions.is_empty()
    }
}

pub struct BatchProcessor<'a> {
    pipeline: &'a TransactionPipeline,
    text_column: String,
}

impl<'a> BatchProcessor<'a> {
    pub fn new(pipeline: &'a TransactionPipeline) -> Self {
        Self {
            pipeline,
            text_column: DEFAULT_TEXT_COLUMN.to_string(),
        }
    }

    /// Use a different column as the transaction text
    pub fn with_text_column(mut self, column: impl Into<String>) -> Self {
        self.text_column = column.into();
        self
    }

    pub fn text_column(&self) -> &str {
        &self.text_column
    }

    /// Process every row.
    ///
    /// Fails with [`Error::Schema`] before touching any row when the text
    /// column is missing. Per-row problems never fail the batch.
    pub fn process(&self, input: &Dataset) -> Result<ProcessedBatch> {
        let text_idx = input.column_index(&self.text_column).ok_or_else(|| {
            Error::Schema(format!(
                "Input must contain a '{}' column",
                self.text_column
            ))
        })?;

        let extractions: Vec<Extraction> = input
            .rows()
            .iter()
            .map(|row| self.pipeline.extract(row.get(text_idx).map(String::as_str)))
            .collect();

        let mut dataset = input.clone();
        dataset.set_column(
            PREDICTED_CATEGORY,
            extractions.iter().map(|e| e.category.clone()).collect(),
        )?;
        dataset.set_column(
            CONFIDENCE,
            extractions
                .iter()
                .map(|e| format_confidence(e.confidence))
                .collect(),
        )?;
        dataset.set_column(
            PREDICTED_LOCATION,
            extractions.iter().map(|e| e.location.clone()).collect(),
        )?;
        dataset.set_column(
            AMOUNT,
            extractions.iter().map(|e| e.amount.to_string()).collect(),
        )?;

        debug!(
            "Processed {} rows using column '{}'",
            extractions.len(),
            self.text_column
        );

        Ok(ProcessedBatch {
            dataset,
            extractions,
        })
    }
}

/// Render a confidence the way the CSV export always has: whole values keep
/// one decimal (`0.0`, `1.0`), others use the shortest form (`0.33`).
pub fn format_confidence(confidence: f64) -> String {
    if confidence.fract() == 0.0 {
        format!("{:.1}", confidence)
    } else {
        confidence.to_string()
    }
}
