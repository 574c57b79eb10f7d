//! SpendLens Core Library
//!
//! Turns free-text transaction descriptions into structured data:
//! - Category classification by keyword scoring
//! - Location inference from short region codes
//! - Amount extraction from currency-marked numerals, with a digit-run fallback
//! - Batch processing of CSV datasets with derived prediction columns
//! - Aggregate reports (counts, totals, summary)
//! - Lookup tables loaded from embedded defaults or an override file

pub mod amount;
pub mod batch;
pub mod classify;
pub mod config;
pub mod dataset;
pub mod error;
pub mod location;
pub mod pipeline;
pub mod report;
pub mod tables;

pub use amount::AmountExtractor;
pub use batch::{BatchProcessor, ProcessedBatch};
pub use classify::{CategoryClassifier, Classification};
pub use config::{ConfigSource, TableConfig};
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use location::LocationResolver;
pub use pipeline::{Extraction, TransactionPipeline};
pub use report::{CategoryAmount, LabelCount, Summary};
pub use tables::{CategoryTable, LocationTable};
