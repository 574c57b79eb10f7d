//! Per-transaction extraction pipeline
//!
//! Runs the category classifier, location resolver and amount extractor
//! independently over one text and merges their results. The pipeline holds
//! only immutable tables, so a single instance can be shared freely.

use serde::Serialize;

use crate::amount::AmountExtractor;
use crate::classify::CategoryClassifier;
use crate::config::TableConfig;
use crate::error::Result;
use crate::location::LocationResolver;

/// Structured data extracted from one transaction text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction {
    pub category: String,
    pub confidence: f64,
    pub location: String,
    pub amount: u64,
}

#[derive(Debug, Clone)]
pub struct TransactionPipeline {
    classifier: CategoryClassifier,
    resolver: LocationResolver,
    amounts: AmountExtractor,
}

impl TransactionPipeline {
    pub fn new(
        classifier: CategoryClassifier,
        resolver: LocationResolver,
        amounts: AmountExtractor,
    ) -> Self {
        Self {
            classifier,
            resolver,
            amounts,
        }
    }

    /// Build the pipeline from a resolved table configuration
    pub fn from_config(config: &TableConfig) -> Result<Self> {
        let classifier = CategoryClassifier::new(config.categories.clone())
            .with_full_confidence_hits(config.full_confidence_hits);
        let resolver = LocationResolver::new(config.locations.clone());
        let amounts = AmountExtractor::new(config.currency_markers.as_slice())?;
        Ok(Self::new(classifier, resolver, amounts))
    }

    /// Pipeline over the embedded default tables
    pub fn with_defaults() -> Result<Self> {
        Self::from_config(&TableConfig::embedded()?)
    }

    pub fn classifier(&self) -> &CategoryClassifier {
        &self.classifier
    }

    pub fn resolver(&self) -> &LocationResolver {
        &self.resolver
    }

    pub fn amounts(&self) -> &AmountExtractor {
        &self.amounts
    }

    /// Extract category, location and amount. Absent text behaves like
    /// empty text for classification and location, and yields amount 0.
    pub fn extract(&self, text: Option<&str>) -> Extraction {
        let classification = self.classifier.classify(text.unwrap_or_default());
        Extraction {
            category: classification.category,
            confidence: classification.confidence,
            location: self.resolver.resolve(text.unwrap_or_default()),
            amount: self.amounts.extract(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{CategoryTable, LocationTable};

    fn pipeline() -> TransactionPipeline {
        TransactionPipeline::with_defaults().unwrap()
    }

    #[test]
    fn test_end_to_end_sample() {
        let result = pipeline().extract(Some("CCD AP 11:58 TXN#001 ₹892"));
        assert_eq!(result.category, "Tea/Coffee");
        assert!(result.confidence > 0.0);
        assert_eq!(result.location, "Andhra Pradesh");
        assert_eq!(result.amount, 892);
    }

    #[test]
    fn test_absent_text() {
        let result = pipeline().extract(None);
        assert_eq!(
            result,
            Extraction {
                category: "Unknown".into(),
                confidence: 0.0,
                location: "Unknown".into(),
                amount: 0,
            }
        );
    }

    #[test]
    fn test_restaurant_in_chennai() {
        let result = pipeline().extract(Some("Hotel Saravana Bhavan Chn ₹450"));
        assert_eq!(result.category, "Restaurant");
        assert_eq!(result.location, "Tamil Nadu");
        assert_eq!(result.amount, 450);
    }

    #[test]
    fn test_injected_tables() {
        let pipeline = TransactionPipeline::new(
            CategoryClassifier::new(CategoryTable::new([("Books", vec!["novel"])])),
            LocationResolver::new(LocationTable::new([("blr", "Karnataka")])),
            AmountExtractor::new(&["$"]).unwrap(),
        );
        let result = pipeline.extract(Some("Novel store BLR $35"));
        assert_eq!(result.category, "Books");
        assert_eq!(result.confidence, 0.33);
        assert_eq!(result.location, "Karnataka");
        assert_eq!(result.amount, 35);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let p = pipeline();
        let text = Some("Apollo pharmacy hyd 1,240");
        assert_eq!(p.extract(text), p.extract(text));
    }

    #[test]
    fn test_serializes_to_json() {
        let result = pipeline().extract(Some("CCD AP ₹892"));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["category"], "Tea/Coffee");
        assert_eq!(json["amount"], 892);
    }
}
