//! Lookup table configuration
//!
//! Tables and tuning knobs are loaded with a two-layer resolution:
//! 1. An override file: the explicit path if one is given, otherwise
//!    ~/.local/share/spendlens/tables.toml when it exists
//! 2. Embedded defaults (compiled into binary)
//!
//! Sections missing from an override file are taken from the embedded
//! defaults, so an override may contain only `[[locations]]`, for example.
//! `[[categories]]` and `[[locations]]` are arrays of tables, which keeps
//! their order explicit.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::classify::DEFAULT_FULL_CONFIDENCE_HITS;
use crate::error::{Error, Result};
use crate::tables::{CategoryTable, LocationTable};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/tables.toml");

/// Text column used when the config does not name one
pub const DEFAULT_TEXT_COLUMN: &str = "merchant";

/// Where a configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Embedded,
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "built-in defaults"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fully resolved table configuration
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub categories: CategoryTable,
    pub locations: LocationTable,
    /// Markers that introduce a currency amount
    pub currency_markers: Vec<String>,
    /// Keyword hits that yield confidence 1.0
    pub full_confidence_hits: u32,
    /// Batch column holding the transaction text
    pub text_column: String,
    pub source: ConfigSource,
}

impl TableConfig {
    /// Embedded defaults only
    pub fn embedded() -> Result<Self> {
        let raw = parse_raw(DEFAULT_CONFIG)?;
        build(raw, ConfigSource::Embedded)
    }

    /// Load configuration (override first, then embedded defaults).
    ///
    /// An explicit path must exist. Without one, the default override
    /// location is used only if a file is present there.
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let path = match override_path {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Some(path.to_path_buf())
            }
            None => default_config_path().filter(|p| p.exists()),
        };

        match path {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("Using built-in lookup tables");
                Self::embedded()
            }
        }
    }

    /// Load an override file layered over the embedded defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        debug!("Loading lookup tables from {}", path.display());
        Self::from_toml_str(&content, ConfigSource::File(path.to_path_buf()))
    }

    /// Parse override TOML content layered over the embedded defaults
    pub fn from_toml_str(content: &str, source: ConfigSource) -> Result<Self> {
        let base = parse_raw(DEFAULT_CONFIG)?;
        let overlay = parse_raw(content)?;
        build(base.merge(overlay), source)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("spendlens").join("tables.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    scoring: Option<RawScoring>,
    amount: Option<RawAmount>,
    batch: Option<RawBatch>,
    categories: Option<Vec<RawCategory>>,
    locations: Option<Vec<RawLocation>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawScoring {
    full_confidence_hits: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct RawAmount {
    currency_markers: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawBatch {
    text_column: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    name: String,
    keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    code: String,
    region: String,
}

impl RawConfig {
    /// Values present in `overlay` replace those in `self`. Tables are
    /// replaced whole, never merged entry by entry.
    fn merge(self, overlay: RawConfig) -> RawConfig {
        let scoring = RawScoring {
            full_confidence_hits: overlay
                .scoring
                .and_then(|s| s.full_confidence_hits)
                .or(self.scoring.and_then(|s| s.full_confidence_hits)),
        };
        let amount = RawAmount {
            currency_markers: overlay
                .amount
                .and_then(|a| a.currency_markers)
                .or(self.amount.and_then(|a| a.currency_markers)),
        };
        let batch = RawBatch {
            text_column: overlay
                .batch
                .and_then(|b| b.text_column)
                .or(self.batch.and_then(|b| b.text_column)),
        };

        RawConfig {
            scoring: Some(scoring),
            amount: Some(amount),
            batch: Some(batch),
            categories: overlay.categories.or(self.categories),
            locations: overlay.locations.or(self.locations),
        }
    }
}

fn parse_raw(content: &str) -> Result<RawConfig> {
    toml::from_str(content).map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))
}

/// Validate raw config and build the resolved tables
fn build(raw: RawConfig, source: ConfigSource) -> Result<TableConfig> {
    let categories = raw.categories.unwrap_or_default();
    for category in &categories {
        if category.name.trim().is_empty() {
            return Err(Error::Config("Category with empty name".into()));
        }
        // An empty keyword would match every text
        if category.keywords.iter().any(|k| k.is_empty()) {
            return Err(Error::Config(format!(
                "Category '{}' has an empty keyword",
                category.name
            )));
        }
    }

    let locations = raw.locations.unwrap_or_default();
    for location in &locations {
        if location.code.is_empty() {
            return Err(Error::Config(format!(
                "Location '{}' has an empty code",
                location.region
            )));
        }
    }

    let full_confidence_hits = raw
        .scoring
        .and_then(|s| s.full_confidence_hits)
        .unwrap_or(DEFAULT_FULL_CONFIDENCE_HITS);
    if full_confidence_hits == 0 {
        return Err(Error::Config(
            "scoring.full_confidence_hits must be at least 1".into(),
        ));
    }

    let currency_markers = raw
        .amount
        .and_then(|a| a.currency_markers)
        .unwrap_or_default();
    if currency_markers.iter().any(|m| m.is_empty()) {
        return Err(Error::Config("Empty currency marker".into()));
    }

    let text_column = raw
        .batch
        .and_then(|b| b.text_column)
        .unwrap_or_else(|| DEFAULT_TEXT_COLUMN.to_string());

    debug!(
        categories = categories.len(),
        locations = locations.len(),
        "Lookup tables resolved from {}",
        source
    );

    Ok(TableConfig {
        categories: CategoryTable::new(categories.into_iter().map(|c| (c.name, c.keywords))),
        locations: LocationTable::new(locations.into_iter().map(|l| (l.code, l.region))),
        currency_markers,
        full_confidence_hits,
        text_column,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_config() {
        let config = TableConfig::embedded().unwrap();
        assert_eq!(config.source, ConfigSource::Embedded);
        assert_eq!(config.categories.len(), 19);
        assert_eq!(config.locations.len(), 11);
        assert_eq!(config.full_confidence_hits, 3);
        assert_eq!(config.text_column, "merchant");
        assert!(config.currency_markers.iter().any(|m| m == "₹"));
    }

    #[test]
    fn test_embedded_order_preserved() {
        let config = TableConfig::embedded().unwrap();
        let first = config.categories.iter().next().unwrap();
        assert_eq!(first.name, "Tea/Coffee");
        let last = config.categories.iter().last().unwrap();
        assert_eq!(last.name, "Others (Large Payments)");

        let codes: Vec<&str> = config.locations.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(&codes[..3], &["ap", "gnt", "vij"]);
        assert_eq!(codes.last(), Some(&"gangtok"));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let content = r#"
[[locations]]
code = "blr"
region = "Karnataka"
"#;
        let config = TableConfig::from_toml_str(content, ConfigSource::Embedded).unwrap();
        assert_eq!(config.locations.len(), 1);
        assert_eq!(config.locations.iter().next().unwrap().region, "Karnataka");
        // Categories and scalars still come from the embedded defaults
        assert_eq!(config.categories.len(), 19);
        assert_eq!(config.full_confidence_hits, 3);
    }

    #[test]
    fn test_scalar_overrides() {
        let content = r#"
[scoring]
full_confidence_hits = 5

[amount]
currency_markers = ["$"]

[batch]
text_column = "description"
"#;
        let config = TableConfig::from_toml_str(content, ConfigSource::Embedded).unwrap();
        assert_eq!(config.full_confidence_hits, 5);
        assert_eq!(config.currency_markers, vec!["$".to_string()]);
        assert_eq!(config.text_column, "description");
    }

    #[test]
    fn test_zero_full_confidence_hits_rejected() {
        let content = "[scoring]\nfull_confidence_hits = 0\n";
        let err = TableConfig::from_toml_str(content, ConfigSource::Embedded).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let content = r#"
[[categories]]
name = "Broken"
keywords = ["ok", ""]
"#;
        let err = TableConfig::from_toml_str(content, ConfigSource::Embedded).unwrap_err();
        assert!(err.to_string().contains("Broken"));
    }

    #[test]
    fn test_empty_location_code_rejected() {
        let content = r#"
[[locations]]
code = ""
region = "Nowhere"
"#;
        assert!(TableConfig::from_toml_str(content, ConfigSource::Embedded).is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = TableConfig::from_toml_str("[[categories]\nname=", ConfigSource::Embedded)
            .unwrap_err();
        assert!(err.to_string().contains("Invalid config TOML"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[categories]]\nname = \"Snacks\"\nkeywords = [\"chips\"]"
        )
        .unwrap();

        let config = TableConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.source, ConfigSource::File(file.path().to_path_buf()));
        assert_eq!(config.categories.len(), 1);
        assert_eq!(config.categories.iter().next().unwrap().name, "Snacks");
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let err = TableConfig::load(Some(Path::new("/nonexistent/spendlens/tables.toml")))
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
