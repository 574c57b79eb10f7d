//! Location inference from short region codes

use crate::tables::LocationTable;

/// Location assigned when no code matches
pub const UNKNOWN_LOCATION: &str = "Unknown";

#[derive(Debug, Clone)]
pub struct LocationResolver {
    table: LocationTable,
}

impl LocationResolver {
    pub fn new(table: LocationTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &LocationTable {
        &self.table
    }

    /// Region of the first code (in table order) found in the lower-cased
    /// text, or "Unknown".
    pub fn resolve(&self, text: &str) -> String {
        let text = text.to_lowercase();
        if text.is_empty() {
            return UNKNOWN_LOCATION.to_string();
        }

        self.table
            .iter()
            .find(|entry| text.contains(entry.code.as_str()))
            .map(|entry| entry.region.clone())
            .unwrap_or_else(|| UNKNOWN_LOCATION.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> LocationResolver {
        LocationResolver::new(LocationTable::new([
            ("ap", "Andhra Pradesh"),
            ("vij", "Andhra Pradesh"),
            ("chn", "Tamil Nadu"),
            ("gang", "Sikkim"),
            ("gangtok", "Sikkim North"),
        ]))
    }

    #[test]
    fn test_resolve_code() {
        assert_eq!(resolver().resolve("Hotel Saravana Bhavan Chn"), "Tamil Nadu");
    }

    #[test]
    fn test_no_match_is_unknown() {
        assert_eq!(resolver().resolve("no location here"), UNKNOWN_LOCATION);
    }

    #[test]
    fn test_empty_is_unknown() {
        assert_eq!(resolver().resolve(""), UNKNOWN_LOCATION);
    }

    #[test]
    fn test_code_inside_word() {
        assert_eq!(resolver().resolve("vijayawada fuel"), "Andhra Pradesh");
    }

    #[test]
    fn test_first_code_in_table_order_wins() {
        // "chn" appears earlier in the text, but "ap" is earlier in the table
        assert_eq!(resolver().resolve("chn ap"), "Andhra Pradesh");
        // "gang" is listed before "gangtok" so it always shadows it
        assert_eq!(resolver().resolve("gangtok mart"), "Sikkim");
    }
}
