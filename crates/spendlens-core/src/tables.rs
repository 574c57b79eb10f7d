//! Ordered lookup tables for category keywords and location codes
//!
//! Both tables are ordered lists rather than maps. Order is part of their
//! meaning:
//! - categories: an earlier category wins when two categories score equally
//! - locations: the first code found in the text wins, so a code that is a
//!   substring of another code must be placed deliberately

/// A category and the lower-cased keywords that indicate it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Ordered category -> keywords table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryTable {
    rules: Vec<CategoryRule>,
}

impl CategoryTable {
    /// Build a table, lower-casing keywords and dropping repeated ones
    /// (the first occurrence keeps its place).
    pub fn new<N, I, K>(entries: impl IntoIterator<Item = (N, I)>) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let rules = entries
            .into_iter()
            .map(|(name, keywords)| {
                let mut unique: Vec<String> = Vec::new();
                for keyword in keywords {
                    let keyword = keyword.as_ref().to_lowercase();
                    if !unique.contains(&keyword) {
                        unique.push(keyword);
                    }
                }
                CategoryRule {
                    name: name.into(),
                    keywords: unique,
                }
            })
            .collect();

        Self { rules }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// A short location code and the region it stands for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCode {
    pub code: String,
    pub region: String,
}

/// Ordered code -> region table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocationTable {
    codes: Vec<LocationCode>,
}

impl LocationTable {
    /// Build a table, lower-casing codes. Order is kept as given.
    pub fn new<C, R>(entries: impl IntoIterator<Item = (C, R)>) -> Self
    where
        C: AsRef<str>,
        R: Into<String>,
    {
        let codes = entries
            .into_iter()
            .map(|(code, region)| LocationCode {
                code: code.as_ref().to_lowercase(),
                region: region.into(),
            })
            .collect();

        Self { codes }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocationCode> {
        self.codes.iter()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_table_normalizes_keywords() {
        let table = CategoryTable::new([("Coffee", vec!["CCD", "Tea", "ccd"])]);
        let rule = table.iter().next().unwrap();
        assert_eq!(rule.name, "Coffee");
        assert_eq!(rule.keywords, vec!["ccd", "tea"]);
    }

    #[test]
    fn test_category_table_keeps_order() {
        let table = CategoryTable::new([
            ("Zeta", vec!["z"]),
            ("Alpha", vec!["a"]),
            ("Mid", vec!["m"]),
        ]);
        let names: Vec<&str> = table.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_location_table_lowercases_codes() {
        let table = LocationTable::new([("CHN", "Tamil Nadu"), ("Hyd", "Telangana")]);
        let codes: Vec<&str> = table.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["chn", "hyd"]);
        assert_eq!(table.iter().next().unwrap().region, "Tamil Nadu");
    }

    #[test]
    fn test_empty_tables() {
        assert!(CategoryTable::default().is_empty());
        assert!(LocationTable::default().is_empty());
    }
}
