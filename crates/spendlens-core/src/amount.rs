//! Best-effort amount extraction from transaction text
//!
//! Two strategies, tried in order:
//! 1. Currency-marked numeral: a marker such as `₹` or `Rs`, one optional
//!    whitespace character, then digits with optional `,` grouping
//!    (`₹892`, `Rs 1,250`). The first one in the text is used.
//! 2. Fallback: with all commas removed, the *last* run of two or more
//!    digits. A transaction ID such as `TXN#001` can win over a real amount
//!    that appears before it; the rightmost run is taken regardless of value.
//!
//! Digits may come from any script with Unicode decimal digits
//! (`₹८९२` is 892). Extraction never fails. Anything that cannot be parsed
//! yields 0.

use regex::Regex;
use serde_json::Value;

use crate::error::Result;

/// Currency markers used when none are configured
pub const DEFAULT_CURRENCY_MARKERS: &[&str] = &["₹", "Rs.", "Rs", "INR"];

#[derive(Debug, Clone)]
pub struct AmountExtractor {
    currency: Option<Regex>,
    digit_run: Regex,
}

impl AmountExtractor {
    /// Build an extractor for the given currency markers.
    ///
    /// Markers starting with a letter or digit only match at a word boundary
    /// and ignore case, so "hours 12" is not read as "rs 12".
    pub fn new<S: AsRef<str>>(markers: &[S]) -> Result<Self> {
        let mut markers: Vec<&str> = markers
            .iter()
            .map(|m| m.as_ref())
            .filter(|m| !m.is_empty())
            .collect();
        // Longest first so "Rs." is preferred over "Rs"
        markers.sort_by_key(|m| std::cmp::Reverse(m.chars().count()));

        let currency = if markers.is_empty() {
            None
        } else {
            let alternatives: Vec<String> = markers
                .iter()
                .map(|m| {
                    let escaped = regex::escape(m);
                    if m.chars().next().is_some_and(char::is_alphanumeric) {
                        format!(r"(?i:\b{})", escaped)
                    } else {
                        escaped
                    }
                })
                .collect();
            let pattern = format!(r"(?:{})\s?([\d,]+)", alternatives.join("|"));
            Some(Regex::new(&pattern)?)
        };

        Ok(Self {
            currency,
            digit_run: Regex::new(r"\d{2,}").expect("valid regex"),
        })
    }

    /// Extract an amount from optional text. `None` yields 0.
    pub fn extract(&self, text: Option<&str>) -> u64 {
        match text {
            Some(text) => self.extract_str(text),
            None => 0,
        }
    }

    /// Extract an amount from a dynamically typed value. Only strings are
    /// inspected; numbers, booleans, null, arrays and objects yield 0.
    pub fn extract_value(&self, value: &Value) -> u64 {
        match value {
            Value::String(text) => self.extract_str(text),
            _ => 0,
        }
    }

    pub fn extract_str(&self, text: &str) -> u64 {
        if let Some(currency) = &self.currency {
            if let Some(caps) = currency.captures(text) {
                let digits = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
                return parse_digits(&digits.replace(',', ""));
            }
        }

        let cleaned = text.replace(',', "");
        self.digit_run
            .find_iter(&cleaned)
            .last()
            .map(|m| parse_digits(m.as_str()))
            .unwrap_or(0)
    }
}

/// Code points of the digit zero for every Unicode decimal digit (Nd) run.
/// Each run holds the ten digits 0-9 in order.
const DECIMAL_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Value of a decimal digit in any script
fn decimal_value(c: char) -> Option<u64> {
    let cp = u32::from(c);
    DECIMAL_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&cp))
        .map(|&zero| u64::from(cp - zero))
}

/// Parse a digit string, swallowing failures (overflow, unknown digits) as 0
fn parse_digits(digits: &str) -> u64 {
    digits
        .chars()
        .try_fold(0u64, |acc, c| acc.checked_mul(10)?.checked_add(decimal_value(c)?))
        .unwrap_or(0)
}
