// ABOUTME: Field normalizer turning malformed dataset cells into clean scalars and lists
// ABOUTME: Handles vector-literal wrappers, embedded numbers, quoted lists and escaped image URLs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Field Normalizer
//!
//! Source cells arrive as R-style vector literals (`c("a", "b")`), numbers
//! with trailing units (`"12.5g"`), placeholder tokens (`character(0)`) and
//! image URLs embedded in escaped list syntax. Normalization never fails:
//! anything unparseable resolves to an empty string, zero or an empty list.

use crate::config::intelligence::NormalizerConfig;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// First signed or unsigned decimal number in a string
static NUMBER_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[-+]?\d*\.?\d+").ok());

/// Every double-quoted item of a list literal
static QUOTED_ITEM_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).ok());

/// Declared kind of a dataset column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    String,
    /// Number possibly embedded in text
    Numeric,
    /// List literal or comma separated values
    StringList,
    /// Image URL embedded in arbitrary text
    Url,
}

/// Result of normalizing one cell
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedValue {
    /// Cleaned text (string and URL kinds)
    Text(String),
    /// Non-negative number
    Number(f64),
    /// Deduplicated, bounded list
    List(Vec<String>),
}

/// Remove a `c(` ... `)` wrapper when both ends are present
fn strip_vector_wrapper(value: &str) -> &str {
    value
        .strip_prefix("c(")
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(value)
}

/// Remove one pair of matching surrounding quotes
fn strip_surrounding_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Normalize a free-text field
///
/// Missing values become the empty string; a `c(...)` wrapper and one pair
/// of surrounding quotes are removed.
#[must_use]
pub fn normalize_string(raw: Option<&str>) -> String {
    let Some(value) = raw else {
        return String::new();
    };
    let value = value.trim();
    strip_surrounding_quotes(strip_vector_wrapper(value)).to_owned()
}

/// Normalize a numeric field
///
/// Extracts the first decimal number (`"-5.2kg"` gives `-5.2`), yields zero
/// when none is found, then clamps negatives to zero.
#[must_use]
pub fn normalize_numeric(raw: Option<&str>) -> f64 {
    normalize_optional_numeric(raw).map_or(0.0, |value| value.max(0.0))
}

/// Extract the first decimal number of a field without defaulting
///
/// Used for optional columns such as the aggregated rating, where "absent"
/// and "zero" must stay distinguishable.
#[must_use]
pub fn normalize_optional_numeric(raw: Option<&str>) -> Option<f64> {
    let pattern = NUMBER_PATTERN.as_ref()?;
    let matched = pattern.find(raw?)?;
    matched
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Field normalizer bound to a configuration
///
/// Holds the compiled image URL patterns, which depend on the configured host.
#[derive(Debug, Clone)]
pub struct FieldNormalizer {
    config: NormalizerConfig,
    url_patterns: Vec<Regex>,
}

impl FieldNormalizer {
    /// Build a normalizer, compiling the quoted and unquoted URL patterns
    #[must_use]
    pub fn new(config: &NormalizerConfig) -> Self {
        let host = regex::escape(&config.image_host);
        let url_patterns = [
            format!(r#""(https://{host}/[^"]*?)""#),
            format!(r#"(https://{host}/[^\s,)"\\]+)"#),
        ]
        .iter()
        .filter_map(|pattern| Regex::new(pattern).ok())
        .collect();

        Self {
            config: config.clone(),
            url_patterns,
        }
    }

    /// Configuration the normalizer was built with
    #[must_use]
    pub const fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize one cell according to its declared kind
    #[must_use]
    pub fn normalize(&self, raw: Option<&str>, kind: FieldKind) -> NormalizedValue {
        match kind {
            FieldKind::String => NormalizedValue::Text(normalize_string(raw)),
            FieldKind::Numeric => NormalizedValue::Number(normalize_numeric(raw)),
            FieldKind::StringList => NormalizedValue::List(self.normalize_list(raw)),
            FieldKind::Url => NormalizedValue::Text(self.normalize_image_url(raw)),
        }
    }

    fn is_placeholder(&self, value: &str) -> bool {
        self.config
            .list_placeholders
            .iter()
            .any(|token| token == value)
    }

    /// Normalize a list field
    ///
    /// Quoted items are extracted in order when the value contains a double
    /// quote, otherwise it is split on commas. Items are trimmed of residual
    /// quotes, deduplicated by first occurrence and truncated to the
    /// configured maximum. Placeholder tokens yield an empty list.
    #[must_use]
    pub fn normalize_list(&self, raw: Option<&str>) -> Vec<String> {
        let Some(value) = raw.map(str::trim) else {
            return Vec::new();
        };
        if self.is_placeholder(value) {
            return Vec::new();
        }
        let body = strip_vector_wrapper(value).trim();
        if self.is_placeholder(body) {
            return Vec::new();
        }

        let items: Vec<&str> = match QUOTED_ITEM_PATTERN.as_ref() {
            Some(pattern) if body.contains('"') => pattern
                .captures_iter(body)
                .filter_map(|captures| captures.get(1))
                .map(|matched| matched.as_str())
                .collect(),
            _ => body.split(',').collect(),
        };

        let mut cleaned: Vec<String> = Vec::new();
        for item in items {
            let item = item.trim().trim_matches(['"', '\'']).trim();
            if item.is_empty() || cleaned.iter().any(|existing| existing == item) {
                continue;
            }
            cleaned.push(item.to_owned());
            if cleaned.len() == self.config.max_list_items {
                break;
            }
        }
        cleaned
    }

    /// Normalize an image URL field
    ///
    /// Tries the quoted pattern, then the unquoted one; the first match of the
    /// first matching pattern is cleaned of escape residue and accepted only
    /// when it is longer than the minimum length and carries the image
    /// extension marker. Anything else yields the empty string.
    #[must_use]
    pub fn normalize_image_url(&self, raw: Option<&str>) -> String {
        let Some(value) = raw else {
            return String::new();
        };
        if value.is_empty() || self.is_placeholder(value) || !value.contains("https://") {
            return String::new();
        }

        for pattern in &self.url_patterns {
            let Some(url) = pattern
                .captures(value)
                .and_then(|captures| captures.get(1))
            else {
                continue;
            };
            let cleaned = url
                .as_str()
                .trim_matches(['"', '\r', '\n', '\\'])
                .trim_end_matches(',');
            if cleaned.len() > self.config.min_image_url_len
                && cleaned.contains(self.config.image_extension_marker.as_str())
            {
                return cleaned.to_owned();
            }
            trace!(url = cleaned, "Rejected image URL candidate");
        }
        String::new()
    }
}
