//! Feature record assembly from command-line `key=value` tokens.
//!
//! Each token is split on the first `=`. Values are typed with a best-effort
//! heuristic: numeric if they parse as a float, literal text otherwise. The
//! heuristic lives in [`convert_value`] so its ambiguous edge cases (e.g.
//! numeric-looking categorical codes like `007`) can be tested in isolation.

use std::fmt;

use crate::error::{Result, SeverityError};

/// A single feature value: numeric if the raw text parsed as a float,
/// otherwise the literal text.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    /// Numeric value.
    Number(f64),
    /// Text value retained as-is after numeric parsing failed.
    Text(String),
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Convert a raw feature value using the numeric-first heuristic.
///
/// Leading/trailing whitespace is tolerated when parsing, matching the
/// lenient float parsing the artifact's training tooling applies to its own
/// inputs. If parsing fails the original text is kept unmodified.
#[must_use]
pub fn convert_value(raw: &str) -> FeatureValue {
    raw.trim()
        .parse::<f64>()
        .map_or_else(|_| FeatureValue::Text(raw.to_string()), FeatureValue::Number)
}

/// The single-row input assembled from command-line tokens and handed to the
/// model for inference.
///
/// Insertion order is preserved; assigning a key twice overwrites the
/// earlier value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureRecord {
    entries: Vec<(String, FeatureValue)>,
}

impl FeatureRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a feature, overwriting any existing value for the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: FeatureValue) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Look up a feature by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Number of features in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record holds no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

/// Parse a single `key=value` token into a name and typed value.
///
/// # Errors
///
/// Returns [`SeverityError::InvalidFeature`] naming the offending token if it
/// contains no `=` or has an empty key.
pub fn parse_feature(token: &str) -> Result<(String, FeatureValue)> {
    match token.split_once('=') {
        Some((key, _)) if key.is_empty() => {
            Err(SeverityError::InvalidFeature(token.to_string()))
        }
        Some((key, value)) => Ok((key.to_string(), convert_value(value))),
        None => Err(SeverityError::InvalidFeature(token.to_string())),
    }
}

/// Parse a list of `key=value` tokens into a [`FeatureRecord`].
///
/// Stops at the first malformed token; no model work should happen before
/// this succeeds.
///
/// # Errors
///
/// Returns [`SeverityError::InvalidFeature`] for the first malformed token.
pub fn parse_features<S: AsRef<str>>(tokens: &[S]) -> Result<FeatureRecord> {
    let mut record = FeatureRecord::new();
    for token in tokens {
        let (name, value) = parse_feature(token.as_ref())?;
        record.insert(name, value);
    }
    Ok(record)
}
