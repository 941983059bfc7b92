//! Canonical product identifiers.
//!
//! The mock backend is inconsistent about identifier types: some records
//! carry numeric ids, others strings. `ProductId` normalizes both to a
//! single canonical string form at deserialization time, so the rest of the
//! system compares identifiers exactly one way.

use serde::{Deserialize, Deserializer, Serialize};

/// A canonical product identifier.
///
/// Deserializes from a JSON string *or* number; always serializes as a
/// string. Two ids compare equal iff their canonical forms are equal.
///
/// # Example
///
/// ```rust
/// use urban_gent_core::ProductId;
///
/// let from_number: ProductId = serde_json::from_str("5").unwrap();
/// let from_string: ProductId = serde_json::from_str("\"5\"").unwrap();
/// assert_eq!(from_number, from_string);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an id from its canonical string form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Str(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Int(n) => Self(n.to_string()),
            Raw::Str(s) => Self(s),
        })
    }
}
