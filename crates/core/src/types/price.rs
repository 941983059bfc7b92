//! Money and price-range tokens.
//!
//! Prices are decimal VND amounts. Price ranges are the `"min-max"` tokens
//! the shop filters use in both the UI and the persisted filter state; both
//! bounds are inclusive.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A product price in VND.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error parsing a `"min-max"` price range token.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceRangeError {
    /// The token has no `-` separating the two bounds.
    #[error("price range `{0}` is missing a `-` separator")]
    MissingSeparator(String),

    /// One of the bounds is not a number.
    #[error("price range `{0}` has a non-numeric bound")]
    InvalidBound(String),
}

/// An inclusive price range, written as `"min-max"`.
///
/// A product price `p` falls in the range iff `min <= p <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PriceRange {
    min: Price,
    max: Price,
}

impl PriceRange {
    /// Create a range from inclusive bounds.
    #[must_use]
    pub const fn new(min: Price, max: Price) -> Self {
        Self { min, max }
    }

    /// Lower inclusive bound.
    #[must_use]
    pub const fn min(self) -> Price {
        self.min
    }

    /// Upper inclusive bound.
    #[must_use]
    pub const fn max(self) -> Price {
        self.max
    }

    /// Whether `price` falls inside the range (bounds inclusive).
    #[must_use]
    pub fn contains(&self, price: Price) -> bool {
        self.min <= price && price <= self.max
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

impl FromStr for PriceRange {
    type Err = PriceRangeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let (min, max) = token
            .split_once('-')
            .ok_or_else(|| PriceRangeError::MissingSeparator(token.to_owned()))?;

        let parse = |bound: &str| {
            Decimal::from_str(bound.trim())
                .map(Price::new)
                .map_err(|_| PriceRangeError::InvalidBound(token.to_owned()))
        };

        Ok(Self {
            min: parse(min)?,
            max: parse(max)?,
        })
    }
}

impl Serialize for PriceRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PriceRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_round_trips_token() {
        let range: PriceRange = "100000-500000".parse().unwrap();
        assert_eq!(range.min(), Price::from(100_000));
        assert_eq!(range.max(), Price::from(500_000));
        assert_eq!(range.to_string(), "100000-500000");
    }

    #[test]
    fn bounds_are_inclusive() {
        let range: PriceRange = "100000-500000".parse().unwrap();
        assert!(range.contains(Price::from(100_000)));
        assert!(range.contains(Price::from(500_000)));
        assert!(range.contains(Price::from(250_000)));
        assert!(!range.contains(Price::from(99_999)));
        assert!(!range.contains(Price::from(500_001)));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert_eq!(
            "100000".parse::<PriceRange>(),
            Err(PriceRangeError::MissingSeparator("100000".to_owned()))
        );
        assert!(matches!(
            "abc-def".parse::<PriceRange>(),
            Err(PriceRangeError::InvalidBound(_))
        ));
    }

    #[test]
    fn serde_uses_token_form() {
        let range: PriceRange = "0-100000".parse().unwrap();
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, "\"0-100000\"");
        let back: PriceRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);
    }

    #[test]
    fn price_accepts_json_numbers() {
        let price: Price = serde_json::from_str("150000").unwrap();
        assert_eq!(price, Price::from(150_000));
    }
}
