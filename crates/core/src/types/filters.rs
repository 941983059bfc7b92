//! Filter and sort descriptors for the shop view.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::price::PriceRange;
use crate::types::product::Product;

/// A product status filter key.
///
/// `sale` is derived from pricing; `new` and `best-seller` come from the
/// product's tag set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Sale,
    New,
    BestSeller,
}

impl Status {
    /// Wire form of the key (`sale`, `new`, `best-seller`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sale => "sale",
            Self::New => "new",
            Self::BestSeller => "best-seller",
        }
    }

    /// Lenient parse; unknown keys yield `None`.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "sale" => Some(Self::Sale),
            "new" => Some(Self::New),
            "best-seller" => Some(Self::BestSeller),
            _ => None,
        }
    }

    /// Whether `product` matches this status.
    #[must_use]
    pub fn matches(self, product: &Product) -> bool {
        match self {
            Self::Sale => product.on_sale(),
            Self::New => product.has_tag("new"),
            Self::BestSeller => product.has_tag("best-seller"),
        }
    }
}

/// A sort order for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    Newest,
}

impl SortKey {
    /// Lenient parse of the UI token; unrecognized tokens yield `None`,
    /// which leaves listings in their incoming order.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "name-asc" => Some(Self::NameAsc),
            "name-desc" => Some(Self::NameDesc),
            "price-asc" => Some(Self::PriceAsc),
            "price-desc" => Some(Self::PriceDesc),
            "newest" => Some(Self::Newest),
            _ => None,
        }
    }
}

/// The shop's active filters.
///
/// An empty set on any axis means that axis filters nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub categories: BTreeSet<String>,
    pub price_ranges: BTreeSet<PriceRange>,
    pub statuses: BTreeSet<Status>,
}

impl FilterState {
    /// Whether every axis is empty (no filtering at all).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.price_ranges.is_empty() && self.statuses.is_empty()
    }
}
