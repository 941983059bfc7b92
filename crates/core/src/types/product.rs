//! Products, categories, and cart lines.
//!
//! Everything here deserializes defensively: the mock backend's fixture data
//! is hand-maintained and individual fields go missing or change shape, so
//! every field defaults rather than failing the whole payload.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::types::id::ProductId;
use crate::types::price::Price;

/// A product color, either a bare name or a `{name, hex}` swatch record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    /// Bare color name, e.g. `"black"`.
    Name(String),
    /// Swatch record with a display name and hex value.
    Swatch {
        name: String,
        #[serde(default)]
        hex: String,
    },
}

impl Color {
    /// Display name of the color.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Swatch { name, .. } => name,
        }
    }
}

/// A catalog product as served by the mock backend.
///
/// Immutable from the client's perspective; fetched wholesale per view load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Pre-discount price, present only for discounted products.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
    pub category: String,
    pub images: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<Color>,
    pub tags: Vec<String>,
    pub inventory_quantity: u32,
    pub short_description: String,
    #[serde(
        deserialize_with = "deserialize_created_at",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Whether the product is discounted (original price strictly above the
    /// current price).
    #[must_use]
    pub fn on_sale(&self) -> bool {
        self.original_price
            .is_some_and(|original| original > self.price)
    }

    /// Whether the product carries the given tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates; anything else
/// becomes `None` rather than failing the product.
fn deserialize_created_at<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_created_at))
}

fn parse_created_at(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| Utc.from_utc_datetime(&naive))
        })
}

/// A line in the cart: the product's fields plus a quantity.
///
/// Identity is the product id; the store keeps at most one line per id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Create a line for `quantity` units of `product`.
    #[must_use]
    pub const fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Price × quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.amount() * Decimal::from(self.quantity)
    }
}

/// A shop category as served by `/categories`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
