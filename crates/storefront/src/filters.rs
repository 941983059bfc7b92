//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;
use std::str::FromStr;

use rust_decimal::Decimal;
use urban_gent_core::Price;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Formats a raw VND amount with dot grouping.
///
/// Usage in templates: `{{ 499000|vnd }}` renders `499.000 ₫`.
#[askama::filter_fn]
pub fn vnd(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let price = Decimal::from_str(&amount.to_string())
        .map(Price::new)
        .unwrap_or_default();
    Ok(crate::format::format_vnd(price))
}
