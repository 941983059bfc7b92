//! Display formatting helpers.
//!
//! Prices render in Vietnamese đồng with dot thousands grouping and no
//! decimals, e.g. `499.000 ₫`; dates render as `dd/mm/yyyy`.

use chrono::{DateTime, Utc};
use urban_gent_core::Price;

/// Format a price as VND, e.g. `499.000 ₫`.
#[must_use]
pub fn format_vnd(price: Price) -> String {
    let amount = price.amount().round();
    let negative = amount.is_sign_negative();
    let digits = amount.abs().to_string();

    // Group digits in threes from the right, joined by dots
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped} ₫")
}

/// Format a date as `dd/mm/yyyy`.
#[must_use]
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Truncate `text` to at most `max` characters, appending an ellipsis when
/// anything was cut.
#[must_use]
pub fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let truncated: String = text.chars().take(max).collect();
    format!("{truncated}...")
}

/// Uppercase the first character.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn a hyphenated token into a display name, e.g. `best-seller` into
/// `Best Seller`. Used for both category keys and tags.
#[must_use]
pub fn format_category_name(token: &str) -> String {
    token
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}
