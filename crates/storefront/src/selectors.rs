//! Product selectors - pure filtering and sorting over product lists.
//!
//! Every function here is total and side-effect free: missing or malformed
//! input narrows nothing instead of failing, and an empty filter axis is a
//! no-op. Composition order in [`select_products`] is fixed (search, then
//! category, then price, then status) purely so output is deterministic;
//! each stage is a set intersection, so the result itself is
//! order-independent.

use std::collections::BTreeSet;

use urban_gent_core::{FilterState, PriceRange, Product, SortKey, Status};

use crate::format::format_category_name;

/// Keep products whose name or short description contains `query`,
/// case-insensitively. A blank or whitespace-only query keeps everything.
#[must_use]
pub fn search_products(products: &[Product], query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products.to_vec();
    }

    products
        .iter()
        .filter(|product| {
            product.name.to_lowercase().contains(&needle)
                || product.short_description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Keep products whose category is in `categories`; empty set keeps all.
#[must_use]
pub fn filter_by_category(products: &[Product], categories: &BTreeSet<String>) -> Vec<Product> {
    if categories.is_empty() {
        return products.to_vec();
    }

    products
        .iter()
        .filter(|product| categories.contains(&product.category))
        .cloned()
        .collect()
}

/// Keep products whose price falls in ANY of `ranges` (bounds inclusive);
/// empty set keeps all.
#[must_use]
pub fn filter_by_price(products: &[Product], ranges: &BTreeSet<PriceRange>) -> Vec<Product> {
    if ranges.is_empty() {
        return products.to_vec();
    }

    products
        .iter()
        .filter(|product| ranges.iter().any(|range| range.contains(product.price)))
        .cloned()
        .collect()
}

/// Keep products matching ANY of `statuses`; empty set keeps all.
#[must_use]
pub fn filter_by_status(products: &[Product], statuses: &BTreeSet<Status>) -> Vec<Product> {
    if statuses.is_empty() {
        return products.to_vec();
    }

    products
        .iter()
        .filter(|product| statuses.iter().any(|status| status.matches(product)))
        .cloned()
        .collect()
}

/// Apply the full filter pipeline: search, category, price, status - each
/// stage narrowing the previous result.
#[must_use]
pub fn select_products(products: &[Product], filters: &FilterState, search: &str) -> Vec<Product> {
    let filtered = search_products(products, search);
    let filtered = filter_by_category(&filtered, &filters.categories);
    let filtered = filter_by_price(&filtered, &filters.price_ranges);
    filter_by_status(&filtered, &filters.statuses)
}

/// Return a sorted copy of `products`. `None` (an unrecognized sort token)
/// returns the input order unchanged. Sorts are stable, so products that
/// compare equal keep their relative order.
#[must_use]
pub fn sort_products(products: &[Product], sort: Option<SortKey>) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match sort {
        Some(SortKey::NameAsc) => sorted.sort_by(|a, b| a.name.cmp(&b.name)),
        Some(SortKey::NameDesc) => sorted.sort_by(|a, b| b.name.cmp(&a.name)),
        Some(SortKey::PriceAsc) => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
        Some(SortKey::PriceDesc) => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
        // Descending by date; products without a date sort last
        Some(SortKey::Newest) => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        None => {}
    }
    sorted
}

/// A tag with its display name and number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSummary {
    pub id: String,
    pub name: String,
    pub count: usize,
}

/// Collect the distinct tags across `products`, in first-seen order, with
/// occurrence counts and hyphen-split capitalized display names.
#[must_use]
pub fn unique_tags(products: &[Product]) -> Vec<TagSummary> {
    let mut tags: Vec<TagSummary> = Vec::new();

    for product in products {
        for tag in &product.tags {
            if let Some(summary) = tags.iter_mut().find(|summary| summary.id == *tag) {
                summary.count += 1;
            } else {
                tags.push(TagSummary {
                    id: tag.clone(),
                    name: format_category_name(tag),
                    count: 1,
                });
            }
        }
    }

    tags
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use urban_gent_core::{Price, ProductId};

    fn product(id: i64, category: &str, price: i64) -> Product {
        Product {
            id: ProductId::from(id),
            name: format!("Product {id}"),
            category: category.to_owned(),
            price: Price::from(price),
            ..Product::default()
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "tops", 150_000),
            product(2, "bottoms", 600_000),
            product(3, "accessories", 90_000),
        ]
    }

    #[test]
    fn category_filter_keeps_matching_products() {
        let products = vec![product(1, "tops", 150_000), product(2, "bottoms", 600_000)];
        let categories = BTreeSet::from(["tops".to_owned()]);

        let selected = filter_by_category(&products, &categories);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, ProductId::from(1));
    }

    #[test]
    fn category_result_is_subset_with_matching_categories() {
        let products = catalog();
        let categories = BTreeSet::from(["tops".to_owned(), "bottoms".to_owned()]);

        let selected = filter_by_category(&products, &categories);
        assert!(selected.iter().all(|p| categories.contains(&p.category)));
        assert!(selected.iter().all(|p| products.contains(p)));

        // Empty set is a no-op
        assert_eq!(filter_by_category(&products, &BTreeSet::new()), products);
    }

    #[test]
    fn price_filter_is_inclusive_and_ors_ranges() {
        let products = catalog();
        let ranges: BTreeSet<PriceRange> = ["0-90000", "150000-200000"]
            .iter()
            .map(|t| t.parse().unwrap())
            .collect();

        let selected = filter_by_price(&products, &ranges);
        let ids: Vec<_> = selected.iter().map(|p| p.id.as_str().to_owned()).collect();
        assert_eq!(ids, ["1", "3"]); // 150000 and 90000 sit exactly on bounds
    }

    #[test]
    fn search_matches_name_or_description_case_insensitively() {
        let mut products = catalog();
        products[0].name = "Linen Shirt".to_owned();
        products[1].short_description = "A sturdy SHIRT companion".to_owned();

        let selected = search_products(&products, "  shirt ");
        assert_eq!(selected.len(), 2);

        // Whitespace-only query is a no-op
        assert_eq!(search_products(&products, "   "), products);
    }

    #[test]
    fn status_filter_ors_requested_statuses() {
        let mut products = catalog();
        products[0].original_price = Some(Price::from(200_000)); // on sale
        products[1].tags = vec!["new".to_owned()];

        let statuses = BTreeSet::from([Status::Sale, Status::New]);
        let selected = filter_by_status(&products, &statuses);
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn select_products_is_idempotent() {
        let products = catalog();
        let filters = FilterState {
            categories: BTreeSet::from(["tops".to_owned(), "accessories".to_owned()]),
            ..FilterState::default()
        };

        let once = select_products(&products, &filters, "");
        let twice = select_products(&once, &filters, "");
        assert_eq!(once, twice);

        // Empty filters and search are the identity
        assert_eq!(
            select_products(&products, &FilterState::default(), ""),
            products
        );
    }

    #[test]
    fn sort_by_price_desc_is_stable() {
        let mut products = catalog();
        products.push(product(4, "tops", 150_000)); // same price as product 1

        let sorted = sort_products(&products, SortKey::parse("price-desc"));
        let ids: Vec<_> = sorted.iter().map(|p| p.id.as_str().to_owned()).collect();
        // 600000, then the two 150000 products in input order, then 90000
        assert_eq!(ids, ["2", "1", "4", "3"]);
    }

    #[test]
    fn unrecognized_sort_key_keeps_input_order() {
        let products = catalog();
        assert_eq!(sort_products(&products, SortKey::parse("bogus")), products);
    }

    #[test]
    fn newest_sorts_missing_dates_last() {
        let mut products = catalog();
        products[0].created_at = "2024-01-10".parse::<chrono::NaiveDate>().ok().and_then(|d| {
            use chrono::TimeZone;
            d.and_hms_opt(0, 0, 0)
                .map(|n| chrono::Utc.from_utc_datetime(&n))
        });
        products[2].created_at = products[0]
            .created_at
            .map(|d| d + chrono::Duration::days(30));

        let sorted = sort_products(&products, Some(SortKey::Newest));
        let ids: Vec<_> = sorted.iter().map(|p| p.id.as_str().to_owned()).collect();
        assert_eq!(ids, ["3", "1", "2"]);
    }

    #[test]
    fn unique_tags_preserve_first_seen_order_and_count() {
        let mut products = catalog();
        products[0].tags = vec!["new".to_owned(), "best-seller".to_owned()];
        products[1].tags = vec!["best-seller".to_owned()];
        products[2].tags = vec!["new".to_owned()];

        let tags = unique_tags(&products);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].id, "new");
        assert_eq!(tags[0].count, 2);
        assert_eq!(tags[1].id, "best-seller");
        assert_eq!(tags[1].name, "Best Seller");
        assert_eq!(tags[1].count, 2);
    }
}
