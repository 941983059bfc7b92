//! The product listing: sidebar filters, sort, and the product grid.

use std::collections::BTreeSet;

use askama::Template;

use urban_gent_core::{FilterState, SortKey};

use crate::router::Params;
use crate::selectors::{select_products, sort_products, unique_tags};

use super::{ProductCard, RenderFuture, View, ViewContext};

/// Sidebar price buckets, as `"min-max"` tokens with display labels.
const PRICE_BUCKETS: &[(&str, &str)] = &[
    ("0-200000", "Dưới 200k"),
    ("200000-500000", "200k - 500k"),
    ("500000-1000000", "500k - 1m"),
    ("1000000-999999999", "Trên 1m"),
];

/// Sidebar status options.
const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("sale", "Giảm giá"),
    ("new", "Hàng mới"),
    ("best-seller", "Bán chạy"),
];

struct FilterOption {
    value: String,
    label: String,
    checked: bool,
}

struct TagFacet {
    name: String,
    count: usize,
}

#[derive(Template)]
#[template(path = "shop.html")]
struct ShopTemplate {
    products: Vec<ProductCard>,
    total: usize,
    categories: Vec<FilterOption>,
    price_buckets: Vec<FilterOption>,
    statuses: Vec<FilterOption>,
    tags: Vec<TagFacet>,
    search: String,
}

/// The shop view.
pub struct ShopView;

impl ShopView {
    /// Fold the route params into the store's filters and search.
    ///
    /// No category and no search means the user navigated to the shop
    /// directly, which resets both. A category param replaces the category
    /// axis and keeps the other two; a search param replaces the query.
    fn apply_params(ctx: &ViewContext, params: &Params) {
        let category = params.get("category").filter(|value| !value.is_empty());
        let search = params.get("search").filter(|value| !value.is_empty());

        let mut store = ctx.store();
        if category.is_none() && search.is_none() {
            store.reset_filters();
            store.update_search("");
            return;
        }

        if let Some(category) = category {
            let filters = FilterState {
                categories: BTreeSet::from([category.clone()]),
                ..store.filters()
            };
            store.set_filters(filters);
        }
        if let Some(search) = search {
            store.update_search(search);
        }
    }
}

impl View for ShopView {
    fn render<'a>(&'a self, ctx: &'a ViewContext, params: &'a Params) -> RenderFuture<'a> {
        Box::pin(async move {
            Self::apply_params(ctx, params);

            let products = ctx.api().fetch_products().await?;
            let backend_categories = ctx.api().fetch_categories().await?;

            let (filters, search) = {
                let mut store = ctx.store();
                store.set_products(products.clone());
                (store.filters(), store.search())
            };

            let selected = select_products(&products, &filters, &search);
            let sort = params.get("sort").and_then(|token| SortKey::parse(token));
            let sorted = sort_products(&selected, sort);

            let categories = backend_categories
                .iter()
                .map(|category| FilterOption {
                    value: category.id.clone(),
                    label: category.name.clone(),
                    checked: filters.categories.contains(&category.id),
                })
                .collect();

            let price_buckets = PRICE_BUCKETS
                .iter()
                .map(|&(value, label)| FilterOption {
                    value: value.to_owned(),
                    label: label.to_owned(),
                    checked: value
                        .parse()
                        .is_ok_and(|range| filters.price_ranges.contains(&range)),
                })
                .collect();

            let statuses = STATUS_OPTIONS
                .iter()
                .map(|&(value, label)| FilterOption {
                    value: value.to_owned(),
                    label: label.to_owned(),
                    checked: urban_gent_core::Status::parse(value)
                        .is_some_and(|status| filters.statuses.contains(&status)),
                })
                .collect();

            let tags = unique_tags(&products)
                .into_iter()
                .map(|tag| TagFacet {
                    name: tag.name,
                    count: tag.count,
                })
                .collect();

            let template = ShopTemplate {
                products: sorted.iter().map(ProductCard::from).collect(),
                total: products.len(),
                categories,
                price_buckets,
                statuses,
                tags,
                search,
            };

            tracing::debug!(
                shown = selected.len(),
                total = products.len(),
                "shop view rendered"
            );
            Ok(template.render()?)
        })
    }
}
