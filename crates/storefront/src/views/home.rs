//! The landing page: hero banners, three category columns, featured strip.

use askama::Template;

use crate::router::Params;

use super::{ProductCard, RenderFuture, View, ViewContext};

/// Rotating hero banner images.
const BANNERS: &[&str] = &[
    "assets/images/banner/banner-1.jpeg",
    "assets/images/banner/banner-2.jpeg",
    "assets/images/banner/banner-3.jpeg",
];

/// The three fixed category columns, with their Vietnamese headings.
const CATEGORY_SECTIONS: &[(&str, &str, &str)] = &[
    ("tops", "Áo", "Áo phông, áo sơ mi, áo khoác"),
    ("bottoms", "Quần", "Quần jean, quần kaki, quần short"),
    ("accessories", "Phụ Kiện", "Mũ, giày, túi, đồng hồ"),
];

/// Products shown per category column.
const PER_SECTION: usize = 3;

/// Products per category mixed into the featured strip.
const PER_FEATURED: usize = 2;

struct CategorySection {
    key: &'static str,
    title: &'static str,
    subtitle: &'static str,
    products: Vec<ProductCard>,
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    banners: Vec<&'static str>,
    sections: Vec<CategorySection>,
    featured: Vec<ProductCard>,
}

/// The home view.
pub struct HomeView;

impl View for HomeView {
    fn render<'a>(&'a self, ctx: &'a ViewContext, _params: &'a Params) -> RenderFuture<'a> {
        Box::pin(async move {
            // A fetch failure renders an empty landing page rather than none
            let products = match ctx.api().fetch_products().await {
                Ok(products) => products,
                Err(error) => {
                    tracing::error!(%error, "failed to fetch products for home view");
                    Vec::new()
                }
            };
            ctx.store().set_products(products.clone());

            let by_category = |category: &str, take: usize| -> Vec<ProductCard> {
                products
                    .iter()
                    .filter(|product| product.category == category)
                    .take(take)
                    .map(ProductCard::from)
                    .collect()
            };

            let sections = CATEGORY_SECTIONS
                .iter()
                .map(|&(key, title, subtitle)| CategorySection {
                    key,
                    title,
                    subtitle,
                    products: by_category(key, PER_SECTION),
                })
                .collect();

            let featured = CATEGORY_SECTIONS
                .iter()
                .flat_map(|&(key, _, _)| by_category(key, PER_FEATURED))
                .collect();

            let template = HomeTemplate {
                banners: BANNERS.to_vec(),
                sections,
                featured,
            };
            Ok(template.render()?)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use urban_gent_core::{Price, Product, ProductId};

    fn product(id: i64, category: &str) -> Product {
        Product {
            id: ProductId::from(id),
            name: format!("Product {id}"),
            category: category.to_owned(),
            price: Price::from(100_000),
            ..Product::default()
        }
    }

    #[test]
    fn template_lists_sections_and_featured_products() {
        let products: Vec<Product> = (1..=4)
            .map(|id| product(id, "tops"))
            .chain((5..=6).map(|id| product(id, "bottoms")))
            .collect();

        let sections: Vec<CategorySection> = CATEGORY_SECTIONS
            .iter()
            .map(|&(key, title, subtitle)| CategorySection {
                key,
                title,
                subtitle,
                products: products
                    .iter()
                    .filter(|p| p.category == key)
                    .take(PER_SECTION)
                    .map(ProductCard::from)
                    .collect(),
            })
            .collect();

        let html = HomeTemplate {
            banners: BANNERS.to_vec(),
            sections,
            featured: products.iter().take(2).map(ProductCard::from).collect(),
        }
        .render()
        .unwrap();

        assert!(html.contains("Khám Phá Thế Giới Thời Trang Nam"));
        assert!(html.contains("Product 1"));
        // Only the first three tops appear in the category column
        assert!(!html.contains("Product 4"));
        assert!(html.contains("data-category=\"accessories\""));
    }
}
