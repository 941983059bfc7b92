//! View rendering.
//!
//! Each view fetches what it needs through the shared [`ViewContext`],
//! shapes it into pre-formatted display structs, and renders an Askama
//! template to an HTML string. The router owns the views as trait objects
//! and hands the rendered markup to the surface.

mod about;
mod contact;
mod home;
mod shop;

pub use about::AboutView;
pub use contact::ContactView;
pub use home::HomeView;
pub use shop::ShopView;

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use urban_gent_core::Product;

use crate::api::ApiClient;
use crate::error::Result;
use crate::format::format_vnd;
use crate::placeholder::placeholder_image;
use crate::router::Params;
use crate::store::Store;

/// The boxed future a [`View`] render returns.
pub type RenderFuture<'a> = Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;

/// A renderable view section.
pub trait View: Send + Sync {
    /// Render the view to HTML for the given route params.
    fn render<'a>(&'a self, ctx: &'a ViewContext, params: &'a Params) -> RenderFuture<'a>;
}

/// Shared handles every view renders against.
#[derive(Clone)]
pub struct ViewContext {
    api: ApiClient,
    store: Arc<Mutex<Store>>,
}

impl ViewContext {
    /// Bundle the API client and store for the views.
    #[must_use]
    pub fn new(api: ApiClient, store: Arc<Mutex<Store>>) -> Self {
        Self { api, store }
    }

    /// The backend client.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Lock the store. The guard must not be held across an await point.
    #[must_use]
    pub fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A product shaped for template rendering: prices pre-formatted, image
/// resolved to something displayable.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub price: String,
    /// Formatted strikethrough price; empty when the product is not on sale.
    pub original_price: String,
    pub discount_percent: u32,
    pub out_of_stock: bool,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        let image = product
            .images
            .first()
            .filter(|image| !image.is_empty())
            .cloned()
            .unwrap_or_else(|| placeholder_image(300, 400, &product.name, "f0f0f0"));

        let (original_price, discount_percent) = if product.on_sale() {
            let original = product.original_price.unwrap_or(product.price);
            let percent = discount_percent(original.amount(), product.price.amount());
            (format_vnd(original), percent)
        } else {
            (String::new(), 0)
        };

        Self {
            id: product.id.as_str().to_owned(),
            name: product.name.clone(),
            category: product.category.clone(),
            description: product.short_description.clone(),
            image,
            price: format_vnd(product.price),
            original_price,
            discount_percent,
            out_of_stock: product.inventory_quantity == 0,
        }
    }
}

fn discount_percent(original: Decimal, current: Decimal) -> u32 {
    if original <= Decimal::ZERO {
        return 0;
    }
    ((original - current) * Decimal::from(100) / original)
        .round()
        .to_u32()
        .unwrap_or(0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use urban_gent_core::{Price, ProductId};

    #[test]
    fn card_formats_sale_prices_and_discount() {
        let product = Product {
            id: ProductId::from(7),
            name: "Áo Khoác Denim".to_owned(),
            price: Price::from(450_000),
            original_price: Some(Price::from(600_000)),
            images: vec!["assets/images/denim.jpg".to_owned()],
            ..Product::default()
        };

        let card = ProductCard::from(&product);
        assert_eq!(card.price, "450.000 ₫");
        assert_eq!(card.original_price, "600.000 ₫");
        assert_eq!(card.discount_percent, 25);
        assert_eq!(card.image, "assets/images/denim.jpg");
    }

    #[test]
    fn card_without_sale_leaves_original_price_empty() {
        let product = Product {
            id: ProductId::from(8),
            name: "Thắt Lưng Da".to_owned(),
            price: Price::from(250_000),
            inventory_quantity: 0,
            ..Product::default()
        };

        let card = ProductCard::from(&product);
        assert!(card.original_price.is_empty());
        assert_eq!(card.discount_percent, 0);
        assert!(card.out_of_stock);
        // No image on the product, so a placeholder is generated
        assert!(card.image.starts_with("https://via.placeholder.com/"));
    }
}
