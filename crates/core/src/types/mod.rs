//! Core types for Urban Gent.
//!
//! This module provides the domain vocabulary of the storefront: canonical
//! product identifiers, money, products and cart lines, filter/sort
//! descriptors, and the persisted application state.

pub mod filters;
pub mod id;
pub mod price;
pub mod product;
pub mod state;

pub use filters::{FilterState, SortKey, Status};
pub use id::ProductId;
pub use price::{Price, PriceRange, PriceRangeError};
pub use product::{CartItem, Category, Color, Product};
pub use state::AppState;
