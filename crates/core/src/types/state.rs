//! The persisted application state aggregate.

use serde::{Deserialize, Serialize};

use crate::types::filters::FilterState;
use crate::types::product::{CartItem, Product};

/// The full client-side application state.
///
/// This is the sole unit of persistence: the store serializes the whole
/// aggregate after every mutation and restores it at startup. Every field
/// defaults, so a payload written by an older build still loads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub products: Vec<Product>,
    pub cart: Vec<CartItem>,
    pub filters: FilterState,
    pub search: String,
}
