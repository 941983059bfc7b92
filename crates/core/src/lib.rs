//! Urban Gent Core - Shared types library.
//!
//! This crate provides the domain types used across the Urban Gent
//! storefront components:
//! - `storefront` - The storefront application (state store, selectors, router, views)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage
//! access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Products, cart items, prices, filter and sort descriptors,
//!   and the persisted [`types::AppState`] aggregate

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
