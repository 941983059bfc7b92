//! Urban Gent Storefront library.
//!
//! A single-page storefront: four navigable views (home, shop, about,
//! contact) over a hash-fragment router, a persistent client-side state
//! store (cart, filters, search), and a pure selector pipeline that filters
//! and sorts the product catalog fetched from a mock REST backend.
//!
//! # Architecture
//!
//! - [`store`] - the owned application state, persisted as JSON through a
//!   key-value [`store::Persister`] after every mutation
//! - [`selectors`] - pure filtering/sorting functions over product lists
//! - [`router`] - maps `#/route?k=v` fragments to views and drives renders
//! - [`views`] - fetch data, run the selector pipeline, render Askama
//!   templates to HTML strings
//! - [`api`] - typed REST client for the mock backend
//!
//! The binary wraps all of this in an interactive shell standing in for the
//! browser event loop.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filters;
pub mod format;
pub mod placeholder;
pub mod router;
pub mod selectors;
pub mod store;
pub mod surface;
pub mod views;
