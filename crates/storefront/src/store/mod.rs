//! The application state store.
//!
//! `Store` owns the [`AppState`] aggregate (products, cart, filters, search)
//! and is the only thing that mutates it. Every mutator persists the full
//! state synchronously through the [`Persister`] and then notifies
//! subscribers, so display logic observes exactly one state-change event per
//! mutation instead of relying on callers to refresh by hand.

mod contact;
mod persist;

pub use contact::{ContactLog, ContactMessage, CONTACT_KEY};
pub use persist::{FilePersister, MemoryPersister, PersistError, Persister};

use std::sync::Arc;

use rust_decimal::Decimal;

use urban_gent_core::{AppState, CartItem, FilterState, Product};

/// Storage key holding the serialized [`AppState`].
pub const STATE_KEY: &str = "urban-gent-state";

/// A state-change subscriber, invoked after every committed mutation.
pub type Listener = Box<dyn Fn(&AppState) + Send + Sync>;

/// Central store for application state.
pub struct Store {
    state: AppState,
    persister: Arc<dyn Persister>,
    listeners: Vec<Listener>,
}

impl Store {
    /// Create a store with the default state, backed by `persister`.
    #[must_use]
    pub fn new(persister: Arc<dyn Persister>) -> Self {
        Self {
            state: AppState::default(),
            persister,
            listeners: Vec::new(),
        }
    }

    /// Load persisted state, replacing the in-memory state.
    ///
    /// A missing payload leaves the default state in place. A corrupt
    /// payload is logged and the in-memory state retained; the store stays
    /// usable either way.
    pub fn init(&mut self) {
        match self.persister.get(STATE_KEY) {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(state) => {
                    self.state = state;
                    tracing::info!("state restored from storage");
                }
                Err(error) => {
                    tracing::error!(%error, "failed to load saved state, keeping defaults");
                }
            },
            Ok(None) => tracing::debug!("no saved state found"),
            Err(error) => {
                tracing::error!(%error, "failed to read saved state, keeping defaults");
            }
        }
    }

    /// Read-only view of the whole state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The last fetched product catalog.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.state.products.clone()
    }

    /// Defensive copy of the cart.
    #[must_use]
    pub fn cart(&self) -> Vec<CartItem> {
        self.state.cart.clone()
    }

    /// Defensive copy of the active filters.
    #[must_use]
    pub fn filters(&self) -> FilterState {
        self.state.filters.clone()
    }

    /// The current search query.
    #[must_use]
    pub fn search(&self) -> String {
        self.state.search.clone()
    }

    /// Replace the product catalog (called by views after a fetch).
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.state.products = products;
        self.commit();
    }

    /// Add `quantity` units of `product` to the cart.
    ///
    /// If a line for the same product id exists, its quantity is
    /// incremented; otherwise a new line is appended. The cart never holds
    /// two lines for one id.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) {
        if let Some(line) = self
            .state
            .cart
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            line.quantity += quantity;
        } else {
            self.state.cart.push(CartItem::new(product.clone(), quantity));
        }
        tracing::debug!(product = %product.id, quantity, "added to cart");
        self.commit();
    }

    /// Replace the cart wholesale (after caller-computed edits/removals).
    pub fn update_cart(&mut self, items: Vec<CartItem>) {
        self.state.cart = items;
        self.commit();
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.state.cart.clear();
        self.commit();
    }

    /// Replace the filters wholesale.
    pub fn set_filters(&mut self, filters: FilterState) {
        self.state.filters = filters;
        tracing::debug!(filters = ?self.state.filters, "filters updated");
        self.commit();
    }

    /// Clear all three filter axes.
    pub fn reset_filters(&mut self) {
        self.state.filters = FilterState::default();
        self.commit();
    }

    /// Replace the search query (stored trimmed).
    pub fn update_search(&mut self, query: &str) {
        self.state.search = query.trim().to_owned();
        self.commit();
    }

    /// Alias of [`update_search`](Self::update_search).
    pub fn set_search_query(&mut self, query: &str) {
        self.update_search(query);
    }

    /// Total cart value (sum of price × quantity).
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.state.cart.iter().map(CartItem::line_total).sum()
    }

    /// Total number of units in the cart (sum of quantities).
    #[must_use]
    pub fn cart_item_count(&self) -> u32 {
        self.state.cart.iter().map(|line| line.quantity).sum()
    }

    /// Reset to the default state and delete the persisted copy.
    pub fn clear_all(&mut self) {
        self.state = AppState::default();
        if let Err(error) = self.persister.delete(STATE_KEY) {
            tracing::warn!(%error, "failed to delete persisted state");
        }
        self.notify();
    }

    /// Subscribe to state changes. The listener runs after every committed
    /// mutation with the new state.
    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    /// Persist the full state and notify subscribers.
    ///
    /// Write failures are logged, not propagated: the in-memory state is
    /// still authoritative for the session, as with localStorage.
    fn commit(&mut self) {
        match serde_json::to_string(&self.state) {
            Ok(payload) => {
                if let Err(error) = self.persister.put(STATE_KEY, &payload) {
                    tracing::warn!(%error, "failed to persist state");
                }
            }
            Err(error) => tracing::warn!(%error, "failed to serialize state"),
        }
        self.notify();
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener(&self.state);
        }
    }
}
