//! Application state for the web layer.

use crate::store::ClimateStore;

/// Shared application state.
///
/// Holds no per-request data; handlers take their own store session.
#[derive(Clone)]
pub struct AppState {
    /// Read-only climate dataset (the pool inside is reference-counted)
    pub store: ClimateStore,
}

impl AppState {
    /// Create a new app state.
    pub fn new(store: ClimateStore) -> Self {
        Self { store }
    }
}
