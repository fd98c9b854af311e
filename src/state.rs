//! Shared application state for all routes.

use crate::store::Store;
use std::sync::Arc;

/// The store handle is the only process-wide resource. It is injected here
/// rather than held as a global so tests can substitute the in-memory
/// implementation.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        AppState { store }
    }
}
