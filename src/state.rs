/*
 * Responsibility
 * - shared context bound to the Router (AppState)
 * - holds the accessor factory; Clone is cheap (Arc inside)
 *
 * The factory is built once at startup and injected here instead of living
 * in a global, so handlers and tests can substitute a different store.
 */
use std::sync::Arc;

use crate::services::store::AccessorFactory;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AccessorFactory>,
}

impl AppState {
    pub fn new(store: Arc<dyn AccessorFactory>) -> Self {
        Self { store }
    }
}
