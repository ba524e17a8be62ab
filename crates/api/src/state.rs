use std::sync::Arc;

use deckgate_core::registry::Registry;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the registry is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Presentation and template registry.
    pub registry: Arc<Registry>,
}

impl AppState {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}
