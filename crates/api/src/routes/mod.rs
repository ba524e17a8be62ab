pub mod generation;
pub mod health;
pub mod presentations;
pub mod stats;
pub mod templates;

use axum::Router;

use crate::state::AppState;

/// Build the service route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                         health (GET)
/// /presentations            list, create (GET, POST)
/// /presentations/{id}       get (GET)
/// /templates                list (GET)
/// /templates/{id}           get (GET)
/// /generate                 synthesize slide content (POST)
/// /stats                    registry statistics (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(presentations::router())
        .merge(templates::router())
        .merge(generation::router())
        .merge(stats::router())
}
