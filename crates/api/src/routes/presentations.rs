//! Route definitions for the presentation registry.

use axum::routing::get;
use axum::Router;

use crate::handlers::presentations;
use crate::state::AppState;

/// Presentation routes.
///
/// ```text
/// GET  /presentations        -> list_presentations
/// POST /presentations        -> create_presentation
/// GET  /presentations/{id}   -> get_presentation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/presentations",
            get(presentations::list_presentations).post(presentations::create_presentation),
        )
        .route("/presentations/{id}", get(presentations::get_presentation))
}
