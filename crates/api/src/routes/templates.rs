use axum::routing::get;
use axum::Router;

use crate::handlers::templates;
use crate::state::AppState;

/// Template catalogue routes.
///
/// ```text
/// GET /templates        -> list_templates
/// GET /templates/{id}   -> get_template
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/templates", get(templates::list_templates))
        .route("/templates/{id}", get(templates::get_template))
}
