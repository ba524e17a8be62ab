use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Mount the health check at the service root.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health::health_check))
}
