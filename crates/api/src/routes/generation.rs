use axum::routing::post;
use axum::Router;

use crate::handlers::generation;
use crate::state::AppState;

/// `POST /generate` -> generate_slide
pub fn router() -> Router<AppState> {
    Router::new().route("/generate", post(generation::generate_slide))
}
