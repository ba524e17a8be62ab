//! Handler for synthetic slide generation.

use axum::Json;
use deckgate_core::synthesis::{self, GeneratedSlide, DEFAULT_SLIDE_KIND};
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::JsonBody;

/// Request body for `POST /generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateSlideRequest {
    pub topic: String,
    /// Free-text slide kind, echoed back unchanged.
    #[serde(default = "default_slide_type")]
    pub slide_type: String,
}

fn default_slide_type() -> String {
    DEFAULT_SLIDE_KIND.to_string()
}

/// POST /generate
///
/// Produce placeholder slide content for a topic.
pub async fn generate_slide(
    JsonBody(input): JsonBody<GenerateSlideRequest>,
) -> AppResult<Json<GeneratedSlide>> {
    let slide = synthesis::synthesize(&input.topic, &input.slide_type);

    tracing::info!(
        topic = %slide.topic,
        slide_type = %slide.slide_type,
        "Generated slide content",
    );

    Ok(Json(slide))
}
