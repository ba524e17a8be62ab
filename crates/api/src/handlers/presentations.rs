//! Handlers for the presentation registry.

use axum::extract::{Path, State};
use axum::Json;
use deckgate_core::presentation::{NewPresentation, Presentation};

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::state::AppState;

/// GET /presentations
///
/// List every presentation in creation order.
pub async fn list_presentations(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Presentation>>> {
    let presentations = state.registry.list_presentations()?;

    tracing::debug!(count = presentations.len(), "Listed presentations");

    Ok(Json(presentations))
}

/// GET /presentations/{id}
pub async fn get_presentation(
    State(state): State<AppState>,
    Path(presentation_id): Path<String>,
) -> AppResult<Json<Presentation>> {
    let presentation = state.registry.get_presentation(&presentation_id)?;

    Ok(Json(presentation))
}

/// POST /presentations
///
/// Create a draft presentation. `template_id` is stored as given without
/// checking that the template exists.
pub async fn create_presentation(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<NewPresentation>,
) -> AppResult<Json<Presentation>> {
    let presentation = state.registry.create_presentation(input)?;

    tracing::info!(
        presentation_id = %presentation.id,
        title = %presentation.title,
        template_id = ?presentation.template_id,
        "Presentation created",
    );

    Ok(Json(presentation))
}
