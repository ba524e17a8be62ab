use axum::extract::{Path, State};
use axum::Json;
use deckgate_core::template::Template;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /templates
pub async fn list_templates(State(state): State<AppState>) -> AppResult<Json<Vec<Template>>> {
    let templates = state.registry.list_templates()?;

    Ok(Json(templates))
}

/// GET /templates/{id}
pub async fn get_template(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
) -> AppResult<Json<Template>> {
    let template = state.registry.get_template(&template_id)?;

    Ok(Json(template))
}
