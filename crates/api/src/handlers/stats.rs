use axum::extract::State;
use axum::Json;
use deckgate_core::stats::PresentationStats;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /stats
///
/// Counts and averages over the current registry contents.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<PresentationStats>> {
    let stats = state.registry.stats()?;

    tracing::debug!(
        total = stats.total_presentations,
        completed = stats.completed_presentations,
        "Computed presentation stats",
    );

    Ok(Json(stats))
}
