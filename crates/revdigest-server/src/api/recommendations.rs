use axum::{
    extract::{Query, State},
    Extension, Json,
};
use revdigest_core::SummaryResult;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct RecommendationsQuery {
    pub game: Option<String>,
}

/// `GET /api/recommendations?game=<name>`: raw summaries as JSON.
pub(super) async fn get_recommendations(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<RecommendationsQuery>,
) -> Result<Json<SummaryResult>, ApiError> {
    let game = query.game.as_deref().map(str::trim).unwrap_or_default();
    if game.is_empty() {
        return Err(ApiError::new(
            "bad_request",
            "query parameter 'game' is required",
        ));
    }

    tracing::info!(request_id = %req_id.0, game, "recommendations requested");
    let summaries = state.pipeline.run(game).await?;
    Ok(Json(summaries))
}
