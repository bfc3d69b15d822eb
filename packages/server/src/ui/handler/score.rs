//! `/api/score` and `/api/scores` handlers.

use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State};

use crate::{
    infrastructure::dto::http::{ScoreDto, ScoresQuery, ScoresResponse, SubmitScoreRequest},
    ui::{error::ApiError, extract::ApiQuery, state::AppState},
};

use super::parse_json_body;

/// `POST /api/score`
pub async fn submit_score(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ScoreDto>, ApiError> {
    let request: SubmitScoreRequest = parse_json_body(&body)?.unwrap_or_default();

    let record = state
        .submit_score_usecase
        .execute(request.session_id, request.score, request.meta)
        .await?;
    Ok(Json(record.into()))
}

/// `GET /api/scores?sessionId=`
pub async fn get_scores(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ScoresQuery>,
) -> Json<ScoresResponse> {
    let listing = state.get_scores_usecase.execute(query.session_id).await;
    Json(ScoresResponse {
        scores: listing.scores.into_iter().map(ScoreDto::from).collect(),
        total: listing.total,
    })
}
