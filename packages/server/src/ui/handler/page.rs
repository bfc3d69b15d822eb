//! `/api/unlock-page` handler.

use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State};

use crate::{
    infrastructure::dto::http::{UnlockPageRequest, UnlockPageResponse},
    ui::{error::ApiError, state::AppState},
};

use super::parse_json_body;

/// `POST /api/unlock-page`
pub async fn unlock_page(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<UnlockPageResponse>, ApiError> {
    let request: UnlockPageRequest = parse_json_body(&body)?.unwrap_or_default();

    let url = state
        .unlock_page_usecase
        .execute(request.page, request.password)
        .await?;
    Ok(Json(UnlockPageResponse { ok: true, url }))
}
