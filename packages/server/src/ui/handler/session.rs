//! `/api/session/*` handlers.

use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use serde_json::Value;

use crate::{
    domain::SessionLookup,
    infrastructure::dto::http::{SessionDto, SessionIdResponse, SessionQuery},
    ui::{
        error::ApiError,
        extract::{ApiPath, ApiQuery},
        state::AppState,
    },
};

/// `POST /api/session/create`
pub async fn create_session(State(state): State<Arc<AppState>>) -> Json<SessionIdResponse> {
    let id = state.create_session_usecase.execute().await;
    Json(id.into())
}

/// `GET /api/session/{id}?create=<bool>`
///
/// 既存なら 200、create 指定で新規作成したなら 201
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    ApiPath(session_id): ApiPath<String>,
    ApiQuery(query): ApiQuery<SessionQuery>,
) -> Result<(StatusCode, Json<SessionDto>), ApiError> {
    let lookup = state
        .get_session_usecase
        .execute(session_id, query.create_if_missing())
        .await?;

    Ok(match lookup {
        SessionLookup::Found(session) => (StatusCode::OK, Json(session.into())),
        SessionLookup::Created(session) => (StatusCode::CREATED, Json(session.into())),
    })
}

/// `POST /api/session/{id}`
pub async fn update_session(
    State(state): State<Arc<AppState>>,
    ApiPath(session_id): ApiPath<String>,
    body: Bytes,
) -> Result<Json<SessionDto>, ApiError> {
    // 存在チェックを優先するため、ここでは JSON の不正をエラーにせず「内容なし」として渡す
    let partial = match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Object(partial)) => Some(partial),
        _ => None,
    };

    let session = state
        .update_session_usecase
        .execute(session_id, partial)
        .await?;
    Ok(Json(session.into()))
}

/// `POST /api/session/{id}/reset`
pub async fn reset_session(
    State(state): State<Arc<AppState>>,
    ApiPath(session_id): ApiPath<String>,
) -> Result<Json<SessionIdResponse>, ApiError> {
    let new_id = state.reset_session_usecase.execute(session_id).await?;
    Ok(Json(new_id.into()))
}
