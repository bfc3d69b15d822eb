//! `/api/messages` handlers.

use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State};

use crate::{
    infrastructure::dto::http::{MessageDto, MessagesResponse, PostMessageRequest},
    ui::{error::ApiError, state::AppState},
};

use super::parse_json_body;

/// `GET /api/messages`
pub async fn get_messages(State(state): State<Arc<AppState>>) -> Json<MessagesResponse> {
    let listing = state.get_messages_usecase.execute().await;
    Json(MessagesResponse {
        messages: listing.messages.into_iter().map(MessageDto::from).collect(),
        total: listing.total,
    })
}

/// `POST /api/messages`
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<MessageDto>, ApiError> {
    let request: PostMessageRequest = parse_json_body(&body)?.unwrap_or_default();

    let entry = state
        .post_message_usecase
        .execute(request.session_id, request.name, request.message)
        .await?;
    Ok(Json(entry.into()))
}
