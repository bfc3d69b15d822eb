//! HTTP API のエラー応答
//!
//! ユースケースのエラーはすべてここで HTTP ステータスと JSON ボディに変換される。
//! どのエラーもそのリクエストだけで完結し、サーバーは止まらない。

use axum::{
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::usecase::{
    GetSessionError, PostMessageError, ResetSessionError, SubmitScoreError, UnlockPageError,
    UpdateSessionError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 404 `{error}`
    NotFound(String),
    /// 400 `{error}`
    InvalidInput(String),
    /// 401 `{ok: false, error}`
    Unauthorized(String),
    /// 404 `{ok: false, error}`
    NotConfigured(String),
    /// 500 `{error}`
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) | ApiError::NotConfigured(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::InvalidInput(message) = &self {
            tracing::warn!("Rejected request: {}", message);
        }
        let body = match self {
            ApiError::Unauthorized(message) | ApiError::NotConfigured(message) => {
                json!({"ok": false, "error": message})
            }
            ApiError::NotFound(message)
            | ApiError::InvalidInput(message)
            | ApiError::Internal(message) => json!({"error": message}),
        };
        (status, Json(body)).into_response()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl From<GetSessionError> for ApiError {
    fn from(e: GetSessionError) -> Self {
        match e {
            GetSessionError::SessionNotFound => ApiError::NotFound(e.to_string()),
        }
    }
}

impl From<UpdateSessionError> for ApiError {
    fn from(e: UpdateSessionError) -> Self {
        match e {
            UpdateSessionError::SessionNotFound => ApiError::NotFound(e.to_string()),
            UpdateSessionError::EmptyState => ApiError::InvalidInput(e.to_string()),
        }
    }
}

impl From<ResetSessionError> for ApiError {
    fn from(e: ResetSessionError) -> Self {
        match e {
            ResetSessionError::SessionNotFound => ApiError::NotFound(e.to_string()),
        }
    }
}

impl From<SubmitScoreError> for ApiError {
    fn from(e: SubmitScoreError) -> Self {
        ApiError::InvalidInput(e.to_string())
    }
}

impl From<PostMessageError> for ApiError {
    fn from(e: PostMessageError) -> Self {
        ApiError::InvalidInput(e.to_string())
    }
}

impl From<UnlockPageError> for ApiError {
    fn from(e: UnlockPageError) -> Self {
        match e {
            UnlockPageError::MissingPage => ApiError::InvalidInput(e.to_string()),
            UnlockPageError::NotConfigured(_) => ApiError::NotConfigured(e.to_string()),
            UnlockPageError::WrongPassword => ApiError::Unauthorized(e.to_string()),
            UnlockPageError::SourceUnavailable(_) => {
                tracing::error!("{}", e);
                ApiError::Internal("Page passwords unavailable".to_string())
            }
        }
    }
}
