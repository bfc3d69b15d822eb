//! HTTP API の DTO
//!
//! フィールド名はフロントエンドが期待する JSON のキーに合わせている
//! （リクエストは `sessionId`、レコードは `session_id` / `created_at`）。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ========================================
// Requests
// ========================================

/// `GET /api/session/{id}?create=<bool>`
#[derive(Debug, Default, Deserialize)]
pub struct SessionQuery {
    pub create: Option<String>,
}

impl SessionQuery {
    /// `true` / `1` / `yes`（大文字小文字を区別しない）を真とみなす
    pub fn create_if_missing(&self) -> bool {
        match self.create.as_deref() {
            Some(value) => matches!(value.to_ascii_lowercase().as_str(), "true" | "1" | "yes"),
            None => false,
        }
    }
}

/// `POST /api/score`
#[derive(Debug, Default, Deserialize)]
pub struct SubmitScoreRequest {
    #[serde(rename = "sessionId", default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub score: Option<Value>,
    #[serde(default)]
    pub meta: Option<Map<String, Value>>,
}

/// `GET /api/scores?sessionId=`
#[derive(Debug, Default, Deserialize)]
pub struct ScoresQuery {
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
}

/// `POST /api/messages`
#[derive(Debug, Default, Deserialize)]
pub struct PostMessageRequest {
    #[serde(rename = "sessionId", default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /api/unlock-page`
#[derive(Debug, Default, Deserialize)]
pub struct UnlockPageRequest {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

// ========================================
// Responses
// ========================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionDto {
    pub id: String,
    pub created_at: String,
    pub last_seen: String,
    pub state: Map<String, Value>,
}

/// `POST /api/session/create` と `POST /api/session/{id}/reset`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionIdResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreDto {
    pub id: String,
    pub session_id: Option<String>,
    pub score: Value,
    pub meta: Map<String, Value>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoresResponse {
    pub scores: Vec<ScoreDto>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageDto {
    pub id: String,
    pub session_id: Option<String>,
    pub name: String,
    pub message: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessagesResponse {
    pub messages: Vec<MessageDto>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UnlockPageResponse {
    pub ok: bool,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionStatsDto {
    pub total: usize,
    pub active: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsResponse {
    pub sessions: SessionStatsDto,
    pub scores: usize,
    pub messages: usize,
    /// サーバー起動からの経過秒数
    pub uptime: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
