//! HTTP API endpoint handlers.

pub mod message;
pub mod page;
pub mod score;
pub mod session;
pub mod system;

use axum::body::Bytes;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// リクエストボディを JSON として読む。空のボディは `None`。
///
/// Content-Type を問わず受け付ける（フロントエンドは text/plain で送ることがある）。
fn parse_json_body<T: DeserializeOwned>(body: &Bytes) -> Result<Option<T>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body).map(Some).map_err(|e| {
        tracing::warn!("Rejected malformed JSON body: {}", e);
        ApiError::InvalidInput("Invalid JSON body".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::dto::http::SubmitScoreRequest;

    #[test]
    fn test_empty_body_is_none() {
        // テスト項目: 空（空白のみ）のボディは None になる
        // given (前提条件):
        let body = Bytes::from_static(b"  \n");

        // when (操作):
        let parsed = parse_json_body::<SubmitScoreRequest>(&body);

        // then (期待する結果):
        assert!(matches!(parsed, Ok(None)));
    }

    #[test]
    fn test_malformed_body_is_invalid_input() {
        // テスト項目: JSON として不正なボディは InvalidInput になる
        // given (前提条件):
        let body = Bytes::from_static(b"{score:");

        // when (操作):
        let parsed = parse_json_body::<SubmitScoreRequest>(&body);

        // then (期待する結果):
        assert_eq!(
            parsed.err(),
            Some(ApiError::InvalidInput("Invalid JSON body".to_string()))
        );
    }
}
