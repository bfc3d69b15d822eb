//! Conversion logic between domain entities and DTOs.

use balloon_shared::time::timestamp_to_rfc3339;

use crate::domain::{GuestbookEntry, ScoreRecord, Session, SessionId};
use crate::infrastructure::dto::http as dto;

impl From<Session> for dto::SessionDto {
    fn from(model: Session) -> Self {
        Self {
            id: model.id.into_string(),
            created_at: timestamp_to_rfc3339(model.created_at.value()),
            last_seen: timestamp_to_rfc3339(model.last_seen.value()),
            state: model.state,
        }
    }
}

impl From<SessionId> for dto::SessionIdResponse {
    fn from(id: SessionId) -> Self {
        Self {
            session_id: id.into_string(),
        }
    }
}

impl From<ScoreRecord> for dto::ScoreDto {
    fn from(model: ScoreRecord) -> Self {
        Self {
            id: model.id.as_str().to_string(),
            session_id: model.session_id.map(SessionId::into_string),
            score: model.score.to_json(),
            meta: model.meta,
            created_at: timestamp_to_rfc3339(model.created_at.value()),
        }
    }
}

impl From<GuestbookEntry> for dto::MessageDto {
    fn from(model: GuestbookEntry) -> Self {
        Self {
            id: model.id.as_str().to_string(),
            session_id: model.session_id.map(SessionId::into_string),
            name: model.name.as_str().to_string(),
            message: model.message.as_str().to_string(),
            created_at: timestamp_to_rfc3339(model.created_at.value()),
        }
    }
}
