//! ID 生成

use uuid::Uuid;

use super::{RecordId, SessionId};

/// セッション ID を UUID v4 で生成する
pub struct SessionIdFactory;

impl SessionIdFactory {
    pub fn generate() -> SessionId {
        SessionId::from(Uuid::new_v4())
    }
}

/// スコア・メッセージのレコード ID を UUID v4 で生成する
pub struct RecordIdFactory;

impl RecordIdFactory {
    pub fn generate() -> RecordId {
        RecordId::from(Uuid::new_v4())
    }
}
