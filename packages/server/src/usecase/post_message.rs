//! UseCase: ゲストブックへの投稿
//!
//! ## テスト実装の作業記録
//!
//! ### どのような状況を想定しているか
//! - 正常系：前後の空白を除去して登録
//! - 異常系：名前・本文の欠落、空白のみ、文字数超過
//! - エッジケース：ちょうど上限の文字数

use std::sync::Arc;

use balloon_shared::time::Clock;

use crate::domain::{
    DisplayName, GuestbookEntry, MessageBody, MessageRepository, RecordIdFactory, SessionId,
    Timestamp,
};

use super::error::PostMessageError;

/// ゲストブック投稿のユースケース
pub struct PostMessageUseCase {
    repository: Arc<dyn MessageRepository>,
    clock: Arc<dyn Clock>,
}

impl PostMessageUseCase {
    /// 新しい PostMessageUseCase を作成
    pub fn new(repository: Arc<dyn MessageRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// 投稿を実行
    pub async fn execute(
        &self,
        session_id: Option<String>,
        name: Option<String>,
        message: Option<String>,
    ) -> Result<GuestbookEntry, PostMessageError> {
        let name = DisplayName::new(name.as_deref().unwrap_or_default())?;
        let message = MessageBody::new(message.as_deref().unwrap_or_default())?;

        let entry = GuestbookEntry {
            id: RecordIdFactory::generate(),
            session_id: session_id.map(SessionId::new),
            name,
            message,
            created_at: Timestamp::new(self.clock.now_millis()),
        };

        if let Some(evicted) = self.repository.add_message(entry.clone()).await {
            tracing::debug!("Message {} evicted (capacity reached)", evicted.id.as_str());
        }
        tracing::info!("New message from {}", entry.name.as_str());

        Ok(entry)
    }
}
