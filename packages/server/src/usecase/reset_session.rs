//! UseCase: セッションのリセット
//!
//! 同じ ID のまま中身を消すのではなく、新しい ID の空セッションを作って古いセッションを削除する。
//! 古い ID に紐づいたスコアやメッセージはそのまま残り、どのセッションからも辿れなくなる。
//!
//! ## テスト実装の作業記録
//!
//! ### どのような状況を想定しているか
//! - 正常系：新しい ID が返り、古い ID は取得できなくなる
//! - 異常系：存在しないセッション

use std::sync::Arc;

use balloon_shared::time::Clock;
use serde_json::Map;

use crate::domain::{Session, SessionId, SessionIdFactory, SessionRepository, Timestamp};

use super::error::ResetSessionError;

/// セッションリセットのユースケース
pub struct ResetSessionUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn SessionRepository>,
    clock: Arc<dyn Clock>,
}

impl ResetSessionUseCase {
    /// 新しい ResetSessionUseCase を作成
    pub fn new(repository: Arc<dyn SessionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// リセットを実行し、新しいセッション ID を返す
    pub async fn execute(&self, session_id: String) -> Result<SessionId, ResetSessionError> {
        let old_id = SessionId::new(session_id);

        let now = Timestamp::new(self.clock.now_millis());
        let replacement = Session::new(SessionIdFactory::generate(), now, Map::new());
        let session = self
            .repository
            .replace_session(&old_id, replacement)
            .await
            .map_err(|_| ResetSessionError::SessionNotFound)?;

        tracing::info!(
            "Reset session {} -> {}",
            old_id.as_str(),
            session.id.as_str()
        );
        Ok(session.id)
    }
}
