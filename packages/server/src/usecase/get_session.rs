//! UseCase: セッション取得
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - GetSessionUseCase::execute() メソッド
//! - create-if-missing の有無による挙動の違い
//!
//! ### どのような状況を想定しているか
//! - 正常系：既存セッションの取得（last_seen の更新）
//! - 正常系：存在しない ID での自動作成（呼び出し側の ID を使う）
//! - 異常系：存在しない ID、期限切れの ID

use std::sync::Arc;

use balloon_shared::time::Clock;

use crate::domain::{SessionId, SessionLookup, SessionRepository, SessionTimeout, Timestamp};

use super::{error::GetSessionError, expiry::expire_idle_sessions};

/// セッション取得のユースケース
pub struct GetSessionUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn SessionRepository>,
    clock: Arc<dyn Clock>,
    timeout: SessionTimeout,
}

impl GetSessionUseCase {
    /// 新しい GetSessionUseCase を作成
    pub fn new(
        repository: Arc<dyn SessionRepository>,
        clock: Arc<dyn Clock>,
        timeout: SessionTimeout,
    ) -> Self {
        Self {
            repository,
            clock,
            timeout,
        }
    }

    /// セッション取得を実行
    ///
    /// # Arguments
    ///
    /// * `session_id` - クライアントが指定したセッション ID
    /// * `create_if_missing` - 見つからない場合にこの ID で作成するか
    ///
    /// # Returns
    ///
    /// * `Ok(SessionLookup::Found)` - 既存のセッション（last_seen 更新済み）
    /// * `Ok(SessionLookup::Created)` - 新しく作成したセッション
    /// * `Err(GetSessionError::SessionNotFound)` - 見つからず、作成も指定されていない
    pub async fn execute(
        &self,
        session_id: String,
        create_if_missing: bool,
    ) -> Result<SessionLookup, GetSessionError> {
        let now = Timestamp::new(self.clock.now_millis());
        let repository = self.repository.as_ref();
        expire_idle_sessions(repository, now, self.timeout).await;

        let id = SessionId::new(session_id);

        if create_if_missing {
            let lookup = self.repository.touch_or_insert_session(id, now).await;
            if let SessionLookup::Created(session) = &lookup {
                tracing::info!("Auto-created missing session: {}", session.id.as_str());
            }
            return Ok(lookup);
        }

        self.repository
            .touch_session(&id, now)
            .await
            .map(SessionLookup::Found)
            .map_err(|_| GetSessionError::SessionNotFound)
    }
}
