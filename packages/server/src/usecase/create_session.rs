//! UseCase: セッション作成
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateSessionUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 新しいセッションが毎回新しい ID で登録されることを保証
//! - 初期状態（landing の進捗）がフロントエンドの期待する形であることを確認
//! - 作成時に期限切れセッションが掃除されることを確認

use std::sync::Arc;

use balloon_shared::time::{Clock, timestamp_to_rfc3339};
use serde_json::{Map, Value, json};

use crate::domain::{
    Session, SessionId, SessionIdFactory, SessionRepository, SessionTimeout, Timestamp,
};

use super::expiry::expire_idle_sessions;

/// セッション作成のユースケース
pub struct CreateSessionUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn SessionRepository>,
    clock: Arc<dyn Clock>,
    timeout: SessionTimeout,
}

impl CreateSessionUseCase {
    /// 新しい CreateSessionUseCase を作成
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

    /// セッション作成を実行
    ///
    /// # Returns
    ///
    /// 新しく割り当てたセッション ID
    pub async fn execute(&self) -> SessionId {
        let now = Timestamp::new(self.clock.now_millis());
        let repository = self.repository.as_ref();
        expire_idle_sessions(repository, now, self.timeout).await;

        let id = SessionIdFactory::generate();
        let session = Session::new(id.clone(), now, initial_state(now));
        self.repository.insert_session(session).await;

        tracing::info!("Created new session: {}", id.as_str());
        id
    }
}

/// 新規セッションの初期状態（ランディングページ到達済み）
fn initial_state(now: Timestamp) -> Map<String, Value> {
    let mut state = Map::new();
    state.insert(
        "progress".to_string(),
        json!({
            "landing": true,
            "startedAt": timestamp_to_rfc3339(now.value()),
        }),
    );
    state
}
