//! UseCase: セッション状態の部分更新
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - UpdateSessionUseCase::execute() メソッド
//! - 部分的な状態のディープマージ
//!
//! ### どのような状況を想定しているか
//! - 正常系：ネストしたオブジェクトのマージ、スカラーによる置き換え
//! - 異常系：存在しないセッション、空の更新内容

use std::sync::Arc;

use balloon_shared::time::Clock;
use serde_json::{Map, Value};

use crate::domain::{Session, SessionId, SessionRepository, Timestamp};

use super::error::UpdateSessionError;

/// セッション更新のユースケース
pub struct UpdateSessionUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn SessionRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdateSessionUseCase {
    /// 新しい UpdateSessionUseCase を作成
    pub fn new(repository: Arc<dyn SessionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// セッション更新を実行
    ///
    /// 存在チェックを先に行うため、存在しないセッションに空の更新を送った場合は
    /// `SessionNotFound` になる。
    ///
    /// # Arguments
    ///
    /// * `session_id` - 更新対象のセッション ID
    /// * `partial` - マージする状態（`None` や空のオブジェクトは不正）
    pub async fn execute(
        &self,
        session_id: String,
        partial: Option<Map<String, Value>>,
    ) -> Result<Session, UpdateSessionError> {
        let id = SessionId::new(session_id);
        if !self.repository.session_exists(&id).await {
            return Err(UpdateSessionError::SessionNotFound);
        }

        let partial = partial
            .filter(|partial| !partial.is_empty())
            .ok_or(UpdateSessionError::EmptyState)?;

        let now = Timestamp::new(self.clock.now_millis());
        let session = self
            .repository
            .merge_session_state(&id, partial, now)
            .await
            .map_err(|_| UpdateSessionError::SessionNotFound)?;

        tracing::info!("Updated session {}", id.as_str());
        Ok(session)
    }
}
