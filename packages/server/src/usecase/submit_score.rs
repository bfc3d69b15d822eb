//! UseCase: スコア送信
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SubmitScoreUseCase::execute() メソッド
//! - スコアボードへの追加と、セッション状態への最新スコアの反映
//!
//! ### どのような状況を想定しているか
//! - 正常系：セッション付き・セッションなしのスコア送信
//! - 異常系：スコアなし、数値以外のスコア
//! - エッジケース：存在しないセッション ID（スコアは登録され、反映は行われない）

use std::sync::Arc;

use balloon_shared::time::Clock;
use serde_json::{Map, Value};

use crate::domain::{
    LAST_SCORE_KEY, RecordIdFactory, ScoreRecord, ScoreRepository, ScoreValue, SessionId,
    SessionRepository, Timestamp,
};

use super::error::SubmitScoreError;

/// スコア送信のユースケース
pub struct SubmitScoreUseCase {
    score_repository: Arc<dyn ScoreRepository>,
    session_repository: Arc<dyn SessionRepository>,
    clock: Arc<dyn Clock>,
}

impl SubmitScoreUseCase {
    /// 新しい SubmitScoreUseCase を作成
    pub fn new(
        score_repository: Arc<dyn ScoreRepository>,
        session_repository: Arc<dyn SessionRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            score_repository,
            session_repository,
            clock,
        }
    }

    /// スコア送信を実行
    ///
    /// # Arguments
    ///
    /// * `session_id` - 送信者のセッション ID（任意）
    /// * `score` - スコア（JSON の数値）
    /// * `meta` - 任意のメタデータ（省略時は空）
    ///
    /// # Returns
    ///
    /// * `Ok(ScoreRecord)` - 登録したレコード
    /// * `Err(SubmitScoreError)` - スコアがない、または数値でない
    pub async fn execute(
        &self,
        session_id: Option<String>,
        score: Option<Value>,
        meta: Option<Map<String, Value>>,
    ) -> Result<ScoreRecord, SubmitScoreError> {
        let score = match score {
            None | Some(Value::Null) => return Err(SubmitScoreError::MissingScore),
            Some(raw) => ScoreValue::from_json(raw)?,
        };
        let session_id = session_id.map(SessionId::new);
        let now = Timestamp::new(self.clock.now_millis());

        let record = ScoreRecord {
            id: RecordIdFactory::generate(),
            session_id,
            score,
            meta: meta.unwrap_or_default(),
            created_at: now,
        };

        if let Some(evicted) = self.score_repository.add_score(record.clone()).await {
            tracing::debug!("Score {} evicted (capacity reached)", evicted.id.as_str());
        }
        tracing::info!("New score: {}", record.score.as_f64());

        if let Some(session_id) = &record.session_id {
            self.mirror_into_session(session_id, &record, now).await;
        }

        Ok(record)
    }

    /// 最新スコアをセッション状態の `lastScore` に書き込む
    async fn mirror_into_session(
        &self,
        session_id: &SessionId,
        record: &ScoreRecord,
        now: Timestamp,
    ) {
        let score = record.score.to_json();
        let mut partial = Map::new();
        partial.insert(LAST_SCORE_KEY.to_string(), score);

        if self
            .session_repository
            .merge_session_state(session_id, partial, now)
            .await
            .is_err()
        {
            tracing::debug!(
                "Score submitted for unknown session {}; not mirrored",
                session_id.as_str()
            );
        }
    }
}
