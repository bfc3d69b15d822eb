//! UseCase: サーバー統計

use std::sync::Arc;

use balloon_shared::time::Clock;

use crate::domain::{
    ACTIVE_WINDOW_MILLIS, MessageRepository, ScoreRepository, SessionCounts, SessionRepository,
    SessionTimeout, Timestamp,
};

use super::expiry::expire_idle_sessions;

/// `/api/stats` の集計結果
#[derive(Debug, Clone, PartialEq)]
pub struct ServerStats {
    pub sessions: SessionCounts,
    pub scores: usize,
    pub messages: usize,
    /// 起動からの経過秒数
    pub uptime_secs: f64,
}

/// サーバー統計取得のユースケース
pub struct GetStatsUseCase {
    session_repository: Arc<dyn SessionRepository>,
    score_repository: Arc<dyn ScoreRepository>,
    message_repository: Arc<dyn MessageRepository>,
    clock: Arc<dyn Clock>,
    timeout: SessionTimeout,
    /// このユースケースを作った時刻をサーバーの起動時刻とみなす
    started_at: Timestamp,
}

impl GetStatsUseCase {
    /// 新しい GetStatsUseCase を作成
    pub fn new(
        session_repository: Arc<dyn SessionRepository>,
        score_repository: Arc<dyn ScoreRepository>,
        message_repository: Arc<dyn MessageRepository>,
        clock: Arc<dyn Clock>,
        timeout: SessionTimeout,
    ) -> Self {
        let started_at = Timestamp::new(clock.now_millis());
        Self {
            session_repository,
            score_repository,
            message_repository,
            clock,
            timeout,
            started_at,
        }
    }

    pub async fn execute(&self) -> ServerStats {
        let now = Timestamp::new(self.clock.now_millis());
        let sessions = self.session_repository.as_ref();
        expire_idle_sessions(sessions, now, self.timeout).await;

        ServerStats {
            sessions: self
                .session_repository
                .count_sessions(now, ACTIVE_WINDOW_MILLIS)
                .await,
            scores: self.score_repository.count_scores().await,
            messages: self.message_repository.count_messages().await,
            uptime_secs: now.millis_since(self.started_at) as f64 / 1000.0,
        }
    }
}
