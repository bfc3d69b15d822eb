//! `ScoreRepository` のインメモリ実装

use async_trait::async_trait;

use crate::domain::{ScoreRecord, ScoreRepository, SessionId};

use super::InMemoryRepository;

#[async_trait]
impl ScoreRepository for InMemoryRepository {
    async fn add_score(&self, record: ScoreRecord) -> Option<ScoreRecord> {
        let mut store = self.store.lock().await;
        store.scoreboard.submit(record)
    }

    async fn top_scores(&self, limit: usize) -> Vec<ScoreRecord> {
        let store = self.store.lock().await;
        store.scoreboard.top(limit)
    }

    async fn scores_for_session(&self, session_id: &SessionId) -> Vec<ScoreRecord> {
        let store = self.store.lock().await;
        store.scoreboard.for_session(session_id)
    }

    async fn count_scores(&self) -> usize {
        let store = self.store.lock().await;
        store.scoreboard.count()
    }
}
