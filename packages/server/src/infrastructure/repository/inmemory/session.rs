//! `SessionRepository` のインメモリ実装

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::{
    RepositoryError, Session, SessionCounts, SessionId, SessionLookup, SessionRepository,
    SessionTimeout, Timestamp,
};

use super::InMemoryRepository;

#[async_trait]
impl SessionRepository for InMemoryRepository {
    async fn insert_session(&self, session: Session) {
        let mut store = self.store.lock().await;
        store
            .sessions
            .insert(session.id.as_str().to_string(), session);
    }

    async fn session_exists(&self, id: &SessionId) -> bool {
        let store = self.store.lock().await;
        store.sessions.contains_key(id.as_str())
    }

    async fn touch_session(
        &self,
        id: &SessionId,
        now: Timestamp,
    ) -> Result<Session, RepositoryError> {
        let mut store = self.store.lock().await;
        let session = store
            .sessions
            .get_mut(id.as_str())
            .ok_or_else(|| RepositoryError::SessionNotFound(id.as_str().to_string()))?;
        session.touch(now);
        Ok(session.clone())
    }

    async fn touch_or_insert_session(&self, id: SessionId, now: Timestamp) -> SessionLookup {
        let mut store = self.store.lock().await;
        if let Some(session) = store.sessions.get_mut(id.as_str()) {
            session.touch(now);
            return SessionLookup::Found(session.clone());
        }

        let session = Session::new(id, now, Map::new());
        store
            .sessions
            .insert(session.id.as_str().to_string(), session.clone());
        SessionLookup::Created(session)
    }

    async fn merge_session_state(
        &self,
        id: &SessionId,
        partial: Map<String, Value>,
        now: Timestamp,
    ) -> Result<Session, RepositoryError> {
        let mut store = self.store.lock().await;
        let session = store
            .sessions
            .get_mut(id.as_str())
            .ok_or_else(|| RepositoryError::SessionNotFound(id.as_str().to_string()))?;
        session.merge_state(partial, now);
        Ok(session.clone())
    }

    async fn replace_session(
        &self,
        old_id: &SessionId,
        replacement: Session,
    ) -> Result<Session, RepositoryError> {
        let mut store = self.store.lock().await;
        if store.sessions.remove(old_id.as_str()).is_none() {
            return Err(RepositoryError::SessionNotFound(
                old_id.as_str().to_string(),
            ));
        }
        store
            .sessions
            .insert(replacement.id.as_str().to_string(), replacement.clone());
        Ok(replacement)
    }

    async fn remove_expired_sessions(
        &self,
        now: Timestamp,
        timeout: SessionTimeout,
    ) -> Vec<SessionId> {
        let mut store = self.store.lock().await;
        let expired: Vec<SessionId> = store
            .sessions
            .values()
            .filter(|session| session.is_expired(now, timeout))
            .map(|session| session.id.clone())
            .collect();
        for id in &expired {
            store.sessions.remove(id.as_str());
        }
        expired
    }

    async fn count_sessions(&self, now: Timestamp, active_window_millis: i64) -> SessionCounts {
        let store = self.store.lock().await;
        SessionCounts {
            total: store.sessions.len(),
            active: store
                .sessions
                .values()
                .filter(|session| session.is_active_within(now, active_window_millis))
                .count(),
        }
    }
}
