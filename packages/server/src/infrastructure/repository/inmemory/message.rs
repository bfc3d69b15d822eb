//! `MessageRepository` のインメモリ実装

use async_trait::async_trait;

use crate::domain::{GuestbookEntry, MessageRepository};

use super::InMemoryRepository;

#[async_trait]
impl MessageRepository for InMemoryRepository {
    async fn add_message(&self, entry: GuestbookEntry) -> Option<GuestbookEntry> {
        let mut store = self.store.lock().await;
        store.guestbook.submit(entry)
    }

    async fn recent_messages(&self, limit: usize) -> Vec<GuestbookEntry> {
        let store = self.store.lock().await;
        store.guestbook.recent(limit)
    }

    async fn count_messages(&self) -> usize {
        let store = self.store.lock().await;
        store.guestbook.count()
    }
}
