//! UseCase: ゲストブック一覧取得

use std::sync::Arc;

use crate::domain::{GuestbookEntry, MessageRepository, RECENT_MESSAGES};

/// ゲストブック一覧（直近 50 件と、保持している全件数）
#[derive(Debug, Clone, PartialEq)]
pub struct MessageListing {
    pub messages: Vec<GuestbookEntry>,
    pub total: usize,
}

/// ゲストブック一覧取得のユースケース
pub struct GetMessagesUseCase {
    repository: Arc<dyn MessageRepository>,
}

impl GetMessagesUseCase {
    /// 新しい GetMessagesUseCase を作成
    pub fn new(repository: Arc<dyn MessageRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> MessageListing {
        MessageListing {
            messages: self.repository.recent_messages(RECENT_MESSAGES).await,
            total: self.repository.count_messages().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{infrastructure::repository::InMemoryRepository, usecase::PostMessageUseCase};
    use balloon_shared::time::FixedClock;

    #[tokio::test]
    async fn test_listing_returns_latest_fifty_with_true_total() {
        // テスト項目: 直近 50 件が登録順で返り、total は保持している全件数になる
        // given (前提条件):
        let repo = Arc::new(InMemoryRepository::with_capacity(10, 1000));
        let post = PostMessageUseCase::new(repo.clone(), Arc::new(FixedClock::new(0)));
        for i in 0..60 {
            post.execute(None, Some("guest".to_string()), Some(format!("m{i}")))
                .await
                .unwrap();
        }
        let usecase = GetMessagesUseCase::new(repo);

        // when (操作):
        let listing = usecase.execute().await;

        // then (期待する結果):
        assert_eq!(listing.total, 60);
        assert_eq!(listing.messages.len(), RECENT_MESSAGES);
        assert_eq!(listing.messages[0].message.as_str(), "m10");
        assert_eq!(listing.messages[49].message.as_str(), "m59");
    }

    #[tokio::test]
    async fn test_listing_of_empty_guestbook() {
        // テスト項目: 投稿がない場合は空の一覧と 0 件が返る
        // given (前提条件):
        let usecase = GetMessagesUseCase::new(Arc::new(InMemoryRepository::with_capacity(1, 1)));

        // when (操作):
        let listing = usecase.execute().await;

        // then (期待する結果):
        assert!(listing.messages.is_empty());
        assert_eq!(listing.total, 0);
    }
}
