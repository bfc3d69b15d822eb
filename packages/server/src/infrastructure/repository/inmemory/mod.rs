//! InMemory Repository 実装
//!
//! セッション・スコアボード・ゲストブックを 1 つの `InMemoryStore` にまとめ、
//! 単一の `Mutex` で保護します。各操作はロックを取ったまま最後まで実行されるため、
//! 複数スレッドのリクエストが同時に来ても更新が混ざることはありません。
//!
//! プロセスを再起動するとすべての状態は失われます。

mod message;
mod score;
mod session;

use std::{collections::HashMap, sync::Arc};

use tokio::sync::Mutex;

use crate::domain::{Guestbook, Scoreboard, Session};

/// プロセス内に保持される全状態
#[derive(Debug)]
pub struct InMemoryStore {
    /// Key: session_id (String)
    sessions: HashMap<String, Session>,
    scoreboard: Scoreboard,
    guestbook: Guestbook,
}

impl InMemoryStore {
    pub fn new(max_scores: usize, max_messages: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            scoreboard: Scoreboard::new(max_scores),
            guestbook: Guestbook::new(max_messages),
        }
    }
}

/// インメモリ Repository 実装
///
/// `SessionRepository` / `ScoreRepository` / `MessageRepository` をすべて実装します。
#[derive(Clone)]
pub struct InMemoryRepository {
    store: Arc<Mutex<InMemoryStore>>,
}

impl InMemoryRepository {
    /// 新しい InMemoryRepository を作成
    pub fn new(store: Arc<Mutex<InMemoryStore>>) -> Self {
        Self { store }
    }

    /// 容量を指定して空のストアから作成
    pub fn with_capacity(max_scores: usize, max_messages: usize) -> Self {
        Self::new(Arc::new(Mutex::new(InMemoryStore::new(
            max_scores,
            max_messages,
        ))))
    }
}
