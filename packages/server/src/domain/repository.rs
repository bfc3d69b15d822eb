//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::{
    GuestbookEntry, PagePasswords, RepositoryError, ScoreRecord, Session, SessionId,
    SessionTimeout, Timestamp,
};

/// create-if-missing 付き取得の結果
#[derive(Debug, Clone, PartialEq)]
pub enum SessionLookup {
    /// 既存のセッションが見つかった
    Found(Session),
    /// 見つからなかったので呼び出し側の ID で新規作成した
    Created(Session),
}

/// セッション数の集計
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCounts {
    pub total: usize,
    pub active: usize,
}

/// Session Repository trait
///
/// 読み書きのたびに last_seen を更新する操作は、取得と更新が同じロック内で
/// 行われるよう Repository 側に置いている。
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// セッションを登録
    async fn insert_session(&self, session: Session);

    /// セッションが存在するか（last_seen は更新しない）
    async fn session_exists(&self, id: &SessionId) -> bool;

    /// セッションを取得し last_seen を更新
    async fn touch_session(
        &self,
        id: &SessionId,
        now: Timestamp,
    ) -> Result<Session, RepositoryError>;

    /// セッションを取得し、なければ空の状態で作成
    async fn touch_or_insert_session(&self, id: SessionId, now: Timestamp) -> SessionLookup;

    /// 部分的な状態をディープマージ
    async fn merge_session_state(
        &self,
        id: &SessionId,
        partial: Map<String, Value>,
        now: Timestamp,
    ) -> Result<Session, RepositoryError>;

    /// 古いセッションを削除し、新しいセッションに置き換える
    async fn replace_session(
        &self,
        old_id: &SessionId,
        replacement: Session,
    ) -> Result<Session, RepositoryError>;

    /// タイムアウトを超えて放置されたセッションを削除し、その ID を返す
    async fn remove_expired_sessions(
        &self,
        now: Timestamp,
        timeout: SessionTimeout,
    ) -> Vec<SessionId>;

    /// 全体数と、最終アクセスが `active_window_millis` 未満のセッション数
    async fn count_sessions(&self, now: Timestamp, active_window_millis: i64) -> SessionCounts;
}

/// Score Repository trait
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// スコアを追加し、容量超過で取り除かれたレコードを返す
    async fn add_score(&self, record: ScoreRecord) -> Option<ScoreRecord>;

    /// 順位順の上位 `limit` 件
    async fn top_scores(&self, limit: usize) -> Vec<ScoreRecord>;

    /// 指定セッションのスコアをすべて
    async fn scores_for_session(&self, session_id: &SessionId) -> Vec<ScoreRecord>;

    async fn count_scores(&self) -> usize;
}

/// Guestbook Message Repository trait
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// エントリを追加し、容量超過で取り除かれたエントリを返す
    async fn add_message(&self, entry: GuestbookEntry) -> Option<GuestbookEntry>;

    /// 直近 `limit` 件を登録順で
    async fn recent_messages(&self, limit: usize) -> Vec<GuestbookEntry>;

    async fn count_messages(&self) -> usize;
}

/// ページパスワードの読み込み元
///
/// 照合のたびに読み直されるため、実装はキャッシュしてはならない。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PagePasswordSource: Send + Sync {
    async fn load_passwords(&self) -> Result<PagePasswords, RepositoryError>;
}
