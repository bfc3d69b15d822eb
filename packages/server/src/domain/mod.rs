//! ドメイン層
//!
//! セッション・スコアボード・ゲストブック・ページロックのモデルと、
//! それらを永続化するための Repository trait を定義します。

mod entity;
mod error;
mod factory;
mod guestbook;
mod merge;
mod page_lock;
mod repository;
mod scoreboard;
mod site_config;
mod value_object;

pub use entity::{GuestbookEntry, ScoreRecord, Session};
pub use error::{RepositoryError, ValueObjectError};
pub use factory::{RecordIdFactory, SessionIdFactory};
pub use guestbook::Guestbook;
pub use merge::deep_merge;
pub use page_lock::{PagePasswords, UnlockOutcome};
#[cfg(test)]
pub use repository::MockPagePasswordSource;
pub use repository::{
    MessageRepository, PagePasswordSource, ScoreRepository, SessionCounts, SessionLookup,
    SessionRepository,
};
pub use scoreboard::Scoreboard;
pub use site_config::{BlogContent, ContentBlock, GalleryImage, SiteAssets, SiteConfig};
pub use value_object::{
    DisplayName, MessageBody, PageName, RecordId, ScoreValue, SessionId, SessionTimeout, Timestamp,
};

/// セッションのアイドルタイムアウト（秒）
pub const SESSION_TIMEOUT_SECS: u64 = 3600;

/// stats の active に数える最終アクセスの範囲（ミリ秒）
pub const ACTIVE_WINDOW_MILLIS: i64 = 3_600_000;

/// スコアの保持上限
pub const MAX_SCORES: usize = 1000;

/// ゲストブックの保持上限
pub const MAX_MESSAGES: usize = 1000;

/// セッション指定なしで返すスコアの件数
pub const LEADERBOARD_SIZE: usize = 10;

/// 一覧で返す直近メッセージの件数
pub const RECENT_MESSAGES: usize = 50;

pub const MAX_NAME_CHARS: usize = 50;

pub const MAX_MESSAGE_CHARS: usize = 500;

/// スコア送信時にセッション状態へ書き込むキー
pub const LAST_SCORE_KEY: &str = "lastScore";
