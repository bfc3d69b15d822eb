//! エンティティ定義

use serde_json::{Map, Value};

use super::{
    DisplayName, MessageBody, RecordId, ScoreValue, SessionId, SessionTimeout, Timestamp,
    merge::deep_merge,
};

/// 訪問者ごとのセッション
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: SessionId,
    pub created_at: Timestamp,
    pub last_seen: Timestamp,
    /// 形の決まっていない任意の JSON オブジェクト
    pub state: Map<String, Value>,
}

impl Session {
    pub fn new(id: SessionId, now: Timestamp, state: Map<String, Value>) -> Self {
        Self {
            id,
            created_at: now,
            last_seen: now,
            state,
        }
    }

    /// 最終アクセス時刻を更新する
    pub fn touch(&mut self, now: Timestamp) {
        self.last_seen = now;
    }

    /// 部分的な状態をディープマージし、最終アクセス時刻を更新する
    pub fn merge_state(&mut self, partial: Map<String, Value>, now: Timestamp) {
        deep_merge(&mut self.state, partial);
        self.touch(now);
    }

    /// 最終アクセスからタイムアウトを超えて放置されているか
    pub fn is_expired(&self, now: Timestamp, timeout: SessionTimeout) -> bool {
        now.millis_since(self.last_seen) > timeout.as_millis()
    }

    /// 最終アクセスが `window_millis` 未満か
    pub fn is_active_within(&self, now: Timestamp, window_millis: i64) -> bool {
        now.millis_since(self.last_seen) < window_millis
    }
}

/// スコアボードの 1 レコード（作成後は不変）
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    pub id: RecordId,
    pub session_id: Option<SessionId>,
    pub score: ScoreValue,
    pub meta: Map<String, Value>,
    pub created_at: Timestamp,
}

/// ゲストブックの 1 エントリ（作成後は不変）
#[derive(Debug, Clone, PartialEq)]
pub struct GuestbookEntry {
    pub id: RecordId,
    pub session_id: Option<SessionId>,
    pub name: DisplayName,
    pub message: MessageBody,
    pub created_at: Timestamp,
}
