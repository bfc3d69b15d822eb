//! セッションの遅延期限切れ処理
//!
//! バックグラウンドのタイマーは持たず、作成・取得・統計の各ユースケースの
//! 先頭で呼び出す。

use crate::domain::{SessionRepository, SessionTimeout, Timestamp};

/// タイムアウトを超えて放置されたセッションを削除し、削除件数を返す
pub(crate) async fn expire_idle_sessions(
    repository: &dyn SessionRepository,
    now: Timestamp,
    timeout: SessionTimeout,
) -> usize {
    let expired = repository.remove_expired_sessions(now, timeout).await;
    for id in &expired {
        tracing::debug!("Cleaned up expired session: {}", id.as_str());
    }
    expired.len()
}
