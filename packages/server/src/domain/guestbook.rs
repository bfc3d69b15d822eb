//! ゲストブック集約
//!
//! 容量上限付きで登録順を保つ。容量を超えると最も古いエントリから取り除かれる。

use std::collections::VecDeque;

use super::GuestbookEntry;

#[derive(Debug, Clone)]
pub struct Guestbook {
    capacity: usize,
    entries: VecDeque<GuestbookEntry>,
}

impl Guestbook {
    /// 容量 0 は 1 として扱う
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: VecDeque::new(),
        }
    }

    /// エントリを追加し、容量超過で取り除かれたエントリがあれば返す
    pub fn submit(&mut self, entry: GuestbookEntry) -> Option<GuestbookEntry> {
        let evicted = if self.entries.len() >= self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(entry);
        evicted
    }

    /// 直近 `limit` 件を登録順で返す
    pub fn recent(&self, limit: usize) -> Vec<GuestbookEntry> {
        let skip = self.entries.len().saturating_sub(limit);
        self.entries.iter().skip(skip).cloned().collect()
    }

    /// 保持しているエントリ数
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}
