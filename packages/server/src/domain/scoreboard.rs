//! スコアボード集約
//!
//! 容量上限付きのスコア一覧。常にスコアの降順で並んでおり、同点の場合は
//! 登録順を保つ（安定ソート）。容量を超えると最も古く登録されたレコードから
//! 取り除かれる（順位ではなく登録順の FIFO）。

use super::{ScoreRecord, SessionId};

#[derive(Debug, Clone)]
struct RankedScore {
    /// 登録順の通し番号（FIFO で古いものを捨てるために使う）
    seq: u64,
    record: ScoreRecord,
}

#[derive(Debug, Clone)]
pub struct Scoreboard {
    capacity: usize,
    next_seq: u64,
    ranked: Vec<RankedScore>,
}

impl Scoreboard {
    /// 容量 0 は 1 として扱う
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            next_seq: 0,
            ranked: Vec::new(),
        }
    }

    /// レコードを追加し、容量超過で取り除かれたレコードがあれば返す
    pub fn submit(&mut self, record: ScoreRecord) -> Option<ScoreRecord> {
        let evicted = if self.ranked.len() >= self.capacity {
            self.evict_oldest()
        } else {
            None
        };

        self.ranked.push(RankedScore {
            seq: self.next_seq,
            record,
        });
        self.next_seq += 1;

        // sort_by は安定ソートなので、同点のレコードは登録順のまま残る
        self.ranked.sort_by(|a, b| {
            b.record
                .score
                .as_f64()
                .total_cmp(&a.record.score.as_f64())
        });

        evicted
    }

    /// 上位 `limit` 件
    pub fn top(&self, limit: usize) -> Vec<ScoreRecord> {
        self.ranked
            .iter()
            .take(limit)
            .map(|ranked| ranked.record.clone())
            .collect()
    }

    /// 指定セッションのレコードをすべて（順位順）
    pub fn for_session(&self, session_id: &SessionId) -> Vec<ScoreRecord> {
        self.ranked
            .iter()
            .filter(|ranked| ranked.record.session_id.as_ref() == Some(session_id))
            .map(|ranked| ranked.record.clone())
            .collect()
    }

    /// 保持しているレコード数
    pub fn count(&self) -> usize {
        self.ranked.len()
    }

    fn evict_oldest(&mut self) -> Option<ScoreRecord> {
        let position = self
            .ranked
            .iter()
            .enumerate()
            .min_by_key(|(_, ranked)| ranked.seq)
            .map(|(index, _)| index)?;
        Some(self.ranked.remove(position).record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RecordIdFactory, ScoreValue, Timestamp};
    use serde_json::{Map, json};

    fn record(score: i64, session: Option<&str>) -> ScoreRecord {
        ScoreRecord {
            id: RecordIdFactory::generate(),
            session_id: session.map(|s| SessionId::new(s.to_string())),
            score: ScoreValue::from_json(json!(score)).unwrap(),
            meta: Map::new(),
            created_at: Timestamp::new(0),
        }
    }

    fn scores(records: &[ScoreRecord]) -> Vec<f64> {
        records.iter().map(|r| r.score.as_f64()).collect()
    }

    #[test]
    fn test_scores_are_sorted_descending() {
        // テスト項目: 10, 30, 20 の順に登録すると 30, 20, 10 の順に並ぶ
        // given (前提条件):
        let mut board = Scoreboard::new(100);

        // when (操作):
        board.submit(record(10, None));
        board.submit(record(30, None));
        board.submit(record(20, None));

        // then (期待する結果):
        assert_eq!(scores(&board.top(10)), vec![30.0, 20.0, 10.0]);
    }

    #[test]
    fn test_equal_scores_keep_insertion_order() {
        // テスト項目: 同点のスコアは先に登録されたものが上位に残る
        // given (前提条件):
        let mut board = Scoreboard::new(100);
        let first = record(30, Some("first"));
        let second = record(30, Some("second"));
        board.submit(record(10, None));
        board.submit(first.clone());
        board.submit(record(20, None));

        // when (操作):
        board.submit(second.clone());

        // then (期待する結果):
        let top = board.top(10);
        assert_eq!(scores(&top), vec![30.0, 30.0, 20.0, 10.0]);
        assert_eq!(top[0].id, first.id);
        assert_eq!(top[1].id, second.id);
    }

    #[test]
    fn test_capacity_evicts_oldest_not_lowest() {
        // テスト項目: 容量超過時は最下位ではなく最も古いレコードが取り除かれる
        // given (前提条件):
        let mut board = Scoreboard::new(3);
        let oldest = record(50, None);
        board.submit(oldest.clone());
        board.submit(record(10, None));
        board.submit(record(20, None));

        // when (操作):
        let evicted = board.submit(record(5, None));

        // then (期待する結果):
        assert_eq!(evicted.map(|r| r.id), Some(oldest.id.clone()));
        assert_eq!(board.count(), 3);
        assert!(board.top(3).iter().all(|r| r.id != oldest.id));
        assert_eq!(scores(&board.top(3)), vec![20.0, 10.0, 5.0]);
    }

    #[test]
    fn test_for_session_returns_all_matches() {
        // テスト項目: セッション指定では件数制限なしで該当レコードをすべて返す
        // given (前提条件):
        let mut board = Scoreboard::new(100);
        for score in 0..15 {
            board.submit(record(score, Some("alice")));
        }
        board.submit(record(99, Some("bob")));

        // when (操作):
        let alice = SessionId::new("alice".to_string());
        let result = board.for_session(&alice);

        // then (期待する結果):
        assert_eq!(result.len(), 15);
        assert_eq!(result[0].score.as_f64(), 14.0);
    }

    #[test]
    fn test_fractional_scores_are_ordered_numerically() {
        // テスト項目: 小数のスコアも数値として比較される
        // given (前提条件):
        let mut board = Scoreboard::new(10);
        let fractional = ScoreRecord {
            score: ScoreValue::from_json(json!(10.5)).unwrap(),
            ..record(0, None)
        };

        // when (操作):
        board.submit(record(10, None));
        board.submit(fractional);
        board.submit(record(11, None));

        // then (期待する結果):
        assert_eq!(scores(&board.top(10)), vec![11.0, 10.5, 10.0]);
    }
}
