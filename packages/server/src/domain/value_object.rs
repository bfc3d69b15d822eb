//! 値オブジェクト
//!
//! 生成時に検証を行い、不正な値を持つインスタンスが存在しないことを保証します。

use serde::Serialize;
use serde_json::{Number, Value};
use uuid::Uuid;

use super::{MAX_MESSAGE_CHARS, MAX_NAME_CHARS, SESSION_TIMEOUT_SECS, ValueObjectError};

/// セッション ID
///
/// 作成 API では UUID v4 が割り当てられるが、create-if-missing の取得やスコア・
/// メッセージの送信では、クライアントが指定した文字列を加工せずにそのまま使う
/// （空白のみの ID も有効）。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<Uuid> for SessionId {
    fn from(id: Uuid) -> Self {
        Self(id.to_string())
    }
}

/// スコア・メッセージのレコード ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Uuid> for RecordId {
    fn from(id: Uuid) -> Self {
        Self(id.to_string())
    }
}

/// Unix タイムスタンプ（UTC, ミリ秒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// `earlier` からの経過ミリ秒
    pub fn millis_since(&self, earlier: Timestamp) -> i64 {
        self.0 - earlier.0
    }
}

/// セッションの有効期限（最終アクセスからのアイドル時間）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTimeout {
    millis: i64,
}

impl SessionTimeout {
    pub fn from_secs(secs: u64) -> Self {
        Self {
            millis: i64::try_from(secs.saturating_mul(1000)).unwrap_or(i64::MAX),
        }
    }

    pub fn as_millis(&self) -> i64 {
        self.millis
    }
}

impl Default for SessionTimeout {
    fn default() -> Self {
        Self::from_secs(SESSION_TIMEOUT_SECS)
    }
}

/// スコアの数値
///
/// 送信された JSON の数値表現（整数なら整数のまま）を保持しつつ、
/// 並び替え用に `f64` の値も持つ。
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreValue {
    raw: Number,
    value: f64,
}

impl ScoreValue {
    pub fn from_json(value: Value) -> Result<Self, ValueObjectError> {
        match value {
            Value::Number(raw) => {
                let value = raw.as_f64().ok_or(ValueObjectError::ScoreNotNumeric)?;
                Ok(Self { raw, value })
            }
            _ => Err(ValueObjectError::ScoreNotNumeric),
        }
    }

    pub fn as_f64(&self) -> f64 {
        self.value
    }

    pub fn to_json(&self) -> Value {
        Value::Number(self.raw.clone())
    }
}

/// ゲストブックの表示名（前後の空白を除去済み、1〜50 文字）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(raw: &str) -> Result<Self, ValueObjectError> {
        let trimmed = raw.trim();
        let actual = trimmed.chars().count();
        if actual == 0 {
            return Err(ValueObjectError::NameEmpty);
        }
        if actual > MAX_NAME_CHARS {
            return Err(ValueObjectError::NameTooLong {
                max: MAX_NAME_CHARS,
                actual,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// ゲストブックの本文（前後の空白を除去済み、1〜500 文字）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBody(String);

impl MessageBody {
    pub fn new(raw: &str) -> Result<Self, ValueObjectError> {
        let trimmed = raw.trim();
        let actual = trimmed.chars().count();
        if actual == 0 {
            return Err(ValueObjectError::MessageEmpty);
        }
        if actual > MAX_MESSAGE_CHARS {
            return Err(ValueObjectError::MessageTooLong {
                max: MAX_MESSAGE_CHARS,
                actual,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// パスワードで保護されたページ名（例: "blog2"）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageName(String);

impl PageName {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.trim().is_empty() {
            return Err(ValueObjectError::PageNameEmpty);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ページ本体の URL パス
    pub fn content_path(&self) -> String {
        format!("/{}.html", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_session_id_keeps_value_as_given() {
        // テスト項目: クライアントが指定した ID は空白も含めてそのまま保持される
        // given (前提条件):
        let raw = "  ".to_string();

        // when (操作):
        let id = SessionId::new(raw);

        // then (期待する結果):
        assert_eq!(id.as_str(), "  ");
    }

    #[test]
    fn test_message_body_accepts_exactly_max_chars() {
        // テスト項目: ちょうど 500 文字の本文は受け付けられる
        // given (前提条件):
        let raw = "a".repeat(MAX_MESSAGE_CHARS);

        // when (操作):
        let result = MessageBody::new(&raw);

        // then (期待する結果):
        assert!(result.is_ok());
    }

    #[test]
    fn test_message_body_rejects_over_max_chars() {
        // テスト項目: 501 文字の本文は拒否される
        // given (前提条件):
        let raw = "a".repeat(MAX_MESSAGE_CHARS + 1);

        // when (操作):
        let result = MessageBody::new(&raw);

        // then (期待する結果):
        assert_eq!(
            result,
            Err(ValueObjectError::MessageTooLong {
                max: 500,
                actual: 501
            })
        );
    }

    #[test]
    fn test_display_name_is_trimmed_before_length_check() {
        // テスト項目: 表示名は前後の空白を除去してから長さを検証する
        // given (前提条件):
        let raw = format!("  {}  ", "n".repeat(MAX_NAME_CHARS));

        // when (操作):
        let name = DisplayName::new(&raw).unwrap();

        // then (期待する結果):
        assert_eq!(name.as_str().len(), MAX_NAME_CHARS);
    }

    #[test]
    fn test_display_name_counts_characters_not_bytes() {
        // テスト項目: 長さはバイト数ではなく文字数で数える
        // given (前提条件):
        let raw = "🎈".repeat(MAX_NAME_CHARS);

        // when (操作):
        let result = DisplayName::new(&raw);

        // then (期待する結果):
        assert!(result.is_ok());
    }

    #[test]
    fn test_display_name_rejects_whitespace_only() {
        // テスト項目: 空白のみの表示名は拒否される
        // given (前提条件):

        // when (操作):
        let result = DisplayName::new(" \t\n ");

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::NameEmpty));
    }

    #[test]
    fn test_score_value_keeps_integer_representation() {
        // テスト項目: 整数のスコアは整数のまま保持される
        // given (前提条件):
        let raw = json!(42);

        // when (操作):
        let score = ScoreValue::from_json(raw).unwrap();

        // then (期待する結果):
        assert_eq!(score.to_json(), json!(42));
        assert_eq!(score.as_f64(), 42.0);
    }

    #[test]
    fn test_score_value_rejects_non_number() {
        // テスト項目: 数値以外のスコアは拒否される
        // given (前提条件):
        let raw = json!("42");

        // when (操作):
        let result = ScoreValue::from_json(raw);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::ScoreNotNumeric));
    }

    #[test]
    fn test_page_name_content_path() {
        // テスト項目: ページ名から `/{page}.html` 形式のパスが作られる
        // given (前提条件):
        let page = PageName::new("blog2".to_string()).unwrap();

        // when (操作):
        let path = page.content_path();

        // then (期待する結果):
        assert_eq!(path, "/blog2.html");
    }

    #[test]
    fn test_session_timeout_default_is_one_hour() {
        // テスト項目: デフォルトのタイムアウトは 3600 秒
        // given (前提条件):

        // when (操作):
        let timeout = SessionTimeout::default();

        // then (期待する結果):
        assert_eq!(timeout.as_millis(), 3_600_000);
    }
}
