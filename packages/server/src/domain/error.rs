//! ドメイン層のエラー型

use thiserror::Error;

/// 値オブジェクトの生成時に発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("Name is required")]
    NameEmpty,

    #[error("Name too long (max {max} characters, got {actual})")]
    NameTooLong { max: usize, actual: usize },

    #[error("Message is required")]
    MessageEmpty,

    #[error("Message too long (max {max} characters, got {actual})")]
    MessageTooLong { max: usize, actual: usize },

    #[error("Score must be a number")]
    ScoreNotNumeric,

    #[error("Page is required")]
    PageNameEmpty,
}

/// Repository 操作で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Page password source unavailable: {0}")]
    PasswordSourceUnavailable(String),
}
