//! UseCase 層のエラー型

use thiserror::Error;

use crate::domain::ValueObjectError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetSessionError {
    #[error("Session not found")]
    SessionNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateSessionError {
    #[error("Session not found")]
    SessionNotFound,

    #[error("No data provided")]
    EmptyState,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResetSessionError {
    #[error("Session not found")]
    SessionNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitScoreError {
    #[error("Score is required")]
    MissingScore,

    #[error(transparent)]
    InvalidScore(#[from] ValueObjectError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostMessageError {
    #[error(transparent)]
    InvalidInput(#[from] ValueObjectError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnlockPageError {
    #[error("Page is required")]
    MissingPage,

    #[error("No password configured for page '{0}'")]
    NotConfigured(String),

    #[error("Incorrect password! Try again.")]
    WrongPassword,

    #[error("Page passwords unavailable: {0}")]
    SourceUnavailable(String),
}
