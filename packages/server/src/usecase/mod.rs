//! UseCase 層
//!
//! HTTP ハンドラから呼ばれるアプリケーションの操作を 1 ファイル 1 ユースケースで定義します。

mod create_session;
mod error;
mod expiry;
mod get_messages;
mod get_scores;
mod get_session;
mod get_stats;
mod post_message;
mod reset_session;
mod submit_score;
mod unlock_page;
mod update_session;

pub use create_session::CreateSessionUseCase;
pub use error::{
    GetSessionError, PostMessageError, ResetSessionError, SubmitScoreError, UnlockPageError,
    UpdateSessionError,
};
pub use get_messages::{GetMessagesUseCase, MessageListing};
pub use get_scores::{GetScoresUseCase, ScoreListing};
pub use get_session::GetSessionUseCase;
pub use get_stats::{GetStatsUseCase, ServerStats};
pub use post_message::PostMessageUseCase;
pub use reset_session::ResetSessionUseCase;
pub use submit_score::SubmitScoreUseCase;
pub use unlock_page::UnlockPageUseCase;
pub use update_session::UpdateSessionUseCase;
