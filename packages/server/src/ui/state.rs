//! Server state shared by all handlers.

use std::sync::Arc;

use crate::{
    domain::SiteConfig,
    usecase::{
        CreateSessionUseCase, GetMessagesUseCase, GetScoresUseCase, GetSessionUseCase,
        GetStatsUseCase, PostMessageUseCase, ResetSessionUseCase, SubmitScoreUseCase,
        UnlockPageUseCase, UpdateSessionUseCase,
    },
};

/// Shared application state
pub struct AppState {
    /// CreateSessionUseCase（セッション作成のユースケース）
    pub create_session_usecase: Arc<CreateSessionUseCase>,
    /// GetSessionUseCase（セッション取得のユースケース）
    pub get_session_usecase: Arc<GetSessionUseCase>,
    /// UpdateSessionUseCase（セッション更新のユースケース）
    pub update_session_usecase: Arc<UpdateSessionUseCase>,
    /// ResetSessionUseCase（セッションリセットのユースケース）
    pub reset_session_usecase: Arc<ResetSessionUseCase>,
    /// SubmitScoreUseCase（スコア送信のユースケース）
    pub submit_score_usecase: Arc<SubmitScoreUseCase>,
    /// GetScoresUseCase（スコア一覧取得のユースケース）
    pub get_scores_usecase: Arc<GetScoresUseCase>,
    /// PostMessageUseCase（ゲストブック投稿のユースケース）
    pub post_message_usecase: Arc<PostMessageUseCase>,
    /// GetMessagesUseCase（ゲストブック一覧取得のユースケース）
    pub get_messages_usecase: Arc<GetMessagesUseCase>,
    /// UnlockPageUseCase（ページ解錠のユースケース）
    pub unlock_page_usecase: Arc<UnlockPageUseCase>,
    /// GetStatsUseCase（統計取得のユースケース）
    pub get_stats_usecase: Arc<GetStatsUseCase>,
    /// `/api/config` で返すサイト設定
    pub site_config: Arc<SiteConfig>,
}
