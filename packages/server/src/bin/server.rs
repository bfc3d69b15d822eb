//! Balloon backend server.
//!
//! Serves the party front-end from a static directory and the JSON API under `/api`.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin balloon-server
//! cargo run --bin balloon-server -- --port 8080 --static-dir ./public --page-passwords ./page_passwords.json
//! ```

use std::sync::Arc;

use balloon_server::{
    config::{Args, ServerConfig},
    infrastructure::{
        page_lock::JsonFilePagePasswordSource, repository::InMemoryRepository,
        site_config::load_site_config,
    },
    ui::{Server, state::AppState},
    usecase::{
        CreateSessionUseCase, GetMessagesUseCase, GetScoresUseCase, GetSessionUseCase,
        GetStatsUseCase, PostMessageUseCase, ResetSessionUseCase, SubmitScoreUseCase,
        UnlockPageUseCase, UpdateSessionUseCase,
    },
};
use balloon_shared::{
    logger::setup_logger,
    time::{Clock, SystemClock},
};
use clap::Parser;

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let config = ServerConfig::from(Args::parse());

    // Initialize dependencies in order:
    // 1. Repository / external sources
    // 2. UseCases
    // 3. AppState
    // 4. Server

    // 1. Create Repository (in-memory store) and external sources
    let repository = Arc::new(InMemoryRepository::with_capacity(
        config.max_scores,
        config.max_messages,
    ));
    let password_source = Arc::new(JsonFilePagePasswordSource::new(
        config.page_passwords_path.clone(),
    ));
    let site_config = match load_site_config(config.site_config_path.as_deref()) {
        Ok(site_config) => site_config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // 2. Create UseCases
    let app_state = AppState {
        create_session_usecase: Arc::new(CreateSessionUseCase::new(
            repository.clone(),
            clock.clone(),
            config.session_timeout,
        )),
        get_session_usecase: Arc::new(GetSessionUseCase::new(
            repository.clone(),
            clock.clone(),
            config.session_timeout,
        )),
        update_session_usecase: Arc::new(UpdateSessionUseCase::new(
            repository.clone(),
            clock.clone(),
        )),
        reset_session_usecase: Arc::new(ResetSessionUseCase::new(
            repository.clone(),
            clock.clone(),
        )),
        submit_score_usecase: Arc::new(SubmitScoreUseCase::new(
            repository.clone(),
            repository.clone(),
            clock.clone(),
        )),
        get_scores_usecase: Arc::new(GetScoresUseCase::new(repository.clone())),
        post_message_usecase: Arc::new(PostMessageUseCase::new(
            repository.clone(),
            clock.clone(),
        )),
        get_messages_usecase: Arc::new(GetMessagesUseCase::new(repository.clone())),
        unlock_page_usecase: Arc::new(UnlockPageUseCase::new(password_source)),
        get_stats_usecase: Arc::new(GetStatsUseCase::new(
            repository.clone(),
            repository.clone(),
            repository.clone(),
            clock.clone(),
            config.session_timeout,
        )),
        site_config: Arc::new(site_config),
    };

    // 3. Create and run the server
    tracing::info!(
        "Starting Balloon backend (session timeout {}s, max scores {}, max messages {})",
        config.session_timeout.as_millis() / 1000,
        config.max_scores,
        config.max_messages
    );
    let server = Server::new(app_state, config.static_dir);
    if let Err(e) = server.run(config.host, config.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
