//! Server execution logic.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use axum::{
    Router,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::{MethodRouter, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::{
    handler::{
        message::{get_messages, post_message},
        page::unlock_page,
        score::{get_scores, submit_score},
        session::{create_session, get_session, reset_session, update_session},
        system::{get_config, get_stats, health_check},
    },
    signal::shutdown_signal,
    state::AppState,
};

/// Balloon HTTP server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(app_state, PathBuf::from("./public"));
/// server.run("0.0.0.0".to_string(), 5000).await?;
/// ```
pub struct Server {
    app_state: Arc<AppState>,
    /// 静的ファイル（index.html, css/, js/, assets/）のルート
    static_dir: PathBuf,
}

impl Server {
    /// Create a new Server instance
    pub fn new(app_state: AppState, static_dir: PathBuf) -> Self {
        Self {
            app_state: Arc::new(app_state),
            static_dir,
        }
    }

    /// Run the server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "0.0.0.0")
    /// * `port` - The port number to bind to (e.g., 5000)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = build_router(self.app_state, &self.static_dir);

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!("Balloon server listening on {}", listener.local_addr()?);
        tracing::info!("Serving files from: {}", self.static_dir.display());
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}

/// API ルートと静的ファイル配信をまとめた Router を作る
pub fn build_router(app_state: Arc<AppState>, static_dir: &Path) -> Router {
    let api = Router::new()
        .route("/health", get(health_check))
        .route("/session/create", post(create_session))
        .route("/session/{id}", get(get_session).post(update_session))
        .route("/session/{id}/reset", post(reset_session))
        .route("/score", post(submit_score))
        .route("/scores", get(get_scores))
        .route("/messages", get(get_messages).post(post_message))
        .route("/config", get(get_config))
        .route("/unlock-page", post(unlock_page))
        .route("/stats", get(get_stats))
        .with_state(app_state);

    // 存在しない *.html は SPA として index.html を返し、それ以外は 404
    let index_path = static_dir.join("index.html");
    let index_fallback: MethodRouter = get(move |uri: Uri| spa_fallback(uri, index_path.clone()));
    let static_files = ServeDir::new(static_dir).fallback(index_fallback);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api", api)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn spa_fallback(uri: Uri, index_path: PathBuf) -> Response {
    if !uri.path().ends_with(".html") {
        return (StatusCode::NOT_FOUND, "File not found").into_response();
    }

    match tokio::fs::read_to_string(&index_path).await {
        Ok(index) => Html(index).into_response(),
        Err(e) => {
            tracing::error!("Error serving {}: {}", index_path.display(), e);
            (StatusCode::NOT_FOUND, "Index file not found").into_response()
        }
    }
}
