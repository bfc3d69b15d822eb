//! Health check, site config and stats handlers.

use std::sync::Arc;

use axum::{Json, extract::State};
use balloon_shared::time::{get_timestamp_millis, timestamp_to_rfc3339};

use crate::{
    domain::SiteConfig,
    infrastructure::dto::http::{HealthResponse, SessionStatsDto, StatsResponse},
    ui::state::AppState,
};

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: timestamp_to_rfc3339(get_timestamp_millis()),
    })
}

/// `GET /api/config`
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<SiteConfig> {
    Json(state.site_config.as_ref().clone())
}

/// `GET /api/stats`
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let stats = state.get_stats_usecase.execute().await;
    Json(StatsResponse {
        sessions: SessionStatsDto {
            total: stats.sessions.total,
            active: stats.sessions.active,
        },
        scores: stats.scores,
        messages: stats.messages,
        uptime: stats.uptime_secs,
    })
}
