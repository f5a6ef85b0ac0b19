//! HTTP API for exposing scheduler metrics.

use crate::BotMetrics;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;

/// API state containing the metrics collector.
#[derive(Clone)]
pub struct ApiState {
    metrics: Arc<BotMetrics>,
    started: Instant,
}

impl ApiState {
    /// Creates new API state.
    pub fn new(metrics: Arc<BotMetrics>) -> Self {
        Self {
            metrics,
            started: Instant::now(),
        }
    }
}

/// Creates the metrics API router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(get_metrics))
        .with_state(state)
}

/// Health check endpoint with process uptime.
async fn health_check(State(state): State<ApiState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "uptime_secs": state.started.elapsed().as_secs(),
        })),
    )
}

/// Get current metrics snapshot for both publication tracks.
async fn get_metrics(State(state): State<ApiState>) -> impl IntoResponse {
    let snapshot = state.metrics.snapshot();
    (StatusCode::OK, Json(snapshot))
}
