/// Health check API routes
use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    /// Seconds since process start
    pub uptime: f64,
    pub environment: String,
    pub version: String,
}

/// GET /api/health - Health check endpoint
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: state.started_at.elapsed().as_secs_f64(),
        environment: state.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
