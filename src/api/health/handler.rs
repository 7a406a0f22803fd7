// Health probe handler

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use std::backtrace::Backtrace;
use tracing::{instrument, info};

use crate::config::state::AppState;

/// Health probe payload: what a load balancer or deploy monitor needs to
/// identify the instance and confirm it is serving.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub environment: String,
    pub hostname: String,
    // The UTC date/time (RFC3339) when the server responded.
    pub date: String,
}

/// Returns service status and instance identification
#[instrument(fields(backtrace = ?Backtrace::capture()), skip(state))]
pub async fn health_handler(
    State(state): State<AppState>,
) -> Json<HealthResponse> {
    info!("Health probe called");

    let hostname: String = hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string());

    Json(HealthResponse {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        environment: state.environment.environment.to_string(),
        hostname,
        date: Utc::now().to_rfc3339(),
    })
}
