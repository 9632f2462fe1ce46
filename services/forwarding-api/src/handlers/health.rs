//! Health check handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use std::time::Instant;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub database: DatabaseCheck,
}

#[derive(Debug, Serialize)]
pub struct DatabaseCheck {
    pub status: &'static str,
    pub latency_ms: u64,
}

/// Liveness probe - always returns OK if the service is running
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "forwarding-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness probe - pings the rate/shipment database
pub async fn ready(State(state): State<AppState>) -> Result<Json<ReadyResponse>, StatusCode> {
    let start = Instant::now();
    let ping = sqlx::query("SELECT 1").execute(&state.pool).await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match ping {
        Ok(_) => Ok(Json(ReadyResponse {
            status: "ready",
            service: "forwarding-api",
            database: DatabaseCheck { status: "connected", latency_ms },
        })),
        Err(e) => {
            tracing::error!(error = ?e, latency_ms, "Database readiness check failed");
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
