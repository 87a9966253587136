//! Health check
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /health | GET | version, uptime and a database check |

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::time::{Instant, SystemTime};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    /// Whether a deduction endpoint is configured
    inventory_configured: bool,
    database: CheckResult,
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

/// Pin the uptime clock; called once at startup
pub fn mark_started() {
    START_TIME.get_or_init(SystemTime::now);
}

fn uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    let db_start = Instant::now();
    let database = match sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&state.pool)
        .await
    {
        Ok(_) => CheckResult {
            status: "ok",
            latency_ms: Some(db_start.elapsed().as_millis() as u64),
            message: None,
        },
        Err(e) => {
            tracing::error!(error = %e, "Health check database query failed");
            CheckResult {
                status: "error",
                latency_ms: None,
                message: Some("database unreachable".to_string()),
            }
        }
    };

    Json(HealthResponse {
        status: if database.status == "ok" { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: uptime_seconds(),
        inventory_configured: state.config.inventory_service_url.is_some(),
        database,
    })
}
