//! Health check endpoints

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};
use shared::error::{AppError, ErrorCode};

use crate::state::AppState;

/// Greeting used by the root health check
pub const WELCOME_MESSAGE: &str = "Hello from PyCon Davao Membership API!";

/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

/// GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "member-server",
        "version": env!("CARGO_PKG_VERSION"),
        "git_hash": option_env!("GIT_HASH").unwrap_or("dev"),
    }))
}

/// GET /health/ready
pub async fn readiness(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state.members.ping().await.map_err(|e| {
        tracing::warn!(error = %e, "Readiness probe failed");
        AppError::new(ErrorCode::StoreUnavailable)
    })?;

    Ok(Json(json!({ "status": "ok", "database": "ok" })))
}
