use axum::extract::State;
use serde_json::json;
use crate::api::{ApiResponse, AppState};
use crate::config::APP_NAME;

pub async fn root(State(state): State<AppState>) -> ApiResponse {
    ApiResponse::ok(json!({
        "message": APP_NAME,
        "version": state.settings.version(),
    }))
}

pub async fn health_check(State(state): State<AppState>) -> ApiResponse {
    ApiResponse::ok(json!({
        "status": "healthy",
        "modules": state.providers.availability(),
        "build": {
            "git_hash": env!("GIT_HASH"),
            "built_at": env!("BUILD_TIMESTAMP"),
        },
        "timestamp": chrono::Utc::now(),
    }))
}
