//! Raw-JSON surface served behind the serverless API gateway.
//!
//! Shares state and generators with the standalone router but returns
//! domain objects without the envelope. Randomized payloads draw from the
//! request's [`DemoSource`](crate::demo::DemoSource) RNG.

pub mod accounts;
pub mod ai;
pub mod finops;
pub mod remediation;
pub mod security;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use crate::api::{cors, AppState};
use crate::demo::{compliance, dashboard, guardrails};
use crate::errors::CanvasError;
use crate::models::{ComplianceScore, FrameworkStatus};

pub fn build_gateway_router(state: AppState) -> Result<Router, CanvasError> {
    let cors = cors::cors_layer(&state.settings.allowed_origins)?;

    Ok(Router::new()
        .route("/api/health", get(health_check))
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/security/findings", get(security::findings))
        .route("/api/security/guardduty", get(security::guardduty))
        .route("/api/security/inspector", get(security::inspector))
        .route("/api/compliance/score", get(compliance_score))
        .route("/api/compliance/frameworks", get(compliance_frameworks))
        .route("/api/finops/overview", get(finops::overview))
        .route("/api/finops/by-service", get(finops::by_service))
        .route("/api/finops/by-account", get(finops::by_account))
        .route("/api/finops/savings", get(finops::savings))
        .route("/api/finops/anomalies", get(finops::anomalies))
        .route("/api/finops/budgets", get(finops::budgets))
        .route("/api/accounts", get(accounts::list_accounts))
        .route("/api/accounts/provision", post(accounts::provision))
        .route("/api/guardrails/scp", get(scp_policies))
        .route("/api/guardrails/opa", get(opa_policies))
        .route("/api/ai/chat", post(ai::chat))
        .route("/api/ai/predictions", get(ai::predictions))
        .route("/api/remediation/plans", get(remediation::plans))
        .route("/api/remediation/generate-code", post(remediation::generate_code))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let availability = state.providers.availability();
    Json(json!({
        "status": "healthy",
        "version": state.settings.version(),
        "timestamp": Utc::now(),
        "services": {
            "api": "operational",
            "aws_connection": if availability.aws_connector { "connected" } else { "demo_mode" },
            "claude_ai": if availability.predictions { "available" } else { "not_configured" },
        },
    }))
}

async fn get_dashboard(State(state): State<AppState>) -> Json<dashboard::DashboardData> {
    Json(dashboard::dashboard(&mut state.demo.rng(), Utc::now()))
}

async fn compliance_score(State(state): State<AppState>) -> Json<ComplianceScore> {
    Json(compliance::compliance_scores(&mut state.demo.rng(), Utc::now()))
}

async fn compliance_frameworks(State(state): State<AppState>) -> Json<Value> {
    let frameworks: Vec<FrameworkStatus> = compliance::framework_statuses(&mut state.demo.rng(), Utc::now());
    Json(json!({"frameworks": frameworks}))
}

async fn scp_policies() -> Json<Value> {
    Json(json!({"policies": guardrails::scp_policies()}))
}

async fn opa_policies() -> Json<Value> {
    Json(json!({"policies": guardrails::opa_policies()}))
}
