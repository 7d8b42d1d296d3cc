pub mod cors;
pub mod envelope;
pub mod errors;
pub mod gateway;
pub mod models;
pub mod routes;

use std::sync::Arc;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use crate::config::Settings;
use crate::demo::DemoSource;
use crate::errors::CanvasError;
use crate::providers::Providers;

pub use envelope::ApiResponse;
pub use gateway::build_gateway_router;

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub providers: Providers,
    pub demo: DemoSource,
}

impl AppState {
    pub fn new(settings: Settings, providers: Providers) -> Self {
        let demo = DemoSource::new(settings.demo.seed);
        Self {
            settings: Arc::new(settings),
            providers,
            demo,
        }
    }
}

/// State with providers resolved from the settings.
pub fn create_app_state(settings: Settings) -> AppState {
    let providers = Providers::from_settings(&settings);
    AppState::new(settings, providers)
}

/// Router of the standalone (enveloped) surface.
pub fn build_router(state: AppState) -> Result<Router, CanvasError> {
    let cors = cors::cors_layer(&state.settings.allowed_origins)?;

    Ok(Router::new()
        .route("/", get(routes::system::root))
        .route("/health", get(routes::system::health_check))
        .route("/api/dashboard", get(routes::dashboard::get_dashboard))
        .route("/api/security/security-hub", get(routes::security::security_hub))
        .route("/api/security/guardduty", get(routes::security::guardduty))
        .route("/api/security/inspector", get(routes::security::inspector))
        .route("/api/security/config", get(routes::security::config_compliance))
        .route("/api/finops/overview", get(routes::finops::overview))
        .route("/api/finops/by-service", get(routes::finops::by_service))
        .route("/api/finops/by-account", get(routes::finops::by_account))
        .route("/api/finops/recommendations", get(routes::finops::recommendations))
        .route("/api/finops/anomalies", get(routes::finops::anomalies))
        .route("/api/finops/budgets", get(routes::finops::budgets))
        .route("/api/finops/forecast", get(routes::finops::forecast))
        .route("/api/ai/predictions", get(routes::ai::predictions))
        .route("/api/ai/predictions/generate", post(routes::ai::generate_prediction))
        .route("/api/ai/chat", post(routes::ai::chat))
        .route("/api/ai/alerts", get(routes::ai::alerts))
        .route("/api/compliance/frameworks", get(routes::compliance::frameworks))
        .route("/api/compliance/score", get(routes::compliance::score))
        .route("/api/guardrails/scp", get(routes::guardrails::scp))
        .route("/api/guardrails/opa", get(routes::guardrails::opa))
        .route("/api/guardrails/kics", get(routes::guardrails::kics))
        .route("/api/accounts", get(routes::accounts::list_accounts))
        .route("/api/accounts/templates", get(routes::accounts::templates))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}
