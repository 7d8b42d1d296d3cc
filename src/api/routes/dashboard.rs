use axum::extract::{Query, State};
use serde_json::{json, Value};
use crate::api::models::DashboardQuery;
use crate::api::{ApiResponse, AppState};
use crate::demo::standalone;
use crate::errors::CanvasError;

pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> ApiResponse {
    if query.demo_mode.unwrap_or(true) {
        return ApiResponse::ok(standalone::dashboard()).with_message("Demo data returned");
    }
    ApiResponse::from_result(live_dashboard(&state).await, "dashboard")
}

/// Aggregate the dashboard from whichever providers are configured.
async fn live_dashboard(state: &AppState) -> Result<Value, CanvasError> {
    let (findings, cost_overview) = futures::try_join!(findings_summary(state), cost_overview(state))?;
    Ok(json!({
        "keyMetrics": standalone::key_metrics(),
        "findings": findings,
        "complianceScore": standalone::COMPLIANCE_SCORE,
        "costOverview": cost_overview,
    }))
}

async fn findings_summary(state: &AppState) -> Result<Value, CanvasError> {
    match &state.providers.security {
        Some(connector) => connector.security_hub_summary().await,
        None => Ok(standalone::findings_summary()),
    }
}

async fn cost_overview(state: &AppState) -> Result<Value, CanvasError> {
    match &state.providers.finops {
        Some(finops) => finops.cost_overview().await,
        None => Ok(serde_json::to_value(standalone::cost_summary())?),
    }
}
