use axum::extract::{Query, State};
use crate::api::models::{AnomalyQuery, DateRangeQuery, ServiceCostQuery};
use crate::api::{ApiResponse, AppState};
use crate::demo::standalone;
use tracing::debug;

pub async fn overview(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> ApiResponse {
    debug!(start = ?range.start_date, end = ?range.end_date, "Cost overview requested");
    if let Some(finops) = &state.providers.finops {
        return ApiResponse::from_result(finops.cost_overview().await, "finops.overview");
    }
    ApiResponse::ok(standalone::cost_summary())
}

pub async fn by_service(Query(query): Query<ServiceCostQuery>) -> ApiResponse {
    debug!(start = ?query.start_date, end = ?query.end_date, "Cost by service requested");
    let services: Vec<_> = standalone::service_costs()
        .into_iter()
        .take(query.limit.unwrap_or(10))
        .collect();
    ApiResponse::ok(services)
}

pub async fn by_account(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> ApiResponse {
    debug!(start = ?range.start_date, end = ?range.end_date, "Cost by account requested");
    if let Some(finops) = &state.providers.finops {
        return ApiResponse::from_result(finops.cost_by_account().await, "finops.by_account");
    }
    ApiResponse::ok(standalone::account_costs())
}

pub async fn recommendations(State(state): State<AppState>) -> ApiResponse {
    if let Some(finops) = &state.providers.finops {
        return ApiResponse::from_result(finops.savings_recommendations().await, "finops.recommendations");
    }
    ApiResponse::ok(standalone::recommendations())
}

pub async fn anomalies(
    State(state): State<AppState>,
    Query(query): Query<AnomalyQuery>,
) -> ApiResponse {
    if let Some(finops) = &state.providers.finops {
        return ApiResponse::from_result(finops.cost_anomalies().await, "finops.anomalies");
    }
    let mut anomalies = standalone::filter_by_label(standalone::anomalies(), "status", query.status.as_deref());
    anomalies.truncate(query.limit.unwrap_or(10));
    ApiResponse::ok(anomalies)
}

pub async fn budgets(State(state): State<AppState>) -> ApiResponse {
    if let Some(finops) = &state.providers.finops {
        return ApiResponse::from_result(finops.budget_status().await, "finops.budgets");
    }
    ApiResponse::ok(standalone::budgets())
}

pub async fn forecast(State(state): State<AppState>) -> ApiResponse {
    if let Some(finops) = &state.providers.finops {
        return ApiResponse::from_result(finops.cost_forecast().await, "finops.forecast");
    }
    ApiResponse::ok(standalone::forecast())
}
