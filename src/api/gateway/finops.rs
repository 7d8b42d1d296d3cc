use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use crate::api::AppState;
use crate::demo::finops;
use crate::models::CostOverview;

pub async fn overview(State(state): State<AppState>) -> Json<CostOverview> {
    Json(finops::cost_overview(&mut state.demo.rng(), Utc::now()))
}

pub async fn by_service(State(state): State<AppState>) -> Json<Value> {
    Json(json!({"services": finops::service_costs(&mut state.demo.rng())}))
}

pub async fn by_account(State(state): State<AppState>) -> Json<Value> {
    Json(json!({"accounts": finops::account_costs(&mut state.demo.rng(), 30)}))
}

pub async fn savings() -> Json<Value> {
    Json(json!({"recommendations": finops::savings_recommendations()}))
}

pub async fn anomalies(State(state): State<AppState>) -> Json<Value> {
    Json(json!({"anomalies": finops::cost_anomalies(&mut state.demo.rng(), Utc::now())}))
}

pub async fn budgets(State(state): State<AppState>) -> Json<Value> {
    Json(json!({"budgets": finops::budgets(&mut state.demo.rng())}))
}
