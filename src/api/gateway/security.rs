use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use crate::api::models::{bounded_limit, FindingsQuery, LimitQuery};
use crate::api::AppState;
use crate::demo::security;
use crate::errors::CanvasError;

const MAX_LIMIT: usize = 500;
const DEFAULT_LIMIT: usize = 50;

/// Security Hub findings, generated then filtered by severity and status.
pub async fn findings(
    State(state): State<AppState>,
    Query(query): Query<FindingsQuery>,
) -> Result<Json<Value>, CanvasError> {
    let limit = bounded_limit(query.limit, DEFAULT_LIMIT, MAX_LIMIT)?;
    let generated = security::security_findings(&mut state.demo.rng(), limit, Utc::now());
    let findings = security::filter_findings(generated, query.severity.as_deref(), query.status.as_deref());
    Ok(Json(json!({"total": findings.len(), "findings": findings})))
}

pub async fn guardduty(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Value>, CanvasError> {
    let limit = bounded_limit(query.limit, DEFAULT_LIMIT, MAX_LIMIT)?;
    let findings = security::guardduty_findings(&mut state.demo.rng(), limit, Utc::now());
    Ok(Json(json!({"total": findings.len(), "findings": findings})))
}

pub async fn inspector(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Result<Json<Value>, CanvasError> {
    let limit = bounded_limit(query.limit, DEFAULT_LIMIT, MAX_LIMIT)?;
    let findings = security::inspector_findings(&mut state.demo.rng(), limit, Utc::now());
    Ok(Json(json!({"total": findings.len(), "findings": findings})))
}
