use axum::extract::{Query, State};
use crate::api::envelope::EnvelopeError;
use crate::api::models::{bounded_limit, FindingsQuery, SecurityHubQuery, ThreatQuery};
use crate::api::{ApiResponse, AppState};
use crate::demo::standalone;
use tracing::debug;

const SECURITY_HUB_MAX_LIMIT: usize = 500;
const DETECTOR_MAX_LIMIT: usize = 200;

pub async fn security_hub(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<ApiResponse, EnvelopeError> {
    let query = SecurityHubQuery::from_pairs(pairs)?;
    let limit = bounded_limit(query.limit, 100, SECURITY_HUB_MAX_LIMIT)?;
    debug!(severity = ?query.severity, status = ?query.status, limit, "Security Hub summary requested");

    if let Some(connector) = &state.providers.security {
        return Ok(ApiResponse::from_result(connector.security_hub_summary().await, "security.security_hub"));
    }
    Ok(ApiResponse::ok(standalone::security_hub_summary()))
}

pub async fn guardduty(Query(query): Query<ThreatQuery>) -> Result<ApiResponse, EnvelopeError> {
    let limit = bounded_limit(query.limit, 50, DETECTOR_MAX_LIMIT)?;
    let findings: Vec<_> = standalone::guardduty_findings()
        .into_iter()
        .filter(|f| query.severity.map_or(true, |s| f["severity"].as_i64() == Some(s)))
        .take(limit)
        .collect();
    Ok(ApiResponse::ok(findings))
}

pub async fn inspector(Query(query): Query<FindingsQuery>) -> Result<ApiResponse, EnvelopeError> {
    let limit = bounded_limit(query.limit, 50, DETECTOR_MAX_LIMIT)?;
    let mut findings = standalone::filter_by_label(
        standalone::inspector_findings(),
        "severity",
        query.severity.as_deref(),
    );
    findings.truncate(limit);
    Ok(ApiResponse::ok(findings))
}

pub async fn config_compliance() -> ApiResponse {
    ApiResponse::ok(standalone::config_compliance())
}
