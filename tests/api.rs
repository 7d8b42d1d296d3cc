use std::sync::Arc;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::StatusCode;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use compliance_canvas::api::{build_router, AppState};
use compliance_canvas::config::Settings;
use compliance_canvas::errors::CanvasError;
use compliance_canvas::models::ChatMessage;
use compliance_canvas::providers::{FinOpsProvider, PredictionProvider, Providers};

fn create_test_state() -> AppState {
    AppState::new(Settings::default(), Providers::default())
}

fn app(state: &AppState) -> axum::Router {
    build_router(state.clone()).unwrap()
}

fn make_request(method: &str, uri: &str, body: Option<Value>) -> axum::http::Request<Body> {
    let builder = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    match body {
        Some(b) => builder.body(Body::from(serde_json::to_string(&b).unwrap())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn response_json(response: axum::http::Response<Body>) -> Value {
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        panic!("Empty response body. Status: {}, Headers: {:?}", parts.status, parts.headers);
    }
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("JSON parse error: {}. Body: {:?}", e, String::from_utf8_lossy(&bytes)))
}

async fn get(state: &AppState, uri: &str) -> (StatusCode, Value) {
    let response = app(state).oneshot(make_request("GET", uri, None)).await.unwrap();
    let status = response.status();
    (status, response_json(response).await)
}

fn assert_success(body: &Value) {
    assert_eq!(body["success"], true, "body: {}", body);
    assert!(body.get("data").is_some());
    assert!(body.get("error").is_none());
    assert!(body["timestamp"].is_string());
}

struct FailingFinOps;

#[async_trait]
impl FinOpsProvider for FailingFinOps {
    async fn cost_overview(&self) -> Result<Value, CanvasError> {
        Err(CanvasError::Provider("Cost Explorer unavailable".into()))
    }
    async fn cost_by_account(&self) -> Result<Value, CanvasError> {
        Ok(json!([{"accountId": "111111111111", "cost": 42}]))
    }
    async fn savings_recommendations(&self) -> Result<Value, CanvasError> {
        Err(CanvasError::Provider("Cost Explorer unavailable".into()))
    }
    async fn cost_anomalies(&self) -> Result<Value, CanvasError> {
        Err(CanvasError::Provider("Cost Explorer unavailable".into()))
    }
    async fn budget_status(&self) -> Result<Value, CanvasError> {
        Err(CanvasError::Provider("Cost Explorer unavailable".into()))
    }
    async fn cost_forecast(&self) -> Result<Value, CanvasError> {
        Err(CanvasError::Provider("Cost Explorer unavailable".into()))
    }
    fn provider_name(&self) -> &str {
        "failing"
    }
}

struct EchoPredictions;

#[async_trait]
impl PredictionProvider for EchoPredictions {
    async fn predict_monthly_cost(&self, _context: Option<&Value>) -> Result<Value, CanvasError> {
        Ok(json!({"predicted_cost": 150000}))
    }
    async fn predict_security_risks(&self, _context: Option<&Value>) -> Result<Value, CanvasError> {
        Err(CanvasError::Provider("model overloaded".into()))
    }
    async fn predict_compliance_drift(&self, _context: Option<&Value>) -> Result<Value, CanvasError> {
        Ok(json!({"drift": []}))
    }
    async fn chat(&self, messages: &[ChatMessage], _context: Option<&str>) -> Result<String, CanvasError> {
        Ok(format!("echo: {}", messages.last().map(|m| m.content.as_str()).unwrap_or("")))
    }
    fn provider_name(&self) -> &str {
        "echo"
    }
}

#[tokio::test]
async fn test_root_endpoint() {
    let state = create_test_state();
    let (status, body) = get(&state, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_success(&body);
    assert_eq!(body["data"]["message"], "Cloud Compliance Canvas API");
    assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_reports_unavailable_modules() {
    let state = create_test_state();
    let (status, body) = get(&state, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_success(&body);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["modules"]["finops"], false);
    assert_eq!(body["data"]["modules"]["predictions"], false);
    assert_eq!(body["data"]["modules"]["aws_connector"], false);
}

#[tokio::test]
async fn test_dashboard_defaults_to_demo() {
    let state = create_test_state();
    let (_, body) = get(&state, "/api/dashboard").await;
    assert_success(&body);
    assert_eq!(body["message"], "Demo data returned");
    assert_eq!(body["data"]["complianceScore"], 87);
    assert_eq!(body["data"]["findings"]["critical"], 23);
}

#[tokio::test]
async fn test_dashboard_live_without_providers_uses_fallbacks() {
    let state = create_test_state();
    let (_, body) = get(&state, "/api/dashboard?demo_mode=false").await;
    assert_success(&body);
    assert!(body.get("message").is_none());
    assert_eq!(body["data"]["costOverview"]["currentMonthCost"], 127432.0);
}

#[tokio::test]
async fn test_finops_overview_demo_summary() {
    let state = create_test_state();
    let (_, body) = get(&state, "/api/finops/overview").await;
    assert_success(&body);
    assert_eq!(body["data"]["currentMonthCost"], 127432.0);
    assert_eq!(body["data"]["budgetUsedPercent"], 64.0);
}

#[tokio::test]
async fn test_provider_failure_returns_failure_envelope() {
    let providers = Providers {
        finops: Some(Arc::new(FailingFinOps)),
        ..Default::default()
    };
    let state = AppState::new(Settings::default(), providers);

    let (status, body) = get(&state, "/api/finops/overview").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Cost Explorer unavailable");
    assert!(body.get("data").is_none());

    let (_, body) = get(&state, "/api/finops/by-account").await;
    assert_success(&body);
    assert_eq!(body["data"][0]["cost"], 42);
}

#[tokio::test]
async fn test_health_reports_configured_provider() {
    let providers = Providers {
        finops: Some(Arc::new(FailingFinOps)),
        ..Default::default()
    };
    let state = AppState::new(Settings::default(), providers);
    let (_, body) = get(&state, "/health").await;
    assert_eq!(body["data"]["modules"]["finops"], true);
}

#[tokio::test]
async fn test_security_hub_limit_over_cap_rejected() {
    let state = create_test_state();
    let (status, body) = get(&state, "/api/security/security-hub?limit=501").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("limit"));

    let (status, body) = get(&state, "/api/security/security-hub?limit=500").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalFindings"], 1247);
}

#[tokio::test]
async fn test_guardduty_severity_filter_and_cap() {
    let state = create_test_state();
    let (_, body) = get(&state, "/api/security/guardduty?severity=8").await;
    assert_success(&body);
    let findings = body["data"].as_array().unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["id"], "gd-001");

    let (status, _) = get(&state, "/api/security/guardduty?limit=201").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_inspector_filter_is_case_insensitive() {
    let state = create_test_state();
    let (_, body) = get(&state, "/api/security/inspector?severity=medium").await;
    let findings = body["data"].as_array().unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["title"], "CVE-2024-5678");
}

#[tokio::test]
async fn test_by_service_respects_limit() {
    let state = create_test_state();
    let (_, body) = get(&state, "/api/finops/by-service?limit=1").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_anomaly_status_filter() {
    let state = create_test_state();
    let (_, body) = get(&state, "/api/finops/anomalies?status=open").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (_, body) = get(&state, "/api/finops/anomalies?status=RESOLVED").await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_predictions_type_filter() {
    let state = create_test_state();
    let (_, body) = get(&state, "/api/ai/predictions?type=security").await;
    let predictions = body["data"].as_array().unwrap();
    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0]["type"], "security");
}

#[tokio::test]
async fn test_chat_stub_detects_cost_topic() {
    let state = create_test_state();
    let req = make_request("POST", "/api/ai/chat", Some(json!({"message": "How can I reduce my COST?"})));
    let response = app(&state).oneshot(req).await.unwrap();
    let body = response_json(response).await;
    assert_success(&body);
    assert_eq!(body["data"]["role"], "assistant");
    assert!(body["data"]["id"].as_str().unwrap().starts_with("msg-"));
    assert!(body["data"]["content"].as_str().unwrap().contains("Savings Plans"));
}

#[tokio::test]
async fn test_chat_uses_configured_provider() {
    let providers = Providers {
        predictions: Some(Arc::new(EchoPredictions)),
        ..Default::default()
    };
    let state = AppState::new(Settings::default(), providers);
    let req = make_request("POST", "/api/ai/chat", Some(json!({"message": "hello"})));
    let body = response_json(app(&state).oneshot(req).await.unwrap()).await;
    assert_eq!(body["data"]["content"], "echo: hello");
}

#[tokio::test]
async fn test_generate_prediction_with_provider() {
    let providers = Providers {
        predictions: Some(Arc::new(EchoPredictions)),
        ..Default::default()
    };
    let state = AppState::new(Settings::default(), providers);

    let req = make_request("POST", "/api/ai/predictions/generate", Some(json!({"type": "cost"})));
    let body = response_json(app(&state).oneshot(req).await.unwrap()).await;
    assert_success(&body);
    assert_eq!(body["data"]["predicted_cost"], 150000);

    let req = make_request("POST", "/api/ai/predictions/generate", Some(json!({"type": "security"})));
    let body = response_json(app(&state).oneshot(req).await.unwrap()).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "model overloaded");

    let req = make_request("POST", "/api/ai/predictions/generate", Some(json!({"type": "weather"})));
    let body = response_json(app(&state).oneshot(req).await.unwrap()).await;
    assert_success(&body);
    assert_eq!(body["data"]["message"], "Unknown prediction type");
}

#[tokio::test]
async fn test_generate_prediction_without_provider_filters_demo() {
    let state = create_test_state();
    let req = make_request("POST", "/api/ai/predictions/generate", Some(json!({"type": "cost"})));
    let body = response_json(app(&state).oneshot(req).await.unwrap()).await;
    assert_success(&body);
    let predictions = body["data"].as_array().unwrap();
    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0]["type"], "cost");
}

fn sorted_keys(value: &Value) -> Vec<&str> {
    let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}

#[tokio::test]
async fn test_static_objects_match_demo_shape() {
    let state = create_test_state();
    let cases: &[(&str, &[&str])] = &[
        ("/api/security/config", &["compliant", "nonCompliant", "notApplicable"]),
        ("/api/finops/forecast", &["confidence", "nextMonth", "trend"]),
        ("/api/guardrails/kics", &["critical", "high", "low", "medium", "totalIssues"]),
        ("/api/compliance/score", &["score"]),
    ];
    for (uri, expected) in cases {
        let (status, body) = get(&state, uri).await;
        assert_eq!(status, StatusCode::OK, "uri: {}", uri);
        assert_success(&body);
        assert_eq!(sorted_keys(&body["data"]), expected.to_vec(), "uri: {}", uri);
    }

    let (_, body) = get(&state, "/api/security/config").await;
    assert_eq!(body["data"]["compliant"], 156);
    let (_, body) = get(&state, "/api/finops/forecast").await;
    assert_eq!(body["data"]["nextMonth"], 185000);
    let (_, body) = get(&state, "/api/guardrails/kics").await;
    assert_eq!(body["data"]["totalIssues"], 23);
    let (_, body) = get(&state, "/api/compliance/score").await;
    assert_eq!(body["data"]["score"], 87);
}

#[tokio::test]
async fn test_static_lists_match_demo_shape() {
    let state = create_test_state();
    let cases: &[(&str, usize, &[&str])] = &[
        ("/api/finops/recommendations", 2, &["monthlySavings", "title", "type"]),
        ("/api/finops/budgets", 1, &["amount", "name", "percentUsed", "spent"]),
        ("/api/ai/alerts", 2, &["id", "priority", "title"]),
        ("/api/compliance/frameworks", 3, &["id", "name", "score"]),
        ("/api/guardrails/scp", 2, &["id", "name", "status"]),
        ("/api/guardrails/opa", 2, &["id", "name", "violations"]),
        ("/api/accounts", 2, &["id", "name", "status"]),
        ("/api/accounts/templates", 2, &["environment", "id", "name"]),
        ("/api/finops/by-account", 2, &["accountId", "accountName", "cost"]),
    ];
    for (uri, len, expected) in cases {
        let (status, body) = get(&state, uri).await;
        assert_eq!(status, StatusCode::OK, "uri: {}", uri);
        assert_success(&body);
        let items = body["data"].as_array().unwrap();
        assert_eq!(items.len(), *len, "uri: {}", uri);
        for item in items {
            assert_eq!(sorted_keys(item), expected.to_vec(), "uri: {}", uri);
        }
    }

    let (_, body) = get(&state, "/api/finops/budgets").await;
    assert_eq!(body["data"][0]["spent"], 127432);
    let (_, body) = get(&state, "/api/finops/recommendations").await;
    assert_eq!(body["data"][0]["type"], "SAVINGS_PLAN");
}

#[tokio::test]
async fn test_security_hub_accepts_repeated_severity() {
    let state = create_test_state();
    let (status, body) = get(&state, "/api/security/security-hub?severity=HIGH&severity=CRITICAL&limit=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_success(&body);
    assert_eq!(
        sorted_keys(&body["data"]),
        ["complianceScore", "critical", "enabledStandards", "high", "informational", "low", "medium", "totalFindings"]
    );
    assert_eq!(body["data"]["enabledStandards"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_security_hub_bad_limit_is_enveloped() {
    let state = create_test_state();
    let (status, body) = get(&state, "/api/security/security-hub?limit=lots").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("limit"));
}

#[tokio::test]
async fn test_cors_allows_glob_origin() {
    let state = create_test_state();
    let req = axum::http::Request::builder()
        .method("GET")
        .uri("/health")
        .header("origin", "https://main.d1abc.amplifyapp.com")
        .body(Body::empty())
        .unwrap();
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "https://main.d1abc.amplifyapp.com"
    );
    assert_eq!(response.headers().get("access-control-allow-credentials").unwrap(), "true");
}

#[tokio::test]
async fn test_cors_rejects_unknown_origin() {
    let state = create_test_state();
    let req = axum::http::Request::builder()
        .method("GET")
        .uri("/health")
        .header("origin", "https://evil.example.com")
        .body(Body::empty())
        .unwrap();
    let response = app(&state).oneshot(req).await.unwrap();
    assert!(response.headers().get("access-control-allow-origin").is_none());
}
