use serde_json::json;
use crate::api::ApiResponse;
use crate::demo::standalone;

pub async fn frameworks() -> ApiResponse {
    ApiResponse::ok(standalone::frameworks())
}

pub async fn score() -> ApiResponse {
    ApiResponse::ok(json!({"score": standalone::COMPLIANCE_SCORE}))
}
