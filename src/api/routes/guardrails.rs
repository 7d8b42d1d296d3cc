use crate::api::ApiResponse;
use crate::demo::standalone;

pub async fn scp() -> ApiResponse {
    ApiResponse::ok(standalone::scp_policies())
}

pub async fn opa() -> ApiResponse {
    ApiResponse::ok(standalone::opa_policies())
}

pub async fn kics() -> ApiResponse {
    ApiResponse::ok(standalone::kics_results())
}
