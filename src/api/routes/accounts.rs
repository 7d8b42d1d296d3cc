use crate::api::ApiResponse;
use crate::demo::standalone;

pub async fn list_accounts() -> ApiResponse {
    ApiResponse::ok(standalone::accounts())
}

pub async fn templates() -> ApiResponse {
    ApiResponse::ok(standalone::account_templates())
}
