use axum::extract::{Query, State};
use axum::Json;
use serde_json::{json, Value};
use crate::api::models::AccountQuery;
use crate::api::AppState;
use crate::demo::accounts::{self, ProvisionReceipt};
use crate::models::ProvisionRequest;
use tracing::info;

const ORGANIZATION_SIZE: usize = 50;

pub async fn list_accounts(
    State(state): State<AppState>,
    Query(query): Query<AccountQuery>,
) -> Json<Value> {
    let generated = accounts::aws_accounts(&mut state.demo.rng(), ORGANIZATION_SIZE);
    let accounts = accounts::filter_accounts(generated, query.environment.as_deref(), query.status.as_deref());
    Json(json!({"total": accounts.len(), "accounts": accounts}))
}

pub async fn provision(
    State(state): State<AppState>,
    Json(req): Json<ProvisionRequest>,
) -> Json<ProvisionReceipt> {
    let receipt = accounts::provision(&mut state.demo.rng(), req);
    info!(
        request_id = %receipt.request_id,
        name = %receipt.account_details.name,
        environment = %receipt.account_details.environment,
        "Account provisioning requested"
    );
    Json(receipt)
}
