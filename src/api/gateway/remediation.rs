use axum::extract::Query;
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use crate::api::models::GenerateCodeQuery;
use crate::demo::remediation::{self, GeneratedCode};

pub async fn plans() -> Json<Value> {
    Json(json!({"plans": remediation::remediation_plans(Utc::now())}))
}

pub async fn generate_code(Query(query): Query<GenerateCodeQuery>) -> Json<GeneratedCode> {
    let language = query.language.as_deref().unwrap_or("terraform");
    Json(GeneratedCode::new(&query.finding_id, language))
}
