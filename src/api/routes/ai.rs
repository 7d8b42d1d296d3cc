use axum::extract::{Query, State};
use axum::Json;
use serde_json::json;
use crate::api::models::{PredictionQuery, PredictionRequest, PromptRequest};
use crate::api::{ApiResponse, AppState};
use crate::demo::{assistant, standalone};
use crate::models::{AssistantReply, ChatMessage};
use crate::providers::{predict, PredictionKind};

pub async fn predictions(Query(query): Query<PredictionQuery>) -> ApiResponse {
    ApiResponse::ok(standalone::filter_by_label(
        standalone::predictions(),
        "type",
        query.kind.as_deref(),
    ))
}

pub async fn generate_prediction(
    State(state): State<AppState>,
    Json(req): Json<PredictionRequest>,
) -> ApiResponse {
    let Some(provider) = &state.providers.predictions else {
        return ApiResponse::ok(standalone::filter_by_label(
            standalone::predictions(),
            "type",
            Some(&req.kind),
        ));
    };

    match PredictionKind::parse(&req.kind) {
        Some(kind) => ApiResponse::from_result(
            predict(provider.as_ref(), kind, req.context.as_ref()).await,
            "ai.generate_prediction",
        ),
        None => ApiResponse::ok(json!({"message": "Unknown prediction type"})),
    }
}

pub async fn chat(State(state): State<AppState>, Json(req): Json<PromptRequest>) -> ApiResponse {
    if let Some(provider) = &state.providers.predictions {
        let context = req.context.as_ref().map(|c| c.to_string());
        let result = provider
            .chat(&[ChatMessage::user(&req.message)], context.as_deref())
            .await
            .map(AssistantReply::new);
        return ApiResponse::from_result(result, "ai.chat");
    }
    ApiResponse::ok(AssistantReply::new(assistant::canned_reply(&req.message)))
}

pub async fn alerts() -> ApiResponse {
    ApiResponse::ok(standalone::alerts())
}
