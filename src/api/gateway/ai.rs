use axum::extract::State;
use axum::Json;
use chrono::Utc;
use crate::api::models::ChatRequest;
use crate::api::AppState;
use crate::demo::assistant::{self, PredictionSet};
use crate::errors::CanvasError;
use crate::models::ChatResponse;

pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, CanvasError> {
    let response = match &state.providers.predictions {
        Some(provider) => provider.chat(&req.messages, req.context.as_deref()).await?,
        None => assistant::canned_reply(req.latest_message()),
    };
    Ok(Json(ChatResponse::estimate(response)))
}

pub async fn predictions() -> Json<PredictionSet> {
    Json(assistant::ai_predictions(Utc::now()))
}
