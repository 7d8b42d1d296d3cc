use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use crate::errors::CanvasError;

impl CanvasError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CanvasError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CanvasError::Provider(_) | CanvasError::Network(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CanvasError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(json!({"error": self.to_string()}))).into_response()
    }
}
