use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::errors::CanvasError;
use tracing::warn;

/// Uniform wrapper of every standalone-surface response.
///
/// `success == true` carries `data` and never `error`; `success == false`
/// carries `error` and never `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ApiResponse {
    pub fn ok<T: Serialize>(data: T) -> Self {
        match serde_json::to_value(data) {
            Ok(data) => Self {
                success: true,
                data: Some(data),
                error: None,
                message: None,
                timestamp: Utc::now(),
            },
            Err(e) => Self::failure(CanvasError::from(e).to_string()),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    /// Wrap a provider call: its value on success, its message on failure.
    pub fn from_result<T: Serialize>(result: Result<T, CanvasError>, operation: &str) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => {
                warn!(operation, error = %e, "Provider call failed");
                Self::failure(e.to_string())
            }
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Request rejected before any data was produced, rendered as a failure envelope.
#[derive(Debug)]
pub struct EnvelopeError(pub CanvasError);

impl From<CanvasError> for EnvelopeError {
    fn from(err: CanvasError) -> Self {
        Self(err)
    }
}

impl IntoResponse for EnvelopeError {
    fn into_response(self) -> Response {
        (self.0.status_code(), Json(ApiResponse::failure(self.0.to_string()))).into_response()
    }
}
