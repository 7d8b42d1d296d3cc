use serde::Deserialize;
use serde_json::Value;
use crate::errors::CanvasError;
use crate::models::ChatMessage;

/// Apply a default and reject values above the route's cap.
pub fn bounded_limit(requested: Option<usize>, default: usize, max: usize) -> Result<usize, CanvasError> {
    let limit = requested.unwrap_or(default);
    if limit > max {
        return Err(CanvasError::Validation(format!(
            "limit must be less than or equal to {} (got {})",
            max, limit
        )));
    }
    Ok(limit)
}

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    pub demo_mode: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DateRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FindingsQuery {
    pub severity: Option<String>,
    pub status: Option<String>,
    pub limit: Option<usize>,
}

/// Security Hub filters. `severity` may repeat (`?severity=HIGH&severity=CRITICAL`),
/// so it is collected from the raw key/value pairs.
#[derive(Debug, Default, PartialEq)]
pub struct SecurityHubQuery {
    pub severity: Vec<String>,
    pub status: Option<String>,
    pub limit: Option<usize>,
}

impl SecurityHubQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, CanvasError> {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "severity" => query.severity.push(value),
                "status" => query.status = Some(value),
                "limit" => {
                    let limit = value.trim().parse().map_err(|_| {
                        CanvasError::Validation(format!("limit must be a non-negative integer (got '{}')", value))
                    })?;
                    query.limit = Some(limit);
                }
                _ => {}
            }
        }
        Ok(query)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ThreatQuery {
    pub severity: Option<i64>,
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ServiceCostQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnomalyQuery {
    pub status: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PredictionQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AccountQuery {
    pub environment: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateCodeQuery {
    pub finding_id: String,
    pub language: Option<String>,
}

/// Standalone chat body: one user message.
#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub message: String,
    pub context: Option<Value>,
}

/// Gateway chat body: the whole conversation.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub context: Option<String>,
}

impl ChatRequest {
    /// Content of the newest message, empty when there is none.
    pub fn latest_message(&self) -> &str {
        self.messages.last().map(|m| m.content.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Deserialize)]
pub struct PredictionRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub context: Option<Value>,
}
