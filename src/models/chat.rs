use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: &str) -> Self {
        Self { role: "user".to_string(), content: content.to_string() }
    }
}

/// Reply of the gateway chat endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    pub tokens_used: usize,
}

impl ChatResponse {
    /// Token usage is estimated as twice the reply's word count.
    pub fn estimate(response: String) -> Self {
        let tokens_used = response.split_whitespace().count() * 2;
        Self { response, tokens_used }
    }
}

/// Assistant turn as returned by the standalone chat endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantReply {
    pub id: String,
    pub role: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl AssistantReply {
    pub fn new(content: String) -> Self {
        Self {
            id: format!("msg-{}", uuid::Uuid::new_v4().simple()),
            role: "assistant".to_string(),
            content,
            timestamp: Utc::now(),
        }
    }
}
