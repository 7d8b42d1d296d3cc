use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use crate::errors::CanvasError;
use crate::models::ChatMessage;
use super::provider::PredictionProvider;
use tracing::debug;

const DEFAULT_MODEL: &str = "claude-sonnet-4-5-20250929";
const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

const ASSISTANT_SYSTEM: &str = "You are an AI-powered cloud governance assistant for an AWS organization. \
Help with cost analysis, security findings, compliance gaps and resource optimization. \
Be concise and use markdown.";

const PREDICTION_SYSTEM: &str = "You forecast AWS governance trends. Respond with a single JSON object \
with keys: title, prediction, confidence (0-1), impact (low|medium|high|critical), recommended_action. \
Return ONLY the JSON, no other text.";

/// Predictions and chat backed by the Anthropic Messages API.
pub struct AnthropicPredictions {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl AnthropicPredictions {
    pub fn new(api_key: &str, model: Option<&str>, base_url: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.unwrap_or(DEFAULT_MODEL).to_string(),
            base_url: base_url.unwrap_or(DEFAULT_BASE_URL).trim_end_matches('/').to_string(),
        }
    }

    async fn complete(&self, system: &str, messages: &[ChatMessage]) -> Result<String, CanvasError> {
        let body = json!({
            "model": self.model,
            "max_tokens": 2048,
            "system": system,
            "messages": messages,
        });

        let resp = self.client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| CanvasError::Network(format!("Anthropic API request failed: {}", e)))?;

        let status = resp.status();
        if status == 429 {
            return Err(CanvasError::Provider("Anthropic rate limit exceeded".into()));
        }
        if status == 401 {
            return Err(CanvasError::Provider("Invalid Anthropic API key".into()));
        }

        let data: Value = resp.json().await
            .map_err(|e| CanvasError::Provider(format!("Failed to parse Anthropic response: {}", e)))?;

        if let Some(error) = data.get("error") {
            let msg = error["message"].as_str().unwrap_or("Unknown error");
            return Err(CanvasError::Provider(msg.to_string()));
        }

        let content = data["content"][0]["text"].as_str()
            .ok_or_else(|| CanvasError::Provider("No content in Anthropic response".into()))?
            .to_string();

        debug!(
            model = %self.model,
            input_tokens = data["usage"]["input_tokens"].as_u64(),
            output_tokens = data["usage"]["output_tokens"].as_u64(),
            "Anthropic completion"
        );
        Ok(content)
    }

    async fn forecast(&self, topic: &str, context: Option<&Value>) -> Result<Value, CanvasError> {
        let mut prompt = format!("Forecast {} for the next 30 days.", topic);
        if let Some(ctx) = context {
            prompt.push_str(&format!("\n\nCurrent data:\n```json\n{}\n```", ctx));
        }
        let content = self.complete(PREDICTION_SYSTEM, &[ChatMessage::user(&prompt)]).await?;
        extract_json(&content)
    }
}

#[async_trait]
impl PredictionProvider for AnthropicPredictions {
    async fn predict_monthly_cost(&self, context: Option<&Value>) -> Result<Value, CanvasError> {
        self.forecast("the monthly AWS bill", context).await
    }

    async fn predict_security_risks(&self, context: Option<&Value>) -> Result<Value, CanvasError> {
        self.forecast("security risks and likely new critical findings", context).await
    }

    async fn predict_compliance_drift(&self, context: Option<&Value>) -> Result<Value, CanvasError> {
        self.forecast("compliance drift across SOC 2, PCI-DSS, HIPAA and CIS AWS", context).await
    }

    async fn chat(&self, messages: &[ChatMessage], context: Option<&str>) -> Result<String, CanvasError> {
        let system = match context {
            Some(ctx) if !ctx.trim().is_empty() => format!("{}\n\nContext:\n{}", ASSISTANT_SYSTEM, ctx),
            _ => ASSISTANT_SYSTEM.to_string(),
        };
        self.complete(&system, messages).await
    }

    fn provider_name(&self) -> &str { "anthropic" }
}

fn extract_json(text: &str) -> Result<Value, CanvasError> {
    if let Ok(v) = serde_json::from_str::<Value>(text) {
        return Ok(v);
    }
    if let Some(start) = text.find("```json") {
        let rest = &text[start + 7..];
        if let Some(end) = rest.find("```") {
            return serde_json::from_str(rest[..end].trim())
                .map_err(|e| CanvasError::Provider(format!("Invalid JSON in code block: {}", e)));
        }
    }
    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if start < end {
            return serde_json::from_str(&text[start..=end])
                .map_err(|e| CanvasError::Provider(format!("Invalid JSON extraction: {}", e)));
        }
    }
    Err(CanvasError::Provider("No valid JSON found in model response".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::{HeaderMap, StatusCode}, routing::post, Json, Router};

    async fn spawn_messages_api(reply: &'static str) -> String {
        let app = Router::new().route(
            "/v1/messages",
            post(move |headers: HeaderMap, Json(body): Json<Value>| async move {
                if headers.get("x-api-key").and_then(|v| v.to_str().ok()) != Some("sk-test") {
                    return (StatusCode::UNAUTHORIZED, Json(json!({"error": {"message": "bad key"}})));
                }
                let last = body["messages"].as_array().and_then(|m| m.last()).cloned().unwrap_or_default();
                (StatusCode::OK, Json(json!({
                    "content": [{"type": "text", "text": reply.replace("{last}", last["content"].as_str().unwrap_or(""))}],
                    "usage": {"input_tokens": 10, "output_tokens": 20},
                })))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[test]
    fn test_extract_json_variants() {
        assert_eq!(extract_json("{\"a\": 1}").unwrap()["a"], 1);
        assert_eq!(extract_json("Here:\n```json\n{\"a\": 2}\n```").unwrap()["a"], 2);
        assert_eq!(extract_json("Result {\"a\": 3} done").unwrap()["a"], 3);
        assert!(extract_json("no json here").is_err());
    }

    #[tokio::test]
    async fn test_chat_returns_text() {
        let base = spawn_messages_api("echo: {last}").await;
        let provider = AnthropicPredictions::new("sk-test", None, Some(&base));
        let reply = provider
            .chat(&[ChatMessage::user("hi"), ChatMessage { role: "assistant".into(), content: "hello".into() }, ChatMessage::user("costs?")], None)
            .await
            .unwrap();
        assert_eq!(reply, "echo: costs?");
    }

    #[tokio::test]
    async fn test_prediction_parses_json_reply() {
        let base = spawn_messages_api("```json\n{\"title\": \"Cost\", \"confidence\": 0.8}\n```").await;
        let provider = AnthropicPredictions::new("sk-test", None, Some(&base));
        let prediction = provider.predict_monthly_cost(None).await.unwrap();
        assert_eq!(prediction["title"], "Cost");
    }

    #[tokio::test]
    async fn test_invalid_key_is_provider_error() {
        let base = spawn_messages_api("unused").await;
        let provider = AnthropicPredictions::new("sk-wrong", None, Some(&base));
        let err = provider.chat(&[ChatMessage::user("hi")], None).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid Anthropic API key");
    }
}
