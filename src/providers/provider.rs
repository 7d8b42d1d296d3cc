use async_trait::async_trait;
use serde_json::Value;
use crate::errors::CanvasError;
use crate::models::ChatMessage;

/// Cost Explorer / FinOps data source.
#[async_trait]
pub trait FinOpsProvider: Send + Sync {
    async fn cost_overview(&self) -> Result<Value, CanvasError>;

    async fn cost_by_account(&self) -> Result<Value, CanvasError>;

    async fn savings_recommendations(&self) -> Result<Value, CanvasError>;

    async fn cost_anomalies(&self) -> Result<Value, CanvasError>;

    async fn budget_status(&self) -> Result<Value, CanvasError>;

    async fn cost_forecast(&self) -> Result<Value, CanvasError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;
}

/// AI prediction and chat source.
#[async_trait]
pub trait PredictionProvider: Send + Sync {
    async fn predict_monthly_cost(&self, context: Option<&Value>) -> Result<Value, CanvasError>;

    async fn predict_security_risks(&self, context: Option<&Value>) -> Result<Value, CanvasError>;

    async fn predict_compliance_drift(&self, context: Option<&Value>) -> Result<Value, CanvasError>;

    /// Assistant reply to a conversation, newest message last.
    async fn chat(&self, messages: &[ChatMessage], context: Option<&str>) -> Result<String, CanvasError>;

    fn provider_name(&self) -> &str;
}

/// AWS security services connector.
#[async_trait]
pub trait SecurityConnector: Send + Sync {
    /// Security Hub severity counts, totals and enabled standards.
    async fn security_hub_summary(&self) -> Result<Value, CanvasError>;

    fn provider_name(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionKind {
    Cost,
    Security,
    Compliance,
}

impl PredictionKind {
    pub fn parse(kind: &str) -> Option<Self> {
        match kind.trim().to_lowercase().as_str() {
            "cost" => Some(Self::Cost),
            "security" => Some(Self::Security),
            "compliance" => Some(Self::Compliance),
            _ => None,
        }
    }
}

/// Route a prediction request to the matching provider operation.
pub async fn predict(
    provider: &dyn PredictionProvider,
    kind: PredictionKind,
    context: Option<&Value>,
) -> Result<Value, CanvasError> {
    match kind {
        PredictionKind::Cost => provider.predict_monthly_cost(context).await,
        PredictionKind::Security => provider.predict_security_risks(context).await,
        PredictionKind::Compliance => provider.predict_compliance_drift(context).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_kind_parse() {
        assert_eq!(PredictionKind::parse("cost"), Some(PredictionKind::Cost));
        assert_eq!(PredictionKind::parse(" Security "), Some(PredictionKind::Security));
        assert_eq!(PredictionKind::parse("COMPLIANCE"), Some(PredictionKind::Compliance));
        assert_eq!(PredictionKind::parse("capacity"), None);
    }
}
