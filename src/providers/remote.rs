use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use crate::errors::CanvasError;
use super::provider::{FinOpsProvider, SecurityConnector};
use tracing::debug;

/// JSON-over-HTTP data service reached by base URL.
#[derive(Debug, Clone)]
pub struct RemoteJson {
    client: Client,
    base_url: String,
    service: &'static str,
}

impl RemoteJson {
    pub fn new(service: &'static str, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, path: &str) -> Result<Value, CanvasError> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!(service = self.service, %url, "Fetching provider data");

        let resp = self.client
            .get(&url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| CanvasError::Network(format!("{} request failed: {}", self.service, e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CanvasError::Provider(format!(
                "{} service returned {} for /{}",
                self.service,
                status.as_u16(),
                path.trim_start_matches('/')
            )));
        }

        resp.json::<Value>()
            .await
            .map_err(|e| CanvasError::Provider(format!("{} returned invalid JSON: {}", self.service, e)))
    }
}

pub struct RemoteFinOps {
    remote: RemoteJson,
}

impl RemoteFinOps {
    pub fn new(base_url: &str) -> Self {
        Self { remote: RemoteJson::new("finops", base_url) }
    }
}

#[async_trait]
impl FinOpsProvider for RemoteFinOps {
    async fn cost_overview(&self) -> Result<Value, CanvasError> {
        self.remote.fetch("overview").await
    }

    async fn cost_by_account(&self) -> Result<Value, CanvasError> {
        self.remote.fetch("by-account").await
    }

    async fn savings_recommendations(&self) -> Result<Value, CanvasError> {
        self.remote.fetch("recommendations").await
    }

    async fn cost_anomalies(&self) -> Result<Value, CanvasError> {
        self.remote.fetch("anomalies").await
    }

    async fn budget_status(&self) -> Result<Value, CanvasError> {
        self.remote.fetch("budgets").await
    }

    async fn cost_forecast(&self) -> Result<Value, CanvasError> {
        self.remote.fetch("forecast").await
    }

    fn provider_name(&self) -> &str { self.remote.base_url() }
}

pub struct RemoteSecurity {
    remote: RemoteJson,
}

impl RemoteSecurity {
    pub fn new(base_url: &str) -> Self {
        Self { remote: RemoteJson::new("security", base_url) }
    }
}

#[async_trait]
impl SecurityConnector for RemoteSecurity {
    async fn security_hub_summary(&self) -> Result<Value, CanvasError> {
        self.remote.fetch("security-hub/summary").await
    }

    fn provider_name(&self) -> &str { self.remote.base_url() }
}
