pub mod anthropic;
pub mod provider;
pub mod remote;

pub use provider::{predict, FinOpsProvider, PredictionKind, PredictionProvider, SecurityConnector};

use std::sync::Arc;
use serde::Serialize;
use crate::config::Settings;
use anthropic::AnthropicPredictions;
use remote::{RemoteFinOps, RemoteSecurity};
use tracing::{info, warn};

/// External data sources, resolved once at startup. `None` means demo data.
#[derive(Clone, Default)]
pub struct Providers {
    pub finops: Option<Arc<dyn FinOpsProvider>>,
    pub predictions: Option<Arc<dyn PredictionProvider>>,
    pub security: Option<Arc<dyn SecurityConnector>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleAvailability {
    pub finops: bool,
    pub predictions: bool,
    pub aws_connector: bool,
}

impl Providers {
    pub fn from_settings(settings: &Settings) -> Self {
        let finops = settings.providers.finops_url.as_deref().map(|url| {
            let provider: Arc<dyn FinOpsProvider> = Arc::new(RemoteFinOps::new(url));
            info!(provider = provider.provider_name(), "FinOps provider configured");
            provider
        });
        if finops.is_none() {
            warn!("FinOps module not available, serving demo cost data");
        }

        let predictions = match settings.claude.api_key.as_deref() {
            Some(key) if settings.claude_configured() => {
                let provider: Arc<dyn PredictionProvider> = Arc::new(AnthropicPredictions::new(
                    key,
                    settings.claude.model.as_deref(),
                    settings.claude.base_url.as_deref(),
                ));
                info!(provider = provider.provider_name(), "Predictions provider configured");
                Some(provider)
            }
            _ => {
                warn!("Predictions module not available, serving canned AI responses");
                None
            }
        };

        let security = settings.providers.security_url.as_deref().map(|url| {
            let connector: Arc<dyn SecurityConnector> = Arc::new(RemoteSecurity::new(url));
            info!(provider = connector.provider_name(), "AWS security connector configured");
            connector
        });
        if security.is_none() {
            warn!("AWS connector not available, serving demo security data");
        }

        Self { finops, predictions, security }
    }

    pub fn availability(&self) -> ModuleAvailability {
        ModuleAvailability {
            finops: self.finops.is_some(),
            predictions: self.predictions.is_some(),
            aws_connector: self.security.is_some(),
        }
    }
}
