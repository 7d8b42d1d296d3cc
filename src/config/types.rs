use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "Cloud Compliance Canvas API";
pub const DEFAULT_ALLOWED_ORIGINS: &str =
    "http://localhost:5173,http://localhost:3000,https://*.amplifyapp.com";

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub debug: bool,
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub aws_region: String,
    pub claude: ClaudeConfig,
    pub providers: ProvidersConfig,
    pub demo: DemoConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            host: "0.0.0.0".to_string(),
            port: 8000,
            allowed_origins: parse_origins(DEFAULT_ALLOWED_ORIGINS),
            aws_region: "us-east-1".to_string(),
            claude: ClaudeConfig::default(),
            providers: ProvidersConfig::default(),
            demo: DemoConfig::default(),
        }
    }
}

impl Settings {
    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    pub fn claude_configured(&self) -> bool {
        self.claude.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClaudeConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

/// Base URLs of external data services. Unset means "serve demo data".
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProvidersConfig {
    pub finops_url: Option<String>,
    pub security_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DemoConfig {
    /// Fixed seed for randomized demo payloads.
    pub seed: Option<u64>,
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
