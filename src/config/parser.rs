use std::path::Path;
use crate::errors::CanvasError;
use super::types::{parse_origins, Settings};
use tracing::debug;

const MAX_CONFIG_BYTES: u64 = 1_048_576;

/// Load settings: defaults, then the optional YAML file, then environment.
pub async fn load_settings(path: Option<&Path>) -> Result<Settings, CanvasError> {
    let mut settings = match path {
        Some(path) => parse_config(path).await?,
        None => Settings::default(),
    };
    apply_env(&mut settings, |key| std::env::var(key).ok())?;
    Ok(settings)
}

pub async fn parse_config(path: &Path) -> Result<Settings, CanvasError> {
    if !path.exists() {
        return Err(CanvasError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(CanvasError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    let settings: Settings = serde_yaml::from_str(&content)?;
    debug!(path = %path.display(), "Loaded config file");
    Ok(settings)
}

/// Overlay environment variables on top of file/default settings.
pub fn apply_env<F>(settings: &mut Settings, lookup: F) -> Result<(), CanvasError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(debug) = lookup("DEBUG") {
        settings.debug = debug.eq_ignore_ascii_case("true");
    }
    if let Some(origins) = lookup("ALLOWED_ORIGINS") {
        settings.allowed_origins = parse_origins(&origins);
    }
    if let Some(key) = lookup("CLAUDE_API_KEY") {
        settings.claude.api_key = Some(key);
    }
    if let Some(region) = lookup("AWS_REGION") {
        settings.aws_region = region;
    }
    if let Some(seed) = lookup("CANVAS_DEMO_SEED") {
        let seed = seed.trim().parse::<u64>().map_err(|e| {
            CanvasError::Config(format!("CANVAS_DEMO_SEED must be an unsigned integer: {}", e))
        })?;
        settings.demo.seed = Some(seed);
    }
    if let Some(url) = lookup("CANVAS_FINOPS_URL") {
        settings.providers.finops_url = Some(url);
    }
    if let Some(url) = lookup("CANVAS_SECURITY_URL") {
        settings.providers.security_url = Some(url);
    }
    Ok(())
}
