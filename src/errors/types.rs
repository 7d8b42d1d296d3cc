use thiserror::Error;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// An external data provider failed while serving a request.
    #[error("{0}")]
    Provider(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CanvasError {
    /// Process exit code used by the CLI when startup fails.
    pub fn exit_code(&self) -> i32 {
        match self {
            CanvasError::Config(_) | CanvasError::Yaml(_) => 2,
            _ => 1,
        }
    }
}
