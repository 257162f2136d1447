use thiserror::Error;

/// Main error type for the matching engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Invalid ranking/engine configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for EngineError {
    fn from(s: String) -> Self {
        EngineError::Other(s)
    }
}

impl From<&str> for EngineError {
    fn from(s: &str) -> Self {
        EngineError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, EngineError>;
