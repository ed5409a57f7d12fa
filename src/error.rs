use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("{0}")]
    ValidationError(String),

    #[error("Error fetching user data: {0}")]
    NotFound(String),

    #[error("Error fetching repositories: {0}")]
    FetchError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl ViewerError {
    /// True for failures below the HTTP status level (DNS, connect, timeout, body decode).
    pub fn is_transport(&self) -> bool {
        matches!(self, ViewerError::NetworkError(_))
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
