use thiserror::Error;

/// Everything that can go wrong between the caller and the proxy
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure or non-success status
    #[error("Proxy request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Body is not JSON or lacks a required field
    #[error("Failed to decode proxy response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Records could not be written out as JSON
    #[error("Failed to render records as JSON: {0}")]
    Render(serde_json::Error),

    /// Search category other than artist, album or track
    #[error("Unknown search category: {0}. Expected one of artist, album, track")]
    UnknownCategory(String),

    /// Unusable base url or environment value
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
