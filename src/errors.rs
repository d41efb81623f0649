use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShopError {
    #[error("Missing configuration: {0}")]
    ConfigError(String),

    #[error("Upstream API error: {0}")]
    UpstreamError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to parse upstream response: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for ShopError {
    fn from(error: reqwest::Error) -> Self {
        ShopError::HttpError(error.to_string())
    }
}

impl From<anyhow::Error> for ShopError {
    fn from(error: anyhow::Error) -> Self {
        ShopError::UpstreamError(error.to_string())
    }
}
