use std::env;

use crate::errors::ShopError;

/// Product identifier used when `GUMROAD_PRODUCT_ID` is not configured. Also
/// the permalink fallback for product records that carry none.
pub const DEFAULT_PRODUCT_ID: &str = "demo";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub access_token: String,
    pub product_id: String,
}

impl AppConfig {
    /// Reads the handler configuration from the Lambda environment.
    ///
    /// # Errors
    ///
    /// Returns [`ShopError::ConfigError`] when `GUMROAD_ACCESS_TOKEN` is not
    /// set. The product identifier is optional and falls back to
    /// [`DEFAULT_PRODUCT_ID`].
    pub fn from_env() -> Result<Self, ShopError> {
        Ok(Self {
            access_token: env::var("GUMROAD_ACCESS_TOKEN")
                .map_err(|e| ShopError::ConfigError(format!("GUMROAD_ACCESS_TOKEN: {e}")))?,
            product_id: env::var("GUMROAD_PRODUCT_ID")
                .unwrap_or_else(|_| DEFAULT_PRODUCT_ID.to_string()),
        })
    }
}
