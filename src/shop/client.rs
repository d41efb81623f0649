//! Commerce API client module
//!
//! Encapsulates the outbound product and reviews calls with bearer-token
//! authentication and upstream error handling.

use reqwest::{Client, StatusCode};
use tracing::info;

use crate::core::models::{ProductEnvelope, ReviewsEnvelope, UpstreamProduct, UpstreamReview};
use crate::errors::ShopError;

/// Production base URL of the commerce API.
const DEFAULT_BASE_URL: &str = "https://api.gumroad.com/v2";

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(Client::new);

/// Client for the commerce API's product and reviews endpoints.
///
/// Holds the bearer token and base URL; the underlying HTTP client is shared
/// process-wide. Use [`ShopClient::new`] in the handler and
/// [`ShopClient::with_base_url`] to point tests at a mock server.
pub struct ShopClient {
    base_url: String,
    access_token: String,
}

impl ShopClient {
    #[must_use]
    pub fn new(access_token: &str) -> Self {
        Self::with_base_url(access_token, DEFAULT_BASE_URL)
    }

    #[must_use]
    pub fn with_base_url(access_token: &str, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        }
    }

    /// Fetches the product record. The product endpoint must answer 2xx; any
    /// other status is a hard failure carrying the upstream status and body.
    ///
    /// # Errors
    ///
    /// - [`ShopError::HttpError`] if the HTTP request fails.
    /// - [`ShopError::UpstreamError`] on a non-2xx status.
    /// - [`ShopError::ParseError`] if the body does not match the expected shape.
    pub async fn fetch_product(&self, product_id: &str) -> Result<UpstreamProduct, ShopError> {
        let url = format!("{}/products/{}", self.base_url, product_id);
        let resp = HTTP_CLIENT
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = read_body(resp).await;
            return Err(ShopError::UpstreamError(format!(
                "product fetch failed: HTTP {status}: {body}"
            )));
        }

        let envelope: ProductEnvelope = resp
            .json()
            .await
            .map_err(|e| ShopError::ParseError(format!("product response: {e}")))?;

        Ok(envelope.product)
    }

    /// Fetches the product's reviews. A 404 means the product has no reviews
    /// yet and maps to an empty list; any other non-2xx status is a hard
    /// failure carrying the upstream status and body.
    ///
    /// # Errors
    ///
    /// - [`ShopError::HttpError`] if the HTTP request fails.
    /// - [`ShopError::UpstreamError`] on a non-2xx, non-404 status.
    /// - [`ShopError::ParseError`] if the body does not match the expected shape.
    pub async fn fetch_reviews(&self, product_id: &str) -> Result<Vec<UpstreamReview>, ShopError> {
        let url = format!("{}/products/{}/reviews", self.base_url, product_id);
        let resp = HTTP_CLIENT
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            info!(
                "No reviews found for product {}, substituting empty list",
                product_id
            );
            return Ok(Vec::new());
        }

        if !status.is_success() {
            let body = read_body(resp).await;
            return Err(ShopError::UpstreamError(format!(
                "reviews fetch failed: HTTP {status}: {body}"
            )));
        }

        let envelope: ReviewsEnvelope = resp
            .json()
            .await
            .map_err(|e| ShopError::ParseError(format!("reviews response: {e}")))?;

        Ok(envelope.reviews)
    }
}

async fn read_body(resp: reqwest::Response) -> String {
    resp.text()
        .await
        .unwrap_or_else(|_| "<failed to read body>".to_string())
}
