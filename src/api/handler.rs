//! API Lambda handler - fetches, merges, and renders the product summary.
//!
//! This module handles:
//! - Configuration checks (credential, product identifier)
//! - The two concurrent upstream fetches (product, reviews)
//! - Normalization and the merged 200/500 responses

use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

use super::helpers;
use crate::core::config::AppConfig;
use crate::core::models::{ProductSummary, ReviewEntry};
use crate::shop::ShopClient;

pub use self::function_handler as handler;

/// Lambda handler for the product summary endpoint.
///
/// The inbound method, body, and query are ignored; every invocation renders
/// the configured product. Failures are encoded as HTTP 500 payloads rather
/// than Rust-level errors so the platform always receives a response body.
///
/// # Errors
///
/// Never returns `Err`; all failure paths produce a 500 response payload.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<impl Serialize, Error> {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Config error: {}", e);
            return Ok(helpers::err_response(&e.to_string()));
        }
    };
    info!(product_id = %config.product_id, "API Lambda received request: {:?}", event);

    let client = ShopClient::new(&config.access_token);
    Ok(product_summary_response(&client, &config.product_id).await)
}

/// Fetches product and reviews concurrently and renders the proxy response.
///
/// Both fetches are awaited before any processing begins; a reviews 404 has
/// already been substituted with an empty list by the client, so any error
/// reaching this point aborts the whole request.
pub async fn product_summary_response(client: &ShopClient, product_id: &str) -> Value {
    let (product, reviews) = futures::join!(
        client.fetch_product(product_id),
        client.fetch_reviews(product_id),
    );

    let product = match product {
        Ok(product) => product,
        Err(e) => {
            error!("Product fetch failed: {}", e);
            return helpers::err_response(&e.to_string());
        }
    };

    let reviews = match reviews {
        Ok(reviews) => reviews,
        Err(e) => {
            error!("Reviews fetch failed: {}", e);
            return helpers::err_response(&e.to_string());
        }
    };

    let summary = ProductSummary::from_upstream(product);
    let entries: Vec<ReviewEntry> = reviews
        .into_iter()
        .map(ReviewEntry::from_upstream)
        .collect();

    helpers::ok_summary(&summary, &entries)
}
