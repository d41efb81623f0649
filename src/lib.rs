//! Product summary Lambda for the storefront product page.
//!
//! A single API Lambda fronts the store's commerce API: each invocation
//! fetches the configured product record and its reviews concurrently, merges
//! them into the simplified JSON shape the product page consumes, and
//! responds with an edge-cacheable payload.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - reqwest for outbound commerce API calls
//! - Tokio for the async runtime
//!
//! CORS and request routing are handled by platform configuration, not by
//! this crate.
//!
//! # Example
//!
//! ```no_run
//! use product_summary::api::handler::product_summary_response;
//! use product_summary::shop::ShopClient;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Set up structured logging
//!     product_summary::setup_logging();
//!
//!     let client = ShopClient::new("access-token");
//!     let response = product_summary_response(&client, "demo").await;
//!     println!("{response}");
//! }
//! ```

// Module declarations
pub mod api;
pub mod core;
pub mod errors;
pub mod shop;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at the start of the
/// Lambda binary.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
