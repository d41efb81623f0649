//! Response builders for the API handler.
//!
//! Lambda proxy responses are plain JSON values with `statusCode`, `headers`,
//! and a stringified `body`.

use serde_json::{Value, json};

use super::GENERIC_FAILURE_MESSAGE;
use crate::core::models::{ProductSummary, ReviewEntry};

/// Cache policy advertised on successful responses: shared caches may hold
/// the summary for 15 minutes and serve it stale while revalidating.
pub const SUMMARY_CACHE_CONTROL: &str = "public, s-maxage=900, stale-while-revalidate";

/// Returns the 200 response with the merged summary body and cache header.
#[must_use]
pub fn ok_summary(summary: &ProductSummary, reviews: &[ReviewEntry]) -> Value {
    json!({
        "statusCode": 200,
        "headers": {
            "Content-Type": "application/json",
            "Cache-Control": SUMMARY_CACHE_CONTROL,
        },
        "body": json!({
            "sales_count": summary.sales_count,
            "rating_average": summary.rating_average,
            "rating_count": summary.rating_count,
            "formatted_price": summary.formatted_price,
            "permalink": summary.permalink,
            "reviews": reviews,
        })
        .to_string()
    })
}

/// Returns the 500 response with the generic message and failure detail.
#[must_use]
pub fn err_response(details: &str) -> Value {
    json!({
        "statusCode": 500,
        "headers": { "Content-Type": "application/json" },
        "body": json!({ "error": GENERIC_FAILURE_MESSAGE, "details": details }).to_string()
    })
}
