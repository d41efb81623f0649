use product_summary::api::GENERIC_FAILURE_MESSAGE;
use product_summary::api::helpers::{SUMMARY_CACHE_CONTROL, err_response, ok_summary};
use product_summary::core::models::{ProductSummary, ReviewEntry, UpstreamReview};

/// Tests for the response builders.
/// These verify that the Lambda proxy payloads are correctly formatted for
/// both the cached success response and the structured error response.

fn sample_summary() -> ProductSummary {
    ProductSummary {
        sales_count: 42,
        rating_average: 4.5,
        rating_count: 12,
        formatted_price: "$19".to_string(),
        permalink: "vim-course".to_string(),
    }
}

fn sample_reviews() -> Vec<ReviewEntry> {
    vec![ReviewEntry::from_upstream(UpstreamReview {
        name: "Jane Q. Public".to_string(),
        rating: 5.0,
        content: "Loved it".to_string(),
    })]
}

#[test]
fn test_ok_summary_status_and_cache_header() {
    let payload = ok_summary(&sample_summary(), &sample_reviews());

    assert_eq!(
        payload.get("statusCode").and_then(|s| s.as_u64()),
        Some(200)
    );
    assert_eq!(
        payload["headers"]["Cache-Control"].as_str(),
        Some(SUMMARY_CACHE_CONTROL)
    );
    assert_eq!(
        payload["headers"]["Content-Type"].as_str(),
        Some("application/json")
    );
}

#[test]
fn test_ok_summary_body_contains_all_fields() {
    let payload = ok_summary(&sample_summary(), &sample_reviews());
    let body_str = payload["body"].as_str().unwrap();

    assert!(
        body_str.contains("\"sales_count\":42"),
        "Body should include the sales count"
    );
    assert!(
        body_str.contains("\"formatted_price\":\"$19\""),
        "Body should include the formatted price"
    );
    assert!(
        body_str.contains("\"permalink\":\"vim-course\""),
        "Body should include the permalink"
    );
    assert!(
        body_str.contains("\"avatar_id\":\"JaneQPublic\""),
        "Review entries should carry the derived avatar id"
    );
}

#[test]
fn test_ok_summary_empty_reviews_serializes_as_empty_array() {
    let payload = ok_summary(&sample_summary(), &[]);
    let body_str = payload["body"].as_str().unwrap();

    assert!(
        body_str.contains("\"reviews\":[]"),
        "Zero reviews must serialize as an empty list, not be omitted"
    );
}

#[test]
fn test_ok_summary_is_deterministic() {
    let first = ok_summary(&sample_summary(), &sample_reviews());
    let second = ok_summary(&sample_summary(), &sample_reviews());

    assert_eq!(
        first["body"].as_str().unwrap(),
        second["body"].as_str().unwrap(),
        "Identical inputs must produce byte-identical bodies"
    );
}

#[test]
fn test_err_response_shape() {
    let payload = err_response("product fetch failed: HTTP 503: down");

    assert_eq!(
        payload.get("statusCode").and_then(|s| s.as_u64()),
        Some(500)
    );

    let body_str = payload["body"].as_str().unwrap();
    assert!(
        body_str.contains(GENERIC_FAILURE_MESSAGE),
        "Error body should lead with the generic message"
    );
    assert!(
        body_str.contains("HTTP 503"),
        "Error body should carry the failure detail"
    );
}
