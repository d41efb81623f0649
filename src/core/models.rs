use serde::{Deserialize, Serialize};

use super::config::DEFAULT_PRODUCT_ID;

/// Envelope returned by the commerce API's product endpoint.
#[derive(Debug, Deserialize)]
pub struct ProductEnvelope {
    pub product: UpstreamProduct,
}

/// Product record as returned by the commerce API.
#[derive(Debug, Deserialize)]
pub struct UpstreamProduct {
    pub sales_count: u64,
    pub formatted_price: String,
    pub permalink: Option<String>,
    pub rating: Option<ProductRating>,
}

/// Rating block on the product record. Absent until the product has received
/// at least one rating.
#[derive(Debug, Default, Deserialize)]
pub struct ProductRating {
    #[serde(default)]
    pub average: f64,
    #[serde(default)]
    pub count: u64,
}

/// Envelope returned by the commerce API's reviews endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewsEnvelope {
    #[serde(default)]
    pub reviews: Vec<UpstreamReview>,
}

/// Review record as returned by the commerce API. Sparse records are
/// tolerated; missing fields map to their defaults.
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamReview {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub content: String,
}

/// Normalized product block of the merged response body.
#[derive(Debug, Serialize)]
pub struct ProductSummary {
    pub sales_count: u64,
    pub rating_average: f64,
    pub rating_count: u64,
    pub formatted_price: String,
    pub permalink: String,
}

impl ProductSummary {
    /// Normalizes the upstream product record, defaulting the rating fields
    /// to zero and falling back to [`DEFAULT_PRODUCT_ID`] when the permalink
    /// is absent.
    #[must_use]
    pub fn from_upstream(product: UpstreamProduct) -> Self {
        let rating = product.rating.unwrap_or_default();
        Self {
            sales_count: product.sales_count,
            rating_average: rating.average,
            rating_count: rating.count,
            formatted_price: product.formatted_price,
            permalink: product
                .permalink
                .unwrap_or_else(|| DEFAULT_PRODUCT_ID.to_string()),
        }
    }
}

/// One reviewer entry of the merged response body.
#[derive(Debug, Serialize)]
pub struct ReviewEntry {
    pub name: String,
    pub rating: f64,
    pub content: String,
    pub avatar_id: String,
}

impl ReviewEntry {
    /// Maps an upstream review, deriving `avatar_id` from the reviewer name.
    #[must_use]
    pub fn from_upstream(review: UpstreamReview) -> Self {
        let avatar_id = derive_avatar_id(&review.name);
        Self {
            name: review.name,
            rating: review.rating,
            content: review.content,
            avatar_id,
        }
    }
}

/// Display key for the frontend's avatar widget: the reviewer name with every
/// non-alphanumeric character removed. Not a security-sensitive identifier.
#[must_use]
pub fn derive_avatar_id(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}
