//! Business directory types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A business listing as returned by the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    /// Backend identifier.
    pub id: String,
    /// Business name.
    pub name: String,
    /// Directory category (e.g. "FOOD", "SERVICES").
    pub category: String,
    /// Short description.
    pub description: Option<String>,
    /// Neighborhood the business is registered in.
    pub neighborhood_id: Option<String>,
    /// Street address line.
    pub address: Option<String>,
    /// Contact phone number.
    pub phone_number: Option<String>,
    /// Average review rating (1.0 - 5.0).
    pub rating: Option<f64>,
    /// Number of reviews behind the rating.
    pub review_count: u64,
}

/// Filters for `GET /business/directory`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessQuery {
    /// Free-text search over name and description.
    pub search: Option<String>,
    /// Restrict to a single category.
    pub category: Option<String>,
    /// Restrict to a single neighborhood.
    pub neighborhood_id: Option<String>,
}

/// Payload for `POST /business`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBusinessRequest {
    /// Business name.
    pub name: String,
    /// Directory category.
    pub category: String,
    /// Short description.
    pub description: Option<String>,
    /// Neighborhood to register in.
    pub neighborhood_id: String,
    /// Street address line.
    pub address: Option<String>,
    /// Contact phone number.
    pub phone_number: Option<String>,
}

/// A review on a business listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Backend identifier.
    pub id: String,
    /// Business being reviewed.
    pub business_id: String,
    /// Reviewer user ID.
    pub author_id: String,
    /// Star rating, 1-5.
    pub rating: u8,
    /// Review body.
    pub comment: Option<String>,
    /// When the review was posted.
    pub created_at: DateTime<Utc>,
}

/// Payload for posting a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    /// Star rating, 1-5.
    pub rating: u8,
    /// Review body.
    pub comment: Option<String>,
}
