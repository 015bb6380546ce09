//! Cultural profile types (`/cultural-profile/*`).

use serde::{Deserialize, Serialize};

/// A user's cultural profile as returned by
/// `GET /cultural-profile/{userId}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CulturalProfile {
    /// Owning user ID.
    pub user_id: String,
    /// Languages spoken, free-text names.
    pub languages: Vec<String>,
    /// State of origin reference ID.
    pub state_of_origin_id: Option<i64>,
    /// LGA of origin reference ID.
    pub lga_of_origin_id: Option<String>,
    /// Short bio.
    pub bio: Option<String>,
    /// Avatar image URL, set after upload.
    pub avatar_url: Option<String>,
}

/// Payload for `PUT /cultural-profile/{userId}`.
///
/// All fields optional; only provided fields are updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCulturalProfileRequest {
    /// Replace the languages list.
    pub languages: Option<Vec<String>>,
    /// Set the state of origin.
    pub state_of_origin_id: Option<i64>,
    /// Set the LGA of origin.
    pub lga_of_origin_id: Option<String>,
    /// Replace the bio.
    pub bio: Option<String>,
}
