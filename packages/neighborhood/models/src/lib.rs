#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Neighborhood DTOs shared by the client and the creation wizard.

use chrono::{DateTime, Utc};
use mecabal_boundary_models::Boundary;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// The kind of neighborhood being registered.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum NeighborhoodKind {
    /// An open area within an LGA.
    Area,
    /// A named (often gated) estate.
    Estate,
    /// A community with informal boundaries.
    Community,
}

/// A neighborhood as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Neighborhood {
    /// Backend identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Kind of neighborhood.
    #[serde(rename = "type")]
    pub kind: NeighborhoodKind,
    /// Whether access is gated.
    pub is_gated: bool,
    /// Boundary polygon, when one has been drawn.
    pub boundaries: Option<Boundary>,
    /// Centroid latitude used for proximity queries.
    pub center_latitude: f64,
    /// Centroid longitude used for proximity queries.
    pub center_longitude: f64,
    /// Owning LGA reference ID.
    pub lga_id: String,
    /// Owning state reference ID.
    pub state_id: Option<i64>,
    /// Number of members, when the backend includes it.
    pub member_count: Option<u64>,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for `POST /location/neighborhoods`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNeighborhoodRequest {
    /// Display name.
    pub name: String,
    /// Kind of neighborhood.
    #[serde(rename = "type")]
    pub kind: NeighborhoodKind,
    /// Whether access is gated.
    pub is_gated: bool,
    /// Boundary polygon with a closed outer ring.
    pub boundaries: Boundary,
    /// Centroid latitude.
    pub center_latitude: f64,
    /// Centroid longitude.
    pub center_longitude: f64,
    /// Owning LGA reference ID.
    pub lga_id: String,
    /// Optional free-text description.
    pub description: Option<String>,
}

/// A member of a neighborhood.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodMember {
    /// User ID.
    pub user_id: String,
    /// Display name.
    pub display_name: String,
    /// Role within the neighborhood (e.g. "ADMIN", "MEMBER").
    pub role: String,
    /// When the user joined.
    pub joined_at: Option<DateTime<Utc>>,
}
