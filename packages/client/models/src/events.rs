//! Neighborhood event types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// An event as returned by `GET /events`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Backend identifier.
    pub id: String,
    /// Event title.
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// Neighborhood hosting the event.
    pub neighborhood_id: String,
    /// Organizer user ID.
    pub organizer_id: String,
    /// Venue or meeting point, free text.
    pub venue: Option<String>,
    /// Event start.
    pub starts_at: DateTime<Utc>,
    /// Event end, if scheduled.
    pub ends_at: Option<DateTime<Utc>>,
    /// Number of confirmed attendees.
    pub rsvp_count: u64,
}

/// Payload for `POST /events`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    /// Event title.
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// Neighborhood to host in.
    pub neighborhood_id: String,
    /// Venue or meeting point.
    pub venue: Option<String>,
    /// Event start.
    pub starts_at: DateTime<Utc>,
    /// Event end.
    pub ends_at: Option<DateTime<Utc>>,
}

/// RSVP status for an event.
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
pub enum RsvpStatus {
    /// Attending.
    Going,
    /// Might attend.
    Interested,
    /// Not attending.
    NotGoing,
}
