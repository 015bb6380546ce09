//! Social feed types: posts, comments, reactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A feed post as returned by `GET /social/posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Backend identifier.
    pub id: String,
    /// Author user ID.
    pub author_id: String,
    /// Author display name, denormalized for the feed.
    pub author_name: Option<String>,
    /// Post body.
    pub content: String,
    /// Optional category label (e.g. "SAFETY", "EVENTS").
    pub category: Option<String>,
    /// Neighborhood the post belongs to.
    pub neighborhood_id: String,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// Total reactions.
    pub reaction_count: u64,
    /// Total comments.
    pub comment_count: u64,
}

/// Payload for `POST /social/posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    /// Post body.
    pub content: String,
    /// Optional category label.
    pub category: Option<String>,
    /// Neighborhood to post into.
    pub neighborhood_id: String,
}

/// A comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Backend identifier.
    pub id: String,
    /// Post this comment belongs to.
    pub post_id: String,
    /// Author user ID.
    pub author_id: String,
    /// Comment body.
    pub content: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
}

/// Reaction kinds supported by the feed.
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
pub enum ReactionKind {
    /// Thumbs up.
    Like,
    /// Heart.
    Love,
    /// Raised hands.
    Celebrate,
}
