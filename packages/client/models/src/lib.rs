#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Request and response DTOs for the MeCabal REST backend.
//!
//! Every backend response is wrapped in the same envelope
//! (`{ success, data?, error?, statusCode? }`); [`Envelope`] models it
//! as a typed, validated shape so the client can convert it into a
//! `Result` at the boundary instead of optional-chaining through
//! untyped JSON.

pub mod auth;
pub mod business;
pub mod events;
pub mod profile;
pub mod social;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// The uniform response envelope used by every backend endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Payload, present on success.
    pub data: Option<T>,
    /// Human-readable error message, present on failure.
    pub error: Option<String>,
    /// HTTP-style status code echoed by the backend.
    pub status_code: Option<u16>,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Parses an envelope from a raw JSON value.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the value does not match the
    /// envelope shape or the payload does not match `T`.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// Pagination parameters for list endpoints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
}

impl Page {
    /// First page with the given size.
    #[must_use]
    pub const fn first(limit: u32) -> Self {
        Self { page: 1, limit }
    }

    /// The page after this one, same size.
    #[must_use]
    pub const fn next(self) -> Self {
        Self {
            page: self.page + 1,
            limit: self.limit,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::first(20)
    }
}

/// A paginated list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// 1-based page number.
    pub page: u32,
    /// Page size requested.
    pub limit: u32,
    /// Total items across all pages.
    pub total: u64,
    /// Whether more pages exist after this one.
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_parses_success_shape() {
        let value = serde_json::json!({
            "success": true,
            "data": { "id": 7, "name": "Lagos" },
            "statusCode": 200
        });
        let envelope: Envelope<serde_json::Value> = Envelope::from_value(value).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data.unwrap()["name"], "Lagos");
        assert_eq!(envelope.status_code, Some(200));
    }

    #[test]
    fn envelope_parses_failure_shape() {
        let value = serde_json::json!({
            "success": false,
            "error": "Neighborhood not found",
            "statusCode": 404
        });
        let envelope: Envelope<serde_json::Value> = Envelope::from_value(value).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error.as_deref(), Some("Neighborhood not found"));
    }

    #[test]
    fn page_advances() {
        let page = Page::first(25);
        assert_eq!(page.next().page, 2);
        assert_eq!(page.next().limit, 25);
    }
}
