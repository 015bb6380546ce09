#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Typed REST client for the MeCabal backend.
//!
//! A single [`ApiClient`] fronts every backend resource group (auth,
//! location, neighborhoods, social, business, events, cultural
//! profile). The backend wraps all responses in the
//! `{ success, data?, error?, statusCode? }` envelope; the client
//! validates that envelope at the boundary and converts it into a
//! `Result`, so callers never see the raw shape.
//!
//! The client is an explicit value injected at call sites. The bearer
//! token lives in a [`Session`] attached via [`ApiClient::with_session`];
//! there is no module-level singleton and no ambient token storage.
//!
//! There is deliberately no retry, backoff, caching, or request
//! deduplication here; callers own those policies.

pub mod auth;
pub mod business;
pub mod config;
pub mod events;
pub mod location;
pub mod neighborhoods;
pub mod profile;
pub mod social;

use mecabal_client_models::Envelope;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use config::ClientConfig;

/// Errors surfaced by API calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connect, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid envelope JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend returned 503; shown to users as a distinct
    /// "service unavailable" condition.
    #[error("The MeCabal service is temporarily unavailable")]
    ServiceUnavailable,

    /// Lookup endpoint returned 404. Callers branch into creation
    /// flows on this variant.
    #[error("Not found: {path}")]
    NotFound {
        /// Request path that produced the 404.
        path: String,
    },

    /// Backend reported a failure inside the envelope.
    #[error("API error ({status}): {message}")]
    Api {
        /// Status code from the envelope (or HTTP status).
        status: u16,
        /// Backend-provided error message.
        message: String,
    },

    /// Envelope claimed success but carried no payload.
    #[error("Malformed envelope from {path}: success with no data")]
    MalformedEnvelope {
        /// Request path that produced the malformed response.
        path: String,
    },
}

/// Bearer credentials for authenticated requests.
#[derive(Debug, Clone)]
pub struct Session {
    /// Bearer token sent as `Authorization: Bearer ...`.
    pub access_token: String,
    /// Refresh token, kept so the caller can re-authenticate.
    pub refresh_token: Option<String>,
}

/// HTTP facade over the MeCabal REST backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Option<Session>,
}

impl ApiClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        let session = config.access_token.clone().map(|access_token| Session {
            access_token,
            refresh_token: None,
        });

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Returns a client carrying the given session's bearer token.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Whether a session token is attached.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut builder = self.http.request(method, url);
        if let Some(session) = &self.session {
            builder = builder.bearer_auth(&session.access_token);
        }
        builder
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::GET, path)
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::POST, path)
    }

    fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::PUT, path)
    }

    fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::DELETE, path)
    }

    /// Sends a request and unwraps the response envelope into its
    /// payload.
    async fn execute<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<T, ClientError> {
        let resp = builder.send().await?;
        let status = resp.status();

        if let Some(err) = check_status(status, false, path) {
            return Err(err);
        }

        let body: serde_json::Value = resp.json().await?;
        unwrap_envelope(body, status.as_u16(), path)
    }

    /// Like [`Self::execute`], but maps HTTP 404 to
    /// [`ClientError::NotFound`] for lookup endpoints.
    async fn execute_lookup<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<T, ClientError> {
        let resp = builder.send().await?;
        let status = resp.status();

        if let Some(err) = check_status(status, true, path) {
            return Err(err);
        }

        let body: serde_json::Value = resp.json().await?;
        unwrap_envelope(body, status.as_u16(), path)
    }

    /// Sends a request whose success carries no payload (joins,
    /// reactions, RSVPs).
    async fn execute_empty(
        &self,
        builder: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<(), ClientError> {
        let resp = builder.send().await?;
        let status = resp.status();

        if let Some(err) = check_status(status, false, path) {
            return Err(err);
        }

        let body: serde_json::Value = resp.json().await?;
        let envelope: Envelope<serde_json::Value> = Envelope::from_value(body)?;
        if envelope.success {
            Ok(())
        } else {
            Err(envelope_failure(&envelope, status.as_u16()))
        }
    }
}

/// Maps HTTP statuses that short-circuit before envelope parsing:
/// 503 always, and 404 on lookup endpoints (where "missing" is an
/// expected outcome callers branch on).
fn check_status(
    status: reqwest::StatusCode,
    treat_404_as_missing: bool,
    path: &str,
) -> Option<ClientError> {
    if status == reqwest::StatusCode::SERVICE_UNAVAILABLE {
        return Some(ClientError::ServiceUnavailable);
    }
    if treat_404_as_missing && status == reqwest::StatusCode::NOT_FOUND {
        return Some(ClientError::NotFound {
            path: path.to_string(),
        });
    }
    None
}

/// Converts a parsed envelope into `Result<T, _>`.
fn unwrap_envelope<T: DeserializeOwned>(
    body: serde_json::Value,
    http_status: u16,
    path: &str,
) -> Result<T, ClientError> {
    let envelope: Envelope<T> = Envelope::from_value(body)?;
    if envelope.success {
        envelope.data.ok_or_else(|| ClientError::MalformedEnvelope {
            path: path.to_string(),
        })
    } else {
        Err(envelope_failure(&envelope, http_status))
    }
}

fn envelope_failure<T>(envelope: &Envelope<T>, http_status: u16) -> ClientError {
    let status = envelope.status_code.unwrap_or(http_status);
    if status == 503 {
        return ClientError::ServiceUnavailable;
    }
    ClientError::Api {
        status,
        message: envelope
            .error
            .clone()
            .unwrap_or_else(|| "Request failed".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_success_payload() {
        let body = serde_json::json!({
            "success": true,
            "data": { "id": 1, "name": "Lagos" },
            "statusCode": 200
        });
        let state: mecabal_location_models::State = unwrap_envelope(body, 200, "/test").unwrap();
        assert_eq!(state.name, "Lagos");
    }

    #[test]
    fn success_without_data_is_malformed() {
        let body = serde_json::json!({ "success": true });
        let err = unwrap_envelope::<serde_json::Value>(body, 200, "/test").unwrap_err();
        assert!(matches!(err, ClientError::MalformedEnvelope { .. }));
    }

    #[test]
    fn failure_surfaces_envelope_status_and_message() {
        let body = serde_json::json!({
            "success": false,
            "error": "Invalid credentials",
            "statusCode": 401
        });
        let err = unwrap_envelope::<serde_json::Value>(body, 200, "/auth/login").unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid credentials");
            }
            other => panic!("Unexpected error: {other}"),
        }
    }

    #[test]
    fn envelope_503_maps_to_service_unavailable() {
        let body = serde_json::json!({
            "success": false,
            "error": "upstream down",
            "statusCode": 503
        });
        let err = unwrap_envelope::<serde_json::Value>(body, 200, "/social/posts").unwrap_err();
        assert!(matches!(err, ClientError::ServiceUnavailable));
    }

    #[test]
    fn http_404_on_lookup_maps_to_not_found() {
        let err = check_status(
            reqwest::StatusCode::NOT_FOUND,
            true,
            "/location/neighborhoods/nbhd-404",
        )
        .unwrap();
        match err {
            ClientError::NotFound { path } => {
                assert_eq!(path, "/location/neighborhoods/nbhd-404");
            }
            other => panic!("Unexpected error: {other}"),
        }
    }

    #[test]
    fn http_404_on_non_lookup_falls_through_to_envelope() {
        assert!(check_status(reqwest::StatusCode::NOT_FOUND, false, "/social/posts").is_none());
    }

    #[test]
    fn http_503_short_circuits_regardless_of_endpoint() {
        assert!(matches!(
            check_status(reqwest::StatusCode::SERVICE_UNAVAILABLE, false, "/events"),
            Some(ClientError::ServiceUnavailable)
        ));
        assert!(matches!(
            check_status(reqwest::StatusCode::SERVICE_UNAVAILABLE, true, "/business/b-1"),
            Some(ClientError::ServiceUnavailable)
        ));
    }

    #[test]
    fn ok_status_falls_through() {
        assert!(check_status(reqwest::StatusCode::OK, true, "/auth/me").is_none());
    }

    #[test]
    fn failure_falls_back_to_http_status() {
        let body = serde_json::json!({ "success": false });
        let err = unwrap_envelope::<serde_json::Value>(body, 500, "/events").unwrap_err();
        match err {
            ClientError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Request failed");
            }
            other => panic!("Unexpected error: {other}"),
        }
    }
}
