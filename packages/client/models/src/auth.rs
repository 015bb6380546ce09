//! Authentication request/response types.

use serde::{Deserialize, Serialize};

/// Credentials for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Email or phone number, as the backend accepts either.
    pub identifier: String,
    /// Plaintext password (sent over TLS only).
    pub password: String,
}

/// Registration payload for `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Nigerian phone number in E.164 form.
    pub phone_number: String,
    /// Plaintext password.
    pub password: String,
}

/// Tokens returned by login/refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Bearer token for subsequent requests.
    pub access_token: String,
    /// Token used to obtain a fresh access token.
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: Option<u64>,
}

/// Refresh payload for `POST /auth/refresh`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    /// The refresh token from a previous [`TokenPair`].
    pub refresh_token: String,
}

/// The authenticated user as returned by `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier.
    pub id: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone_number: Option<String>,
    /// Whether the phone number has been verified.
    pub phone_verified: Option<bool>,
    /// The user's primary neighborhood, once joined.
    pub neighborhood_id: Option<String>,
}
