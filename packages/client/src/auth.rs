//! Authentication endpoints (`/auth/*`).

use mecabal_client_models::auth::{LoginRequest, RefreshRequest, RegisterRequest, TokenPair, User};

use crate::{ApiClient, ClientError, Session};

impl ApiClient {
    /// `POST /auth/login`. Returns the session to attach via
    /// [`ApiClient::with_session`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or rejected
    /// credentials.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ClientError> {
        let path = "/auth/login";
        let tokens: TokenPair = self.execute(self.post(path).json(request), path).await?;
        Ok(Session {
            access_token: tokens.access_token,
            refresh_token: Some(tokens.refresh_token),
        })
    }

    /// `POST /auth/register`. The backend logs the user in on
    /// successful registration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or validation
    /// rejection (duplicate email/phone).
    pub async fn register(&self, request: &RegisterRequest) -> Result<Session, ClientError> {
        let path = "/auth/register";
        let tokens: TokenPair = self.execute(self.post(path).json(request), path).await?;
        Ok(Session {
            access_token: tokens.access_token,
            refresh_token: Some(tokens.refresh_token),
        })
    }

    /// `POST /auth/refresh`. Exchanges a refresh token for a new
    /// session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or an expired
    /// refresh token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<Session, ClientError> {
        let path = "/auth/refresh";
        let request = RefreshRequest {
            refresh_token: refresh_token.to_string(),
        };
        let tokens: TokenPair = self.execute(self.post(path).json(&request), path).await?;
        Ok(Session {
            access_token: tokens.access_token,
            refresh_token: Some(tokens.refresh_token),
        })
    }

    /// `GET /auth/me`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a missing or
    /// expired session.
    pub async fn me(&self) -> Result<User, ClientError> {
        let path = "/auth/me";
        self.execute(self.get(path), path).await
    }
}
