//! Cultural profile endpoints (`/cultural-profile/*`).

use mecabal_client_models::profile::{CulturalProfile, UpdateCulturalProfileRequest};

use crate::{ApiClient, ClientError};

impl ApiClient {
    /// `GET /cultural-profile/{userId}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] when the user has no profile
    /// yet (callers branch into the onboarding flow), and other
    /// variants on transport or backend failure.
    pub async fn cultural_profile(&self, user_id: &str) -> Result<CulturalProfile, ClientError> {
        let path = format!("/cultural-profile/{user_id}");
        self.execute_lookup(self.get(&path), &path).await
    }

    /// `PUT /cultural-profile/{userId}`. Partial update; only
    /// provided fields change.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn update_cultural_profile(
        &self,
        user_id: &str,
        request: &UpdateCulturalProfileRequest,
    ) -> Result<CulturalProfile, ClientError> {
        let path = format!("/cultural-profile/{user_id}");
        self.execute(self.put(&path).json(request), &path).await
    }

    /// `POST /cultural-profile/{userId}/avatar`. Multipart image
    /// upload; returns the updated profile with the new avatar URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn upload_avatar(
        &self,
        user_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<CulturalProfile, ClientError> {
        let path = format!("/cultural-profile/{user_id}/avatar");
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("avatar", part);
        self.execute(self.post(&path).multipart(form), &path).await
    }
}
