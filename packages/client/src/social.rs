//! Social feed endpoints (`/social/*`).

use mecabal_client_models::{
    Page, Paginated,
    social::{Comment, CreatePostRequest, Post, ReactionKind},
};

use crate::{ApiClient, ClientError};

impl ApiClient {
    /// `GET /social/posts`. Paginated neighborhood feed.
    ///
    /// Each page is a fresh request; there is no in-flight
    /// deduplication, so impatient callers can issue duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn posts(
        &self,
        neighborhood_id: &str,
        page: Page,
    ) -> Result<Paginated<Post>, ClientError> {
        let path = "/social/posts";
        let builder = self.get(path).query(&[
            ("neighborhoodId", neighborhood_id.to_string()),
            ("page", page.page.to_string()),
            ("limit", page.limit.to_string()),
        ]);
        self.execute(builder, path).await
    }

    /// `POST /social/posts`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn create_post(&self, request: &CreatePostRequest) -> Result<Post, ClientError> {
        let path = "/social/posts";
        self.execute(self.post(path).json(request), path).await
    }

    /// `POST /social/posts/{id}/reactions`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn react(&self, post_id: &str, kind: ReactionKind) -> Result<(), ClientError> {
        let path = format!("/social/posts/{post_id}/reactions");
        let body = serde_json::json!({ "type": kind });
        self.execute_empty(self.post(&path).json(&body), &path).await
    }

    /// `GET /social/posts/{id}/comments`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn comments(
        &self,
        post_id: &str,
        page: Page,
    ) -> Result<Paginated<Comment>, ClientError> {
        let path = format!("/social/posts/{post_id}/comments");
        let builder = self.get(&path).query(&[
            ("page", page.page.to_string()),
            ("limit", page.limit.to_string()),
        ]);
        self.execute(builder, &path).await
    }

    /// `POST /social/posts/{id}/comments`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn comment(&self, post_id: &str, content: &str) -> Result<Comment, ClientError> {
        let path = format!("/social/posts/{post_id}/comments");
        let body = serde_json::json!({ "content": content });
        self.execute(self.post(&path).json(&body), &path).await
    }
}
