//! Business directory endpoints (`/business/*`).

use mecabal_client_models::{
    Page, Paginated,
    business::{Business, BusinessQuery, CreateBusinessRequest, CreateReviewRequest, Review},
};

use crate::{ApiClient, ClientError};

impl ApiClient {
    /// `GET /business/directory`. Search and browse listings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn business_directory(
        &self,
        query: &BusinessQuery,
        page: Page,
    ) -> Result<Paginated<Business>, ClientError> {
        let path = "/business/directory";
        let mut params = vec![
            ("page".to_string(), page.page.to_string()),
            ("limit".to_string(), page.limit.to_string()),
        ];
        if let Some(search) = &query.search {
            params.push(("search".to_string(), search.clone()));
        }
        if let Some(category) = &query.category {
            params.push(("category".to_string(), category.clone()));
        }
        if let Some(neighborhood_id) = &query.neighborhood_id {
            params.push(("neighborhoodId".to_string(), neighborhood_id.clone()));
        }
        self.execute(self.get(path).query(&params), path).await
    }

    /// `GET /business/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] for unknown IDs so callers
    /// can offer the listing-creation flow, and other variants on
    /// transport or backend failure.
    pub async fn business(&self, id: &str) -> Result<Business, ClientError> {
        let path = format!("/business/{id}");
        self.execute_lookup(self.get(&path), &path).await
    }

    /// `POST /business`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn create_business(
        &self,
        request: &CreateBusinessRequest,
    ) -> Result<Business, ClientError> {
        let path = "/business";
        self.execute(self.post(path).json(request), path).await
    }

    /// `GET /business/{id}/reviews`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn business_reviews(
        &self,
        id: &str,
        page: Page,
    ) -> Result<Paginated<Review>, ClientError> {
        let path = format!("/business/{id}/reviews");
        let builder = self.get(&path).query(&[
            ("page", page.page.to_string()),
            ("limit", page.limit.to_string()),
        ]);
        self.execute(builder, &path).await
    }

    /// `POST /business/{id}/reviews`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn review_business(
        &self,
        id: &str,
        request: &CreateReviewRequest,
    ) -> Result<Review, ClientError> {
        let path = format!("/business/{id}/reviews");
        self.execute(self.post(&path).json(request), &path).await
    }
}
