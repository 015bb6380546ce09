//! Neighborhood CRUD and membership endpoints
//! (`/location/neighborhoods/*`).

use mecabal_boundary_models::Boundary;
use mecabal_neighborhood_models::{CreateNeighborhoodRequest, Neighborhood, NeighborhoodMember};

use crate::{ApiClient, ClientError};

impl ApiClient {
    /// `GET /location/neighborhoods/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] for unknown IDs so callers
    /// can redirect into the creation flow, and other variants on
    /// transport or backend failure.
    pub async fn neighborhood(&self, id: &str) -> Result<Neighborhood, ClientError> {
        let path = format!("/location/neighborhoods/{id}");
        self.execute_lookup(self.get(&path), &path).await
    }

    /// `POST /location/neighborhoods`. Creates a neighborhood from a
    /// wizard submission.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or backend
    /// validation rejection (unclosed ring, unknown LGA).
    pub async fn create_neighborhood(
        &self,
        request: &CreateNeighborhoodRequest,
    ) -> Result<Neighborhood, ClientError> {
        let path = "/location/neighborhoods";
        self.execute(self.post(path).json(request), path).await
    }

    /// `PUT /location/neighborhoods/{id}/boundaries`. Replaces the
    /// boundary polygon of an existing neighborhood.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] for unknown IDs, and other
    /// variants on transport or backend failure.
    pub async fn update_boundaries(
        &self,
        id: &str,
        boundary: &Boundary,
    ) -> Result<Neighborhood, ClientError> {
        let path = format!("/location/neighborhoods/{id}/boundaries");
        self.execute_lookup(self.put(&path).json(boundary), &path)
            .await
    }

    /// `GET /location/neighborhoods/{id}/members`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] for unknown IDs, and other
    /// variants on transport or backend failure.
    pub async fn neighborhood_members(
        &self,
        id: &str,
    ) -> Result<Vec<NeighborhoodMember>, ClientError> {
        let path = format!("/location/neighborhoods/{id}/members");
        self.execute_lookup(self.get(&path), &path).await
    }

    /// `POST /location/neighborhoods/{id}/join`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn join_neighborhood(&self, id: &str) -> Result<(), ClientError> {
        let path = format!("/location/neighborhoods/{id}/join");
        self.execute_empty(self.post(&path), &path).await
    }

    /// `DELETE /location/neighborhoods/{id}/join`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn leave_neighborhood(&self, id: &str) -> Result<(), ClientError> {
        let path = format!("/location/neighborhoods/{id}/join");
        self.execute_empty(self.delete(&path), &path).await
    }
}
