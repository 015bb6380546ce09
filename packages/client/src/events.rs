//! Event endpoints (`/events/*`).

use mecabal_client_models::{
    Page, Paginated,
    events::{CreateEventRequest, Event, RsvpStatus},
};

use crate::{ApiClient, ClientError};

impl ApiClient {
    /// `GET /events`. Upcoming events for a neighborhood.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn events(
        &self,
        neighborhood_id: &str,
        page: Page,
    ) -> Result<Paginated<Event>, ClientError> {
        let path = "/events";
        let builder = self.get(path).query(&[
            ("neighborhoodId", neighborhood_id.to_string()),
            ("page", page.page.to_string()),
            ("limit", page.limit.to_string()),
        ]);
        self.execute(builder, path).await
    }

    /// `GET /events/{id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] for unknown IDs, and other
    /// variants on transport or backend failure.
    pub async fn event(&self, id: &str) -> Result<Event, ClientError> {
        let path = format!("/events/{id}");
        self.execute_lookup(self.get(&path), &path).await
    }

    /// `POST /events`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn create_event(&self, request: &CreateEventRequest) -> Result<Event, ClientError> {
        let path = "/events";
        self.execute(self.post(path).json(request), path).await
    }

    /// `POST /events/{id}/rsvp`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn rsvp(&self, event_id: &str, status: RsvpStatus) -> Result<(), ClientError> {
        let path = format!("/events/{event_id}/rsvp");
        let body = serde_json::json!({ "status": status });
        self.execute_empty(self.post(&path).json(&body), &path).await
    }
}
