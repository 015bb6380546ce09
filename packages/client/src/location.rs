//! Location reference and geocoding endpoints (`/location/*`).

use mecabal_boundary_models::GeoPoint;
use mecabal_location_models::{Lga, LocationData, State};
use mecabal_neighborhood_models::Neighborhood;

use crate::{ApiClient, ClientError};

impl ApiClient {
    /// `GET /location/states`. Reference list of Nigerian states.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn states(&self) -> Result<Vec<State>, ClientError> {
        let path = "/location/states";
        self.execute(self.get(path), path).await
    }

    /// `GET /location/states/{id}/lgas`. LGAs within one state.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn lgas(&self, state_id: i64) -> Result<Vec<Lga>, ClientError> {
        let path = format!("/location/states/{state_id}/lgas");
        self.execute(self.get(&path), &path).await
    }

    /// `GET /location/reverse-geocode`. Resolves a coordinate to
    /// free-text administrative fields.
    ///
    /// Failures here are expected during normal operation (geocoder
    /// outages, coordinates outside coverage); callers fall back to
    /// manual selection.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport or backend failure.
    pub async fn reverse_geocode(&self, point: GeoPoint) -> Result<LocationData, ClientError> {
        let path = "/location/reverse-geocode";
        let builder = self.get(path).query(&[
            ("latitude", point.lat.to_string()),
            ("longitude", point.lng.to_string()),
        ]);
        self.execute(builder, path).await
    }

    /// `GET /location/neighborhoods/nearby`. Neighborhoods whose
    /// centers fall within `radius_m` of the point.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] when nothing is registered
    /// nearby (callers branch into the creation flow), and other
    /// variants on transport or backend failure.
    pub async fn nearby_neighborhoods(
        &self,
        point: GeoPoint,
        radius_m: f64,
    ) -> Result<Vec<Neighborhood>, ClientError> {
        let path = "/location/neighborhoods/nearby";
        let builder = self.get(path).query(&[
            ("latitude", point.lat.to_string()),
            ("longitude", point.lng.to_string()),
            ("radius", radius_m.to_string()),
        ]);
        self.execute_lookup(builder, path).await
    }
}
