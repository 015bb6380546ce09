//! Draw-to-submission orchestration.

use mecabal_boundary::capture::{capture, centroid};
use mecabal_boundary_models::{Boundary, DrawnShape, GeoPoint};
use mecabal_client::{ApiClient, ClientError};
use mecabal_location::{match_state, reconcile};
use mecabal_location_models::{Lga, LocationData, ResolvedLocation, State};
use mecabal_neighborhood_models::{CreateNeighborhoodRequest, Neighborhood, NeighborhoodKind};

use crate::WizardError;

/// User-entered fields of the wizard, independent of the map.
#[derive(Debug, Clone)]
pub struct NeighborhoodDraft {
    /// Display name.
    pub name: String,
    /// Kind of neighborhood.
    pub kind: NeighborhoodKind,
    /// Whether access is gated.
    pub is_gated: bool,
    /// Optional free-text description.
    pub description: Option<String>,
}

/// Pre-fetched reference lists, so repeat wizard runs (and tests)
/// skip the lookups.
#[derive(Debug, Clone, Default)]
pub struct ReferenceLists {
    /// All states, from `/location/states`.
    pub states: Vec<State>,
    /// LGAs of the matched state, from `/location/states/{id}/lgas`.
    pub lgas: Vec<Lga>,
}

/// Everything the wizard derives from the drawn shape: the closed
/// boundary, its centroid, the geocode reconciliation outcome, and
/// the LGA list for manual selection when nothing matched.
#[derive(Debug, Clone)]
pub struct CapturedArea {
    /// Closed-ring polygon ready for submission.
    pub boundary: Boundary,
    /// Unweighted vertex mean of the outer ring.
    pub centroid: GeoPoint,
    /// Matched State/LGA plus the display fallback label.
    pub resolved: ResolvedLocation,
    /// LGAs of the matched state (empty when no state matched).
    pub lgas: Vec<Lga>,
}

/// Pure reconciliation step: match geocoded text against reference
/// lists for a known centroid.
#[must_use]
pub fn resolve_location(
    refs: &ReferenceLists,
    data: &LocationData,
    point: GeoPoint,
) -> ResolvedLocation {
    reconcile(&refs.states, &refs.lgas, data, point)
}

/// Captures a drawn shape and pre-fills administrative fields.
///
/// Reverse-geocode failures are logged and swallowed: the area is
/// still captured, the State/LGA fields just stay empty and the
/// fallback label shows the raw centroid. Reference-list failures are
/// real errors; the wizard cannot offer manual selection without
/// them.
///
/// # Errors
///
/// Returns [`WizardError`] when the shape is degenerate or the
/// reference lists cannot be fetched.
pub async fn capture_area(
    client: &ApiClient,
    shape: &DrawnShape,
) -> Result<CapturedArea, WizardError> {
    let boundary = capture(shape)?;
    let point = centroid(&boundary).ok_or(WizardError::EmptyBoundary)?;

    let data = match client.reverse_geocode(point).await {
        Ok(data) => data,
        Err(e) => {
            log::warn!(
                "Reverse geocode failed for ({}, {}): {e}; falling back to manual selection",
                point.lat,
                point.lng
            );
            LocationData::default()
        }
    };

    let states = client.states().await?;
    let lgas = match data.state.as_deref().and_then(|s| match_state(&states, s)) {
        Some(state) => client.lgas(state.id).await?,
        None => Vec::new(),
    };

    let refs = ReferenceLists { states, lgas };
    let resolved = resolve_location(&refs, &data, point);

    Ok(CapturedArea {
        boundary,
        centroid: point,
        resolved,
        lgas: refs.lgas,
    })
}

/// Assembles the creation request from a captured area and the
/// user-entered draft.
///
/// `lga_override` is the user's manual pick; it takes precedence over
/// whatever the geocode reconciliation matched.
///
/// # Errors
///
/// Returns [`WizardError::MissingLga`] when neither reconciliation
/// nor the user provided an LGA.
pub fn build_submission(
    area: &CapturedArea,
    draft: &NeighborhoodDraft,
    lga_override: Option<&Lga>,
) -> Result<CreateNeighborhoodRequest, WizardError> {
    let lga = lga_override
        .or(area.resolved.lga.as_ref())
        .ok_or(WizardError::MissingLga)?;

    Ok(CreateNeighborhoodRequest {
        name: draft.name.clone(),
        kind: draft.kind,
        is_gated: draft.is_gated,
        boundaries: area.boundary.clone(),
        center_latitude: area.centroid.lat,
        center_longitude: area.centroid.lng,
        lga_id: lga.id.clone(),
        description: draft.description.clone(),
    })
}

/// Runs the whole wizard: capture, reconcile, submit.
///
/// # Errors
///
/// Returns [`WizardError`] on capture failure, missing LGA, or
/// backend rejection.
pub async fn create(
    client: &ApiClient,
    shape: &DrawnShape,
    draft: &NeighborhoodDraft,
    lga_override: Option<&Lga>,
) -> Result<Neighborhood, WizardError> {
    let area = capture_area(client, shape).await?;
    let request = build_submission(&area, draft, lga_override)?;
    Ok(client.create_neighborhood(&request).await?)
}

/// Re-captures a shape and replaces an existing neighborhood's
/// boundary (the edit flow).
///
/// # Errors
///
/// Returns [`WizardError`] on capture failure or backend rejection.
pub async fn update_boundary(
    client: &ApiClient,
    neighborhood_id: &str,
    shape: &DrawnShape,
) -> Result<Neighborhood, WizardError> {
    let boundary = capture(shape)?;
    Ok(client.update_boundaries(neighborhood_id, &boundary).await?)
}

/// Looks up neighborhoods near a point, mapping "nothing registered"
/// (404) to an empty list so callers can branch straight into the
/// creation flow.
///
/// # Errors
///
/// Returns [`WizardError`] on transport or backend failure other
/// than 404.
pub async fn nearby(
    client: &ApiClient,
    point: GeoPoint,
    radius_m: f64,
) -> Result<Vec<Neighborhood>, WizardError> {
    match client.nearby_neighborhoods(point, radius_m).await {
        Ok(found) => Ok(found),
        Err(ClientError::NotFound { .. }) => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mecabal_location_models::LgaKind;

    fn refs() -> ReferenceLists {
        ReferenceLists {
            states: vec![State {
                id: 1,
                name: "Lagos".to_string(),
            }],
            lgas: vec![Lga {
                id: "lga-24".to_string(),
                name: "Ikeja".to_string(),
                kind: LgaKind::Lga,
            }],
        }
    }

    fn captured(resolved: ResolvedLocation) -> CapturedArea {
        let shape = DrawnShape::Circle {
            center: GeoPoint::new(3.3, 6.5),
            radius_m: 500.0,
        };
        let boundary = capture(&shape).unwrap();
        let point = centroid(&boundary).unwrap();
        CapturedArea {
            boundary,
            centroid: point,
            resolved,
            lgas: refs().lgas,
        }
    }

    fn draft() -> NeighborhoodDraft {
        NeighborhoodDraft {
            name: "Alausa Estate".to_string(),
            kind: NeighborhoodKind::Estate,
            is_gated: true,
            description: None,
        }
    }

    #[test]
    fn resolve_matches_geocoded_fields() {
        let data = LocationData {
            state: Some("lagos".to_string()),
            lga: Some("Ikeja LCDA".to_string()),
            city: None,
            formatted_address: None,
        };
        let resolved = resolve_location(&refs(), &data, GeoPoint::new(3.3, 6.5));
        assert_eq!(resolved.state.as_ref().unwrap().id, 1);
        assert_eq!(resolved.lga.as_ref().unwrap().id, "lga-24");
    }

    #[test]
    fn resolve_falls_back_to_coordinates() {
        let resolved = resolve_location(&refs(), &LocationData::default(), GeoPoint::new(3.3, 6.5));
        assert!(resolved.state.is_none());
        assert_eq!(resolved.fallback_label, "6.500000, 3.300000");
    }

    #[test]
    fn submission_uses_matched_lga_and_centroid() {
        let data = LocationData {
            state: Some("Lagos".to_string()),
            lga: Some("Ikeja".to_string()),
            city: None,
            formatted_address: None,
        };
        let resolved = resolve_location(&refs(), &data, GeoPoint::new(3.3, 6.5));
        let area = captured(resolved);
        let request = build_submission(&area, &draft(), None).unwrap();

        assert_eq!(request.lga_id, "lga-24");
        assert!((request.center_latitude - 6.5).abs() < 1e-9);
        assert!((request.center_longitude - 3.3).abs() < 1e-9);
        // Ring stays closed all the way to the request payload.
        let ring = request.boundaries.outer_ring().unwrap();
        assert_eq!(ring.first(), ring.last());
        assert_eq!(ring.len(), 33);
    }

    #[test]
    fn manual_lga_overrides_matched_one() {
        let data = LocationData {
            state: Some("Lagos".to_string()),
            lga: Some("Ikeja".to_string()),
            city: None,
            formatted_address: None,
        };
        let resolved = resolve_location(&refs(), &data, GeoPoint::new(3.3, 6.5));
        let area = captured(resolved);
        let manual = Lga {
            id: "lga-30".to_string(),
            name: "Eti-Osa".to_string(),
            kind: LgaKind::Lga,
        };
        let request = build_submission(&area, &draft(), Some(&manual)).unwrap();
        assert_eq!(request.lga_id, "lga-30");
    }

    #[test]
    fn submission_without_lga_is_rejected() {
        let resolved = resolve_location(&refs(), &LocationData::default(), GeoPoint::new(3.3, 6.5));
        let area = captured(resolved);
        assert!(matches!(
            build_submission(&area, &draft(), None),
            Err(WizardError::MissingLga)
        ));
    }
}
