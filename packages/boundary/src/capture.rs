//! Drawn shape to submittable [`Boundary`] conversion.
//!
//! Every path through here ends with a closed outer ring, so the API
//! client never has to re-validate closure.

use geo::Contains;
use geojson::GeoJson;
use mecabal_boundary_models::{Boundary, DrawnShape, GeoPoint};

use crate::{
    BoundaryError,
    ring::{close_ring, ring_centroid},
    tessellate::{circle_to_ring, rectangle_to_ring},
};

/// Converts a drawn shape into a boundary with a guaranteed-closed
/// outer ring.
///
/// # Errors
///
/// Returns [`BoundaryError`] when the shape is degenerate (too few
/// vertices, bad radius, inverted rectangle, polar circle center).
pub fn capture(shape: &DrawnShape) -> Result<Boundary, BoundaryError> {
    let mut ring = match shape {
        DrawnShape::Polygon { ring } => ring.iter().map(|p| p.to_pair()).collect(),
        DrawnShape::Rectangle {
            west,
            south,
            east,
            north,
        } => rectangle_to_ring(*west, *south, *east, *north)?,
        DrawnShape::Circle { center, radius_m } => circle_to_ring(*center, *radius_m)?,
    };

    close_ring(&mut ring)?;

    let boundary = Boundary::from_outer_ring(ring);
    if let Some(centroid) = centroid(&boundary)
        && !contains(&boundary, centroid)
    {
        // Mean-of-vertices centroid can land outside non-convex
        // rings; the reverse geocode still works, the admin-area
        // match is just less reliable.
        log::warn!(
            "Boundary centroid ({}, {}) falls outside the drawn ring",
            centroid.lat,
            centroid.lng
        );
    }

    Ok(boundary)
}

/// Centroid of the boundary's outer ring (unweighted vertex mean).
#[must_use]
pub fn centroid(boundary: &Boundary) -> Option<GeoPoint> {
    boundary.outer_ring().and_then(ring_centroid)
}

/// Whether a point lies inside the boundary's outer ring.
#[must_use]
pub fn contains(boundary: &Boundary, point: GeoPoint) -> bool {
    let Some(ring) = boundary.outer_ring() else {
        return false;
    };
    let exterior: geo::LineString<f64> = ring.iter().map(|p| (p[0], p[1])).collect();
    let polygon = geo::Polygon::new(exterior, vec![]);
    polygon.contains(&geo::Point::new(point.lng, point.lat))
}

/// Parses a `GeoJSON` document (geometry, feature, or single-feature
/// collection) into a boundary, closing the outer ring if needed.
///
/// This is how shapes exported from the drawing surface as `.geojson`
/// files re-enter the pipeline.
///
/// # Errors
///
/// Returns [`BoundaryError::Geometry`] when the document has no
/// polygon geometry, and ring-validation errors from [`close_ring`].
pub fn from_geojson(raw: &str) -> Result<Boundary, BoundaryError> {
    let geojson: GeoJson = raw.parse().map_err(|e| BoundaryError::Geometry {
        message: format!("Failed to parse GeoJSON: {e}"),
    })?;

    let geometry = match geojson {
        GeoJson::Geometry(g) => g,
        GeoJson::Feature(f) => f.geometry.ok_or_else(|| BoundaryError::Geometry {
            message: "Feature has no geometry".to_string(),
        })?,
        GeoJson::FeatureCollection(fc) => fc
            .features
            .into_iter()
            .find_map(|f| f.geometry)
            .ok_or_else(|| BoundaryError::Geometry {
                message: "FeatureCollection has no geometry".to_string(),
            })?,
    };

    let mut ring = match geometry.value {
        geojson::Value::Polygon(rings) => rings
            .into_iter()
            .next()
            .ok_or_else(|| BoundaryError::Geometry {
                message: "Polygon has no rings".to_string(),
            })?
            .into_iter()
            .map(|pos| [pos[0], pos[1]])
            .collect::<Vec<_>>(),
        other => {
            return Err(BoundaryError::Geometry {
                message: format!("Expected Polygon geometry, got {}", other.type_name()),
            });
        }
    };

    close_ring(&mut ring)?;
    Ok(Boundary::from_outer_ring(ring))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::is_closed;

    fn square() -> DrawnShape {
        DrawnShape::Polygon {
            ring: vec![
                GeoPoint::new(3.30, 6.50),
                GeoPoint::new(3.40, 6.50),
                GeoPoint::new(3.40, 6.60),
                GeoPoint::new(3.30, 6.60),
            ],
        }
    }

    #[test]
    fn capture_closes_open_polygon() {
        let boundary = capture(&square()).unwrap();
        let ring = boundary.outer_ring().unwrap();
        assert_eq!(ring.len(), 5);
        assert!(is_closed(ring));
    }

    #[test]
    fn capture_circle_end_to_end() {
        let shape = DrawnShape::Circle {
            center: GeoPoint::new(3.3, 6.5),
            radius_m: 500.0,
        };
        let boundary = capture(&shape).unwrap();
        let ring = boundary.outer_ring().unwrap();
        assert_eq!(ring.len(), 33);
        assert!(is_closed(ring));

        let c = centroid(&boundary).unwrap();
        assert!((c.lng - 3.3).abs() < 1e-9);
        assert!((c.lat - 6.5).abs() < 1e-9);
        assert!(contains(&boundary, c));
    }

    #[test]
    fn capture_circle_at_prime_meridian_keeps_33_points() {
        // The tessellated ring must already be closed when it reaches
        // close_ring; otherwise a 34th vertex sneaks in.
        let shape = DrawnShape::Circle {
            center: GeoPoint::new(0.0, 6.5),
            radius_m: 500.0,
        };
        let boundary = capture(&shape).unwrap();
        let ring = boundary.outer_ring().unwrap();
        assert_eq!(ring.len(), 33);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn capture_rejects_degenerate_polygon() {
        let shape = DrawnShape::Polygon {
            ring: vec![GeoPoint::new(3.3, 6.5), GeoPoint::new(3.4, 6.5)],
        };
        assert!(matches!(
            capture(&shape),
            Err(BoundaryError::TooFewPoints { .. })
        ));
    }

    #[test]
    fn from_geojson_parses_and_closes_feature_polygon() {
        let raw = serde_json::json!({
            "type": "Feature",
            "properties": { "name": "Test Estate" },
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[3.3, 6.5], [3.4, 6.5], [3.4, 6.6]]]
            }
        })
        .to_string();
        let boundary = from_geojson(&raw).unwrap();
        let ring = boundary.outer_ring().unwrap();
        assert_eq!(ring.len(), 4);
        assert!(is_closed(ring));
    }

    #[test]
    fn from_geojson_rejects_point_geometry() {
        let raw = serde_json::json!({
            "type": "Point",
            "coordinates": [3.3, 6.5]
        })
        .to_string();
        assert!(matches!(
            from_geojson(&raw),
            Err(BoundaryError::Geometry { .. })
        ));
    }
}
