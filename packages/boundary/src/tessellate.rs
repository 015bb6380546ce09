//! Circle and rectangle tessellation into closed polygon rings.
//!
//! `GeoJSON` has no circle type, so drawn circles are approximated by
//! a fixed 32-segment polygon using an equirectangular projection
//! around the center. The error grows with radius and latitude; for
//! neighborhood-sized shapes (a few kilometers) it is well under the
//! backend's boundary tolerance.

use mecabal_boundary_models::GeoPoint;

use crate::BoundaryError;

/// Meters per degree of latitude (spherical approximation).
const METERS_PER_DEGREE: f64 = 111_320.0;

/// Number of segments in a tessellated circle. The resulting ring has
/// `CIRCLE_SEGMENTS + 1` vertices, closed by construction because the
/// final vertex is a copy of the first.
pub const CIRCLE_SEGMENTS: usize = 32;

/// Approximates a circle as a closed polygon ring.
///
/// Uses the equirectangular small-circle approximation:
/// `lat' = lat + (r / 111320) * cos(theta)` and
/// `lng' = lng + (r / (111320 * cos(lat * pi / 180))) * sin(theta)`.
///
/// # Errors
///
/// Returns [`BoundaryError::InvalidRadius`] for non-positive or
/// non-finite radii, and [`BoundaryError::PolarCenter`] when the
/// center latitude is outside (-90, 90).
pub fn circle_to_ring(center: GeoPoint, radius_m: f64) -> Result<Vec<[f64; 2]>, BoundaryError> {
    if !radius_m.is_finite() || radius_m <= 0.0 {
        return Err(BoundaryError::InvalidRadius { radius_m });
    }
    if center.lat.abs() >= 90.0 {
        return Err(BoundaryError::PolarCenter { lat: center.lat });
    }

    let lat_scale = radius_m / METERS_PER_DEGREE;
    let lng_scale = radius_m / (METERS_PER_DEGREE * center.lat.to_radians().cos());

    let mut ring = Vec::with_capacity(CIRCLE_SEGMENTS + 1);
    for step in 0..CIRCLE_SEGMENTS {
        #[allow(clippy::cast_precision_loss)]
        let theta = std::f64::consts::TAU * (step as f64) / (CIRCLE_SEGMENTS as f64);
        let lat = center.lat + lat_scale * theta.cos();
        let lng = center.lng + lng_scale * theta.sin();
        ring.push([lng, lat]);
    }
    // Copy the first vertex rather than sampling at TAU: sin(TAU) is
    // not exactly zero in floating point, so a computed closing
    // vertex can differ from the first one near longitude 0.
    ring.push(ring[0]);

    Ok(ring)
}

/// Converts an axis-aligned rectangle into a closed 5-vertex ring,
/// counter-clockwise from the southwest corner.
///
/// # Errors
///
/// Returns [`BoundaryError::DegenerateRectangle`] when the extent is
/// empty or inverted.
pub fn rectangle_to_ring(
    west: f64,
    south: f64,
    east: f64,
    north: f64,
) -> Result<Vec<[f64; 2]>, BoundaryError> {
    if west >= east || south >= north {
        return Err(BoundaryError::DegenerateRectangle {
            west,
            south,
            east,
            north,
        });
    }

    Ok(vec![
        [west, south],
        [east, south],
        [east, north],
        [west, north],
        [west, south],
    ])
}
