//! Linear ring utilities: closure and centroid.
//!
//! The drawing surface does not guarantee closed rings (hand-edited
//! polygons and older exports often omit the closing vertex), so
//! closure is re-applied here before every submission.

use mecabal_boundary_models::GeoPoint;

use crate::BoundaryError;

/// Returns whether the ring's first and last coordinates are equal.
#[must_use]
pub fn is_closed(ring: &[[f64; 2]]) -> bool {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) => first == last,
        _ => false,
    }
}

/// Closes a ring in place by appending the first vertex if the ring
/// does not already end with it.
///
/// # Errors
///
/// Returns [`BoundaryError::TooFewPoints`] if the ring has fewer than
/// 3 distinct vertices.
pub fn close_ring(ring: &mut Vec<[f64; 2]>) -> Result<(), BoundaryError> {
    let distinct = if is_closed(ring) {
        ring.len() - 1
    } else {
        ring.len()
    };
    if distinct < 3 {
        return Err(BoundaryError::TooFewPoints { count: distinct });
    }

    if !is_closed(ring) {
        ring.push(ring[0]);
    }
    Ok(())
}

/// Computes the unweighted arithmetic mean of ring vertices.
///
/// The closing duplicate vertex is excluded so it does not double
/// weight the first point. This is NOT the area-weighted centroid and
/// can fall outside non-convex rings; callers that care should check
/// containment separately.
#[must_use]
pub fn ring_centroid(ring: &[[f64; 2]]) -> Option<GeoPoint> {
    let vertices = if ring.len() > 1 && is_closed(ring) {
        &ring[..ring.len() - 1]
    } else {
        ring
    };
    if vertices.is_empty() {
        return None;
    }

    let (sum_lng, sum_lat) = vertices
        .iter()
        .fold((0.0, 0.0), |(lng, lat), v| (lng + v[0], lat + v[1]));

    #[allow(clippy::cast_precision_loss)]
    let n = vertices.len() as f64;
    Some(GeoPoint::new(sum_lng / n, sum_lat / n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closes_open_ring() {
        let mut ring = vec![[3.3, 6.5], [3.4, 6.5], [3.4, 6.6]];
        close_ring(&mut ring).unwrap();
        assert_eq!(ring.len(), 4);
        assert_eq!(ring[0], ring[3]);
    }

    #[test]
    fn leaves_closed_ring_alone() {
        let mut ring = vec![[3.3, 6.5], [3.4, 6.5], [3.4, 6.6], [3.3, 6.5]];
        close_ring(&mut ring).unwrap();
        assert_eq!(ring.len(), 4);
    }

    #[test]
    fn rejects_two_point_ring() {
        let mut ring = vec![[3.3, 6.5], [3.4, 6.5]];
        let err = close_ring(&mut ring).unwrap_err();
        assert!(matches!(err, BoundaryError::TooFewPoints { count: 2 }));
    }

    #[test]
    fn rejects_closed_two_point_ring() {
        // Closing duplicate must not count as a third distinct vertex.
        let mut ring = vec![[3.3, 6.5], [3.4, 6.5], [3.3, 6.5]];
        let err = close_ring(&mut ring).unwrap_err();
        assert!(matches!(err, BoundaryError::TooFewPoints { count: 2 }));
    }

    #[test]
    fn centroid_is_vertex_mean() {
        let ring = vec![[0.0, 0.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]];
        let c = ring_centroid(&ring).unwrap();
        assert!((c.lng - 1.0).abs() < 1e-12);
        assert!((c.lat - 1.0).abs() < 1e-12);
    }

    #[test]
    fn centroid_excludes_closing_duplicate() {
        let open = vec![[0.0, 0.0], [3.0, 0.0], [0.0, 3.0]];
        let closed = vec![[0.0, 0.0], [3.0, 0.0], [0.0, 3.0], [0.0, 0.0]];
        let a = ring_centroid(&open).unwrap();
        let b = ring_centroid(&closed).unwrap();
        assert!((a.lng - b.lng).abs() < 1e-12);
        assert!((a.lat - b.lat).abs() < 1e-12);
        assert!((a.lng - 1.0).abs() < 1e-12);
    }

    #[test]
    fn centroid_of_empty_ring_is_none() {
        assert!(ring_centroid(&[]).is_none());
    }

    #[test]
    fn mean_centroid_of_l_shape_documented_behavior() {
        // An L-shaped (non-convex) ring: the vertex mean is pulled
        // toward the vertex-dense corner, unlike an area centroid.
        let ring = vec![
            [0.0, 0.0],
            [4.0, 0.0],
            [4.0, 1.0],
            [1.0, 1.0],
            [1.0, 4.0],
            [0.0, 4.0],
        ];
        let c = ring_centroid(&ring).unwrap();
        assert!((c.lng - (10.0 / 6.0)).abs() < 1e-12);
        assert!((c.lat - (10.0 / 6.0)).abs() < 1e-12);
    }
}
