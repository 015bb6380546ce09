#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geometry DTOs for drawn neighborhood boundaries.
//!
//! These types mirror what the map drawing surface hands over (a
//! polygon, rectangle, or circle) and what the backend accepts (a
//! `GeoJSON` polygon with a single outer ring in `[lng, lat]` order).

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate in `[lng, lat]` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Longitude in degrees.
    pub lng: f64,
    /// Latitude in degrees.
    pub lat: f64,
}

impl GeoPoint {
    /// Creates a point from longitude and latitude.
    #[must_use]
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Returns the `[lng, lat]` pair used in `GeoJSON` coordinates.
    #[must_use]
    pub const fn to_pair(self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// Creates a point from a `GeoJSON` `[lng, lat]` pair.
    #[must_use]
    pub const fn from_pair(pair: [f64; 2]) -> Self {
        Self {
            lng: pair[0],
            lat: pair[1],
        }
    }
}

/// A shape as produced by the map drawing surface.
///
/// Polygons arrive as an (ideally closed) vertex ring; rectangles as
/// their bounding edges; circles as a center and radius in meters, to
/// be tessellated into a polygon before submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawnShape {
    /// Hand-drawn polygon. The ring may or may not be closed.
    Polygon {
        /// Vertices in draw order, `[lng, lat]`.
        ring: Vec<GeoPoint>,
    },
    /// Axis-aligned rectangle from the drawing tool.
    Rectangle {
        /// Western edge longitude.
        west: f64,
        /// Southern edge latitude.
        south: f64,
        /// Eastern edge longitude.
        east: f64,
        /// Northern edge latitude.
        north: f64,
    },
    /// Circle from the drawing tool, approximated as a polygon later.
    Circle {
        /// Circle center.
        center: GeoPoint,
        /// Radius in meters.
        radius_m: f64,
    },
}

/// The `GeoJSON` geometry type of a submitted boundary.
///
/// The backend only accepts polygons; this exists so the serialized
/// `"type"` field is validated rather than carried as a free string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeometryKind {
    /// `GeoJSON` `Polygon`.
    Polygon,
}

/// A neighborhood boundary ready for submission.
///
/// `GeoJSON` polygon with a single outer ring. The first and last
/// coordinate of the ring are guaranteed equal by the capture
/// pipeline before this type reaches the API client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    /// Always [`GeometryKind::Polygon`].
    #[serde(rename = "type")]
    pub kind: GeometryKind,
    /// Linear rings; only the outer ring (index 0) is used.
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

impl Boundary {
    /// Wraps a closed outer ring as a polygon boundary.
    #[must_use]
    pub fn from_outer_ring(ring: Vec<[f64; 2]>) -> Self {
        Self {
            kind: GeometryKind::Polygon,
            coordinates: vec![ring],
        }
    }

    /// Returns the outer ring, if present.
    #[must_use]
    pub fn outer_ring(&self) -> Option<&[[f64; 2]]> {
        self.coordinates.first().map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_serializes_as_geojson_polygon() {
        let boundary = Boundary::from_outer_ring(vec![
            [3.3, 6.5],
            [3.4, 6.5],
            [3.4, 6.6],
            [3.3, 6.5],
        ]);
        let json = serde_json::to_value(&boundary).unwrap();
        assert_eq!(json["type"], "Polygon");
        assert_eq!(json["coordinates"][0][0][0], 3.3);
        assert_eq!(json["coordinates"][0][0][1], 6.5);
    }

    #[test]
    fn drawn_shape_roundtrips_tagged() {
        let shape = DrawnShape::Circle {
            center: GeoPoint::new(3.3, 6.5),
            radius_m: 500.0,
        };
        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(json["type"], "circle");
        let back: DrawnShape = serde_json::from_value(json).unwrap();
        assert_eq!(back, shape);
    }
}
