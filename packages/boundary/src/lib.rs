#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Boundary capture pipeline for neighborhood creation.
//!
//! Takes the shape a user drew on the map (polygon, rectangle, or
//! circle), turns it into a valid `GeoJSON` polygon with a closed
//! outer ring, and computes the centroid used for reverse geocoding.
//!
//! Circle tessellation uses an equirectangular approximation that is
//! only acceptable for small radii (neighborhood scale); it is not
//! geodesic. The centroid is the unweighted mean of ring vertices,
//! which can fall outside non-convex rings.

pub mod capture;
pub mod ring;
pub mod tessellate;

use thiserror::Error;

/// Errors that can occur while capturing a drawn boundary.
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// A polygon ring had fewer than 3 distinct vertices.
    #[error("Ring has only {count} distinct points; a polygon needs at least 3")]
    TooFewPoints {
        /// Number of distinct vertices found.
        count: usize,
    },

    /// A circle radius was zero, negative, or non-finite.
    #[error("Invalid circle radius: {radius_m} m")]
    InvalidRadius {
        /// The offending radius in meters.
        radius_m: f64,
    },

    /// A circle center was at or beyond a pole, where the longitude
    /// scale factor degenerates.
    #[error("Circle center latitude {lat} is outside (-90, 90)")]
    PolarCenter {
        /// The offending center latitude in degrees.
        lat: f64,
    },

    /// A rectangle had zero or inverted extent.
    #[error("Degenerate rectangle: west={west}, south={south}, east={east}, north={north}")]
    DegenerateRectangle {
        /// Western edge longitude.
        west: f64,
        /// Southern edge latitude.
        south: f64,
        /// Eastern edge longitude.
        east: f64,
        /// Northern edge latitude.
        north: f64,
    },

    /// `GeoJSON` geometry could not be interpreted as a polygon.
    #[error("Geometry error: {message}")]
    Geometry {
        /// Description of what went wrong.
        message: String,
    },

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
