#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Neighborhood creation wizard.
//!
//! Orchestrates the one round trip behind "draw your neighborhood":
//! capture the drawn shape as a closed `GeoJSON` polygon, reverse
//! geocode its centroid, pre-fill the State/LGA selectors from the
//! reference lists, and submit. Geocoding failures are survivable by
//! design; the user can always pick the administrative fields by
//! hand.

pub mod wizard;

use thiserror::Error;

pub use wizard::{CapturedArea, NeighborhoodDraft, ReferenceLists};

/// Errors from the creation wizard.
#[derive(Debug, Error)]
pub enum WizardError {
    /// The drawn shape could not be captured as a polygon.
    #[error("Boundary error: {0}")]
    Boundary(#[from] mecabal_boundary::BoundaryError),

    /// A backend call failed.
    #[error("API error: {0}")]
    Client(#[from] mecabal_client::ClientError),

    /// The captured boundary produced no centroid (empty ring).
    #[error("Captured boundary has no vertices")]
    EmptyBoundary,

    /// Submission was attempted without an LGA, which the backend
    /// requires. Reached only when geocoding matched nothing and the
    /// user skipped manual selection.
    #[error("No LGA selected; pick one manually before submitting")]
    MissingLga,
}
