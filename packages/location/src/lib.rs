#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Reconciles free-text reverse-geocode results against the reference
//! State and LGA lists fetched from the backend.
//!
//! The geocoder returns whatever strings its provider produces
//! ("Lagos", "Ikeja LCDA", ...); matching is heuristic:
//!
//! - **States**: case-insensitive equality against the official name.
//! - **LGAs**: case-insensitive containment. The geocoded text must
//!   contain the reference name ("Ikeja LCDA" matches "Ikeja"; the
//!   reverse direction does not).
//!
//! First match wins in both cases; there is no disambiguation when
//! several reference names appear in the same geocoded string.

pub mod reconcile;

pub use reconcile::{match_lga, match_state, reconcile};
