#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Administrative reference types for the Nigerian location hierarchy.
//!
//! States and Local Government Areas (LGAs) are reference lists served
//! by the backend; reverse geocoding returns free-text names that get
//! matched against them heuristically.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A Nigerian state as served by `/location/states`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    /// Backend identifier.
    pub id: i64,
    /// Official state name (e.g. "Lagos").
    pub name: String,
}

/// Kind of local government subdivision.
///
/// Lagos additionally has LCDAs (Local Council Development Areas)
/// carved out of LGAs; geocoders frequently return the LCDA name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LgaKind {
    /// Local Government Area.
    Lga,
    /// Local Council Development Area (Lagos only).
    Lcda,
}

/// A Local Government Area as served by `/location/states/{id}/lgas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lga {
    /// Backend identifier (opaque string).
    pub id: String,
    /// Official LGA name (e.g. "Ikeja").
    pub name: String,
    /// Whether this is an LGA proper or an LCDA.
    #[serde(rename = "type")]
    pub kind: LgaKind,
}

/// Free-text administrative fields from a reverse geocode.
///
/// All fields are optional; geocoders return whatever they can
/// resolve for the coordinate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationData {
    /// Geocoded state name, if resolved.
    pub state: Option<String>,
    /// Geocoded LGA name, if resolved. Often decorated (e.g.
    /// "Ikeja LCDA") rather than the bare reference name.
    pub lga: Option<String>,
    /// Geocoded city or locality name.
    pub city: Option<String>,
    /// Full human-readable address line.
    pub formatted_address: Option<String>,
}

/// Outcome of matching geocoded text against the reference lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLocation {
    /// Matched state record, if any.
    pub state: Option<State>,
    /// Matched LGA record, if any.
    pub lga: Option<Lga>,
    /// What to show the user: the formatted address when available,
    /// otherwise the raw coordinates so manual selection can proceed.
    pub fallback_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lga_deserializes_backend_shape() {
        let json = serde_json::json!({
            "id": "lga-24",
            "name": "Ikeja",
            "type": "LGA"
        });
        let lga: Lga = serde_json::from_value(json).unwrap();
        assert_eq!(lga.kind, LgaKind::Lga);
        assert_eq!(lga.name, "Ikeja");
    }

    #[test]
    fn location_data_tolerates_missing_fields() {
        let data: LocationData = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(data.state.is_none());
        assert!(data.lga.is_none());
    }
}
