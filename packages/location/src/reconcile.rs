//! State/LGA matching against geocoded free text.

use mecabal_boundary_models::GeoPoint;
use mecabal_location_models::{Lga, LocationData, ResolvedLocation, State};

/// Finds the state whose name equals the geocoded text,
/// case-insensitively. First match wins.
#[must_use]
pub fn match_state<'a>(states: &'a [State], text: &str) -> Option<&'a State> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    states.iter().find(|s| s.name.to_lowercase() == needle)
}

/// Finds the first LGA whose name is contained in the geocoded text,
/// case-insensitively.
///
/// Containment runs in this direction because geocoders decorate the
/// name ("Ikeja LCDA", "Ikeja Local Government Area") while the
/// reference list stores the bare name.
#[must_use]
pub fn match_lga<'a>(lgas: &'a [Lga], text: &str) -> Option<&'a Lga> {
    let haystack = text.trim().to_lowercase();
    if haystack.is_empty() {
        return None;
    }
    lgas.iter()
        .find(|lga| haystack.contains(&lga.name.to_lowercase()))
}

/// Applies both matchers to a reverse-geocode payload.
///
/// When neither a formatted address nor any matchable field came
/// back, the fallback label is the raw coordinate pair so the caller
/// can still show something and let the user pick manually.
#[must_use]
pub fn reconcile(
    states: &[State],
    lgas: &[Lga],
    data: &LocationData,
    point: GeoPoint,
) -> ResolvedLocation {
    let state = data
        .state
        .as_deref()
        .and_then(|text| match_state(states, text))
        .cloned();

    let lga = data
        .lga
        .as_deref()
        .and_then(|text| match_lga(lgas, text))
        .cloned();

    if state.is_none() && data.state.is_some() {
        log::debug!("Geocoded state {:?} matched no reference state", data.state);
    }
    if lga.is_none() && data.lga.is_some() {
        log::debug!("Geocoded LGA {:?} matched no reference LGA", data.lga);
    }

    let fallback_label = data.formatted_address.clone().unwrap_or_else(|| {
        format!("{lat:.6}, {lng:.6}", lat = point.lat, lng = point.lng)
    });

    ResolvedLocation {
        state,
        lga,
        fallback_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mecabal_location_models::LgaKind;

    fn states() -> Vec<State> {
        vec![
            State {
                id: 1,
                name: "Lagos".to_string(),
            },
            State {
                id: 2,
                name: "Ogun".to_string(),
            },
        ]
    }

    fn lgas() -> Vec<Lga> {
        vec![
            Lga {
                id: "a".to_string(),
                name: "Ikeja".to_string(),
                kind: LgaKind::Lga,
            },
            Lga {
                id: "b".to_string(),
                name: "Eti-Osa".to_string(),
                kind: LgaKind::Lga,
            },
        ]
    }

    #[test]
    fn state_match_is_case_insensitive_equality() {
        let states = states();
        let hit = match_state(&states, "lagos").unwrap();
        assert_eq!(hit.id, 1);
        // Substring is not enough for states.
        assert!(match_state(&states, "lagos state").is_none());
    }

    #[test]
    fn lga_match_is_containment_of_reference_in_text() {
        let lgas = lgas();
        let hit = match_lga(&lgas, "Ikeja LCDA").unwrap();
        assert_eq!(hit.id, "a");
        // The reverse direction must not match: "Ikeja" does not
        // contain "Ikeja LCDA", and a bare reference name longer than
        // the geocoded text never matches.
        assert!(match_lga(&lgas, "Eti").is_none());
    }

    #[test]
    fn first_lga_match_wins() {
        let lgas = vec![
            Lga {
                id: "a".to_string(),
                name: "Ikeja".to_string(),
                kind: LgaKind::Lga,
            },
            Lga {
                id: "b".to_string(),
                name: "Ikeja".to_string(),
                kind: LgaKind::Lcda,
            },
        ];
        let hit = match_lga(&lgas, "Somewhere in Ikeja").unwrap();
        assert_eq!(hit.id, "a");
    }

    #[test]
    fn empty_text_matches_nothing() {
        assert!(match_state(&states(), "  ").is_none());
        assert!(match_lga(&lgas(), "").is_none());
    }

    #[test]
    fn reconcile_fills_both_fields() {
        let data = LocationData {
            state: Some("lagos".to_string()),
            lga: Some("Ikeja LCDA".to_string()),
            city: None,
            formatted_address: Some("Ikeja, Lagos, Nigeria".to_string()),
        };
        let resolved = reconcile(&states(), &lgas(), &data, GeoPoint::new(3.3, 6.5));
        assert_eq!(resolved.state.unwrap().id, 1);
        assert_eq!(resolved.lga.unwrap().id, "a");
        assert_eq!(resolved.fallback_label, "Ikeja, Lagos, Nigeria");
    }

    #[test]
    fn reconcile_falls_back_to_raw_coordinates() {
        let resolved = reconcile(
            &states(),
            &lgas(),
            &LocationData::default(),
            GeoPoint::new(3.3, 6.5),
        );
        assert!(resolved.state.is_none());
        assert!(resolved.lga.is_none());
        assert_eq!(resolved.fallback_label, "6.500000, 3.300000");
    }
}
