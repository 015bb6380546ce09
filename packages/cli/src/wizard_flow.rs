//! Interactive flows for the neighborhood wizard tools.

use dialoguer::{Confirm, Input, Select};
use mecabal_boundary::capture::from_geojson;
use mecabal_boundary_models::{DrawnShape, GeoPoint};
use mecabal_client::{ApiClient, ClientError};
use mecabal_location_models::Lga;
use mecabal_neighborhood::{NeighborhoodDraft, WizardError, wizard};
use mecabal_neighborhood_models::NeighborhoodKind;

/// Runs the full creation wizard.
pub async fn create(client: &ApiClient) -> Result<(), Box<dyn std::error::Error>> {
    let shape = prompt_shape()?;
    let area = wizard::capture_area(client, &shape).await?;

    println!("Captured boundary with {} vertices.", ring_len(&area));
    println!(
        "Centroid: {:.6}, {:.6}",
        area.centroid.lat, area.centroid.lng
    );

    match (&area.resolved.state, &area.resolved.lga) {
        (Some(state), Some(lga)) => {
            println!("Matched location: {} / {}", state.name, lga.name);
        }
        (Some(state), None) => {
            println!("Matched state {} but no LGA.", state.name);
        }
        _ => {
            println!(
                "Could not resolve the location automatically ({}).",
                area.resolved.fallback_label
            );
        }
    }

    let lga_override = if area.resolved.lga.is_none() {
        Some(prompt_lga(client, &area).await?)
    } else {
        None
    };

    let draft = prompt_draft()?;
    if !Confirm::new()
        .with_prompt(format!("Submit \"{}\"?", draft.name))
        .default(true)
        .interact()?
    {
        println!("Aborted.");
        return Ok(());
    }

    let request = wizard::build_submission(&area, &draft, lga_override.as_ref())?;
    let neighborhood = client.create_neighborhood(&request).await?;
    println!(
        "Created neighborhood {} ({})",
        neighborhood.name, neighborhood.id
    );
    Ok(())
}

/// Replaces the boundary of an existing neighborhood.
pub async fn edit_boundary(client: &ApiClient) -> Result<(), Box<dyn std::error::Error>> {
    let id: String = Input::new().with_prompt("Neighborhood ID").interact_text()?;

    match client.neighborhood(&id).await {
        Ok(existing) => println!("Editing boundary of {}", existing.name),
        Err(ClientError::NotFound { .. }) => {
            println!("No neighborhood with ID {id}; use the creation flow instead.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let shape = prompt_shape()?;
    let updated = wizard::update_boundary(client, &id, &shape).await?;
    println!("Updated boundary of {}", updated.name);
    Ok(())
}

/// Lists neighborhoods near a typed-in point.
pub async fn nearby(client: &ApiClient) -> Result<(), Box<dyn std::error::Error>> {
    let lat: f64 = Input::new().with_prompt("Latitude").interact_text()?;
    let lng: f64 = Input::new().with_prompt("Longitude").interact_text()?;
    let radius_m: f64 = Input::new()
        .with_prompt("Radius (meters)")
        .default(2000.0)
        .interact_text()?;

    let found = wizard::nearby(client, GeoPoint::new(lng, lat), radius_m).await?;
    if found.is_empty() {
        println!("Nothing registered nearby; you could be the first to create one.");
        return Ok(());
    }

    for nbhd in found {
        println!(
            "{} ({}, {} members)",
            nbhd.name,
            nbhd.kind,
            nbhd.member_count.unwrap_or(0)
        );
    }
    Ok(())
}

/// Prompts for the shape source: an exported `.geojson` file or
/// circle parameters.
fn prompt_shape() -> Result<DrawnShape, Box<dyn std::error::Error>> {
    let sources = ["GeoJSON file exported from the map", "Circle around a point"];
    let idx = Select::new()
        .with_prompt("Boundary source")
        .items(&sources)
        .default(0)
        .interact()?;

    if idx == 0 {
        let path: String = Input::new()
            .with_prompt("Path to .geojson file")
            .interact_text()?;
        let raw = std::fs::read_to_string(&path)?;
        let boundary = from_geojson(&raw)?;
        let ring = boundary
            .outer_ring()
            .ok_or_else(|| Box::new(WizardError::EmptyBoundary) as Box<dyn std::error::Error>)?
            .iter()
            .map(|p| GeoPoint::from_pair(*p))
            .collect();
        Ok(DrawnShape::Polygon { ring })
    } else {
        let lat: f64 = Input::new().with_prompt("Center latitude").interact_text()?;
        let lng: f64 = Input::new()
            .with_prompt("Center longitude")
            .interact_text()?;
        let radius_m: f64 = Input::new()
            .with_prompt("Radius (meters)")
            .default(500.0)
            .interact_text()?;
        Ok(DrawnShape::Circle {
            center: GeoPoint::new(lng, lat),
            radius_m,
        })
    }
}

/// Prompts for a manual LGA pick when reconciliation matched nothing.
async fn prompt_lga(
    client: &ApiClient,
    area: &wizard::CapturedArea,
) -> Result<Lga, Box<dyn std::error::Error>> {
    let lgas = if area.lgas.is_empty() {
        // No state matched either, so walk the hierarchy manually.
        let states = client.states().await?;
        let names: Vec<&str> = states.iter().map(|s| s.name.as_str()).collect();
        let idx = Select::new()
            .with_prompt("Select state")
            .items(&names)
            .interact()?;
        client.lgas(states[idx].id).await?
    } else {
        area.lgas.clone()
    };

    let names: Vec<&str> = lgas.iter().map(|l| l.name.as_str()).collect();
    let idx = Select::new()
        .with_prompt("Select LGA")
        .items(&names)
        .interact()?;
    Ok(lgas[idx].clone())
}

/// Prompts for the non-map fields of the wizard.
fn prompt_draft() -> Result<NeighborhoodDraft, Box<dyn std::error::Error>> {
    let name: String = Input::new()
        .with_prompt("Neighborhood name")
        .interact_text()?;

    let kinds = [
        NeighborhoodKind::Area,
        NeighborhoodKind::Estate,
        NeighborhoodKind::Community,
    ];
    let labels: Vec<String> = kinds.iter().map(ToString::to_string).collect();
    let idx = Select::new()
        .with_prompt("Kind")
        .items(&labels)
        .default(0)
        .interact()?;

    let is_gated = Confirm::new()
        .with_prompt("Is access gated?")
        .default(false)
        .interact()?;

    let description: String = Input::new()
        .with_prompt("Description (empty to skip)")
        .allow_empty(true)
        .interact_text()?;

    Ok(NeighborhoodDraft {
        name,
        kind: kinds[idx],
        is_gated,
        description: if description.is_empty() {
            None
        } else {
            Some(description)
        },
    })
}

fn ring_len(area: &wizard::CapturedArea) -> usize {
    area.boundary.outer_ring().map_or(0, <[[f64; 2]]>::len)
}
