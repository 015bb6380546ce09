#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Interactive CLI for the MeCabal neighborhood wizard.
//!
//! Drives the same flows the web app offers: create a neighborhood
//! from a drawn shape (exported as `.geojson` or entered as circle
//! parameters), replace an existing neighborhood's boundary, and look
//! up what is already registered near a point.
//!
//! Configuration comes from `mecabal.toml` in the working directory
//! plus `MECABAL_API_URL` / `MECABAL_API_TOKEN` overrides.

mod wizard_flow;

use dialoguer::{Input, Password, Select};
use mecabal_client::{ApiClient, ClientConfig};
use mecabal_client_models::auth::LoginRequest;

/// Top-level tool selection.
enum Tool {
    CreateNeighborhood,
    EditBoundary,
    NearbyLookup,
}

impl Tool {
    const ALL: &[Self] = &[
        Self::CreateNeighborhood,
        Self::EditBoundary,
        Self::NearbyLookup,
    ];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::CreateNeighborhood => "Create a neighborhood",
            Self::EditBoundary => "Edit a neighborhood boundary",
            Self::NearbyLookup => "Find neighborhoods near a point",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let config = ClientConfig::load(Some(std::path::Path::new("mecabal.toml")))?;
    let mut client = ApiClient::new(&config)?;

    if !client.is_authenticated() {
        client = login(client).await?;
    }

    println!("MeCabal Neighborhood Wizard");
    println!();

    let labels: Vec<&str> = Tool::ALL.iter().map(Tool::label).collect();
    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match Tool::ALL[idx] {
        Tool::CreateNeighborhood => wizard_flow::create(&client).await?,
        Tool::EditBoundary => wizard_flow::edit_boundary(&client).await?,
        Tool::NearbyLookup => wizard_flow::nearby(&client).await?,
    }

    Ok(())
}

/// Prompts for credentials and attaches the resulting session.
async fn login(client: ApiClient) -> Result<ApiClient, Box<dyn std::error::Error>> {
    let identifier: String = Input::new()
        .with_prompt("Email or phone number")
        .interact_text()?;
    let password = Password::new().with_prompt("Password").interact()?;

    let session = client
        .login(&LoginRequest {
            identifier,
            password,
        })
        .await?;

    log::info!("Logged in");
    Ok(client.with_session(session))
}
