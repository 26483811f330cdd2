//! Habitat enrichment from the species record. Never fails: anything that
//! goes wrong reads as "Unknown".

use crate::api::PokeApi;
use crate::card::capitalize;

pub const UNKNOWN_HABITAT: &str = "Unknown";

pub async fn fetch_habitat(api: &PokeApi, species_url: &str) -> String {
    match api.fetch_species(species_url).await {
        Ok(species) => species
            .habitat
            .map(|name| capitalize(&name))
            .unwrap_or_else(|| UNKNOWN_HABITAT.to_string()),
        Err(error) => {
            tracing::warn!(%error, "could not fetch habitat");
            UNKNOWN_HABITAT.to_string()
        }
    }
}

/// Habitat for a record that may lack a species link.
pub async fn habitat_for(api: &PokeApi, species_url: Option<&str>) -> String {
    match species_url {
        Some(url) => fetch_habitat(api, url).await,
        None => UNKNOWN_HABITAT.to_string(),
    }
}
