//! PokeAPI client

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;
use crate::state::{CreatureRecord, CreatureStat, SpeciesRecord};

pub const API_BASE: &str = "https://pokeapi.co/api/v2";

#[derive(Clone, Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Clone, Debug, Deserialize)]
struct ApiResource {
    url: String,
}

#[derive(Clone, Debug, Deserialize)]
struct ListResponse {
    results: Vec<NamedResource>,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonResponse {
    id: u32,
    name: String,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    weight: u32,
    #[serde(default)]
    stats: Vec<PokemonStatSlot>,
    #[serde(default)]
    types: Vec<PokemonTypeSlot>,
    #[serde(default)]
    sprites: serde_json::Value,
    species: Option<ApiResource>,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonStatSlot {
    base_stat: u32,
    stat: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonTypeSlot {
    #[serde(rename = "type")]
    type_info: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonSpeciesResponse {
    #[serde(default)]
    habitat: Option<NamedResource>,
}

/// Handle to the API. Cloning shares the underlying connection pool.
#[derive(Clone, Debug)]
pub struct PokeApi {
    client: reqwest::Client,
    base_url: String,
}

impl Default for PokeApi {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

impl PokeApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /pokemon?limit={limit}`, names only, in listing order.
    pub async fn fetch_names(&self, limit: u32) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/pokemon?limit={limit}", self.base_url);
        let response: ListResponse = self.fetch_json(&url).await?;
        Ok(response
            .results
            .into_iter()
            .map(|entry| entry.name)
            .collect())
    }

    /// `GET /pokemon/{identifier}`. The identifier is encoded as a single
    /// path segment, so `/`, `?` and `#` in input never reach another route.
    pub async fn fetch_creature(&self, identifier: &str) -> Result<CreatureRecord, ApiError> {
        let url = format!(
            "{}/pokemon/{}",
            self.base_url,
            urlencoding::encode(identifier)
        );
        let response: PokemonResponse = self.fetch_json(&url).await?;

        let stats = response
            .stats
            .into_iter()
            .map(|slot| CreatureStat {
                name: slot.stat.name,
                base: slot.base_stat,
            })
            .collect();
        let types = response
            .types
            .into_iter()
            .map(|slot| slot.type_info.name)
            .collect();

        Ok(CreatureRecord {
            id: response.id,
            name: response.name,
            height: response.height,
            weight: response.weight,
            stats,
            types,
            sprite: pointer_string(&response.sprites, "/front_default"),
            species_url: response.species.map(|species| species.url),
        })
    }

    /// `GET {url}` where `url` is the species link from a creature record.
    pub async fn fetch_species(&self, url: &str) -> Result<SpeciesRecord, ApiError> {
        let response: PokemonSpeciesResponse = self.fetch_json(url).await?;
        Ok(SpeciesRecord {
            habitat: response.habitat.map(|habitat| habitat.name),
        })
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.json().await.map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

fn pointer_string(value: &serde_json::Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(|val| val.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}
