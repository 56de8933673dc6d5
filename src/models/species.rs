//! Species model and trait implementations.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::PokeApiClient;
use crate::error::Result;
use crate::traits::{Count, Get};

/// Catalog path for species resources, relative to the API base URL.
const SPECIES_PATH: &str = "pokemon-species";

/// A Pokémon species as shown to users.
///
/// Only the name comes from the catalog; the image URL is derived from the
/// id, so `id` and `image_url` always agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    /// National dex number used to fetch this species.
    pub id: u32,

    /// Lowercase name as returned by the catalog (e.g. "pikachu").
    pub name: String,

    /// Sprite image URL.
    pub image_url: String,
}

impl Species {
    /// Name with its first character upper-cased and the rest unchanged.
    ///
    /// An empty name yields an empty string.
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.id, self.display_name())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// API response for `GET pokemon-species?limit=0`.
#[derive(Debug, Deserialize)]
struct SpeciesCountResponse {
    count: u64,
}

/// API response for `GET pokemon-species/{id}`.
#[derive(Debug, Deserialize)]
struct SpeciesResponse {
    name: String,
}

#[async_trait]
impl Get for Species {
    type Id = u32; // National dex number

    #[tracing::instrument(skip(client))]
    async fn get(client: &PokeApiClient, id: u32) -> Result<Self> {
        let path = format!("{SPECIES_PATH}/{id}");

        let response = client.get(&path).await?;
        let data: SpeciesResponse = PokeApiClient::read_json(response).await?;

        Ok(Species {
            id,
            name: data.name,
            image_url: client.sprite_url(id),
        })
    }
}

#[async_trait]
impl Count for Species {
    #[tracing::instrument(skip(client))]
    async fn count(client: &PokeApiClient) -> Result<u64> {
        let response = client
            .get_with_query(SPECIES_PATH, &[("limit", 0u32)])
            .await?;
        let data: SpeciesCountResponse = PokeApiClient::read_json(response).await?;
        Ok(data.count)
    }
}
