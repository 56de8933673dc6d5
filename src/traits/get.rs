//! Get trait for fetching single entities.

use async_trait::async_trait;

use crate::client::PokeApiClient;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// Implement this trait for entity types that can be fetched individually
/// by a unique identifier.
///
/// # Example
///
/// ```ignore
/// use pokeapi::{PokeApiClient, Species, Get};
///
/// let client = PokeApiClient::from_env()?;
/// let pikachu = Species::get(&client, 25).await?;
/// ```
#[async_trait]
pub trait Get: Sized {
    /// The ID type for this entity.
    type Id;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found, the request fails,
    /// or the response cannot be parsed.
    async fn get(client: &PokeApiClient, id: Self::Id) -> Result<Self>;
}
