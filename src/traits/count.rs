//! Count trait for sizing a collection without fetching it.

use async_trait::async_trait;

use crate::client::PokeApiClient;
use crate::error::Result;

/// Report how many entities of a type the catalog holds.
///
/// Implementations issue a zero-result query and read the total from the
/// response rather than walking pages.
#[async_trait]
pub trait Count {
    /// Fetch the total number of entities.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the total is missing from
    /// the response.
    async fn count(client: &PokeApiClient) -> Result<u64>;
}
