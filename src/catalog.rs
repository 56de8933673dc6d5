//! The species catalog as seen by consumers.
//!
//! UI layers and the MCP server depend on [`Catalog`] rather than on the
//! HTTP client, so they can be driven by any source of species.

use async_trait::async_trait;

use crate::client::PokeApiClient;
use crate::error::Result;
use crate::models::Species;
use crate::traits::{Count, Get};

/// Read-only access to a species catalog.
///
/// Every call is an independent round-trip; nothing is cached between calls.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Total number of species in the catalog.
    async fn count(&self) -> Result<u64>;

    /// Fetch one species by its numeric id.
    async fn fetch_by_id(&self, id: u32) -> Result<Species>;
}

#[async_trait]
impl Catalog for PokeApiClient {
    async fn count(&self) -> Result<u64> {
        <Species as Count>::count(self).await
    }

    async fn fetch_by_id(&self, id: u32) -> Result<Species> {
        Species::get(self, id).await
    }
}
