//! Mock PokeAPI catalog server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the species
//! endpoints of the catalog. Unlike wiremock which mocks at the HTTP level
//! per-test, this server maintains state across requests, so tests can
//! change the catalog between calls.
//!
//! # Example
//!
//! ```ignore
//! use pokeapi::mock_server::MockServer;
//! use pokeapi::{PokeApiClient, Species, Get};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = PokeApiClient::new(server.url(), "http://sprites.test/").unwrap();
//!
//!     // Server comes with default fixtures
//!     let species = Species::get(&client, 25).await.unwrap();
//!     assert_eq!(species.name, "pikachu");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::Fixtures;
pub use server::MockServer;
pub use state::MockState;
