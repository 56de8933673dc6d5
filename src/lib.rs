//! PokeAPI species catalog client library.
//!
//! A small Rust library for reading the PokeAPI species catalog using a
//! trait-based architecture where each operation (Get, Count) is defined
//! as a trait that entity types implement.
//!
//! # Quick Start
//!
//! ```no_run
//! use pokeapi::{Count, Get, PokeApiClient, Species};
//!
//! #[tokio::main]
//! async fn main() -> pokeapi::Result<()> {
//!     // Create client from environment variables
//!     let client = PokeApiClient::from_env()?;
//!
//!     // How many species are there?
//!     let total = Species::count(&client).await?;
//!     println!("{total} species");
//!
//!     // Fetch one by national dex number
//!     let pikachu = Species::get(&client, 25).await?;
//!     println!("{pikachu} -> {}", pikachu.image_url);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`Get`] - Fetch a single entity by ID
//! - [`Count`] - Fetch the size of a collection with a zero-result query
//! - [`Catalog`] - The `{count, fetch_by_id}` capability set consumers
//!   depend on, implemented by [`PokeApiClient`]
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `POKEAPI_URL` (optional) - Catalog base URL (defaults to `https://pokeapi.co/api/v2/`)
//! - `POKEAPI_SPRITE_URL` (optional) - Sprite asset base URL
//! - `POKEAPI_TIMEOUT_SECS` (optional) - Request timeout (defaults to 30)

mod catalog;
mod client;
mod config;
mod error;
mod models;
mod traits;

pub mod cli;
pub mod mcp;
pub mod output;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use catalog::Catalog;
pub use client::PokeApiClient;
pub use config::{ClientConfig, DEFAULT_API_URL, DEFAULT_SPRITE_URL, DEFAULT_TIMEOUT};
pub use error::{PokeApiError, Result};

// Re-export traits
pub use traits::{Count, Get};

// Re-export models
pub use models::Species;
