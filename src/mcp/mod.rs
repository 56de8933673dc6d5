//! MCP (Model Context Protocol) server and tool types.
//!
//! This module exposes the species catalog to MCP clients as two tools,
//! `count` and `get`.
//!
//! # Example
//!
//! ```no_run
//! use pokeapi::mcp::PokeApiServer;
//!
//! # fn main() -> pokeapi::Result<()> {
//! let server = PokeApiServer::from_env()?;
//! // Server can now be used with rmcp transport
//! # Ok(())
//! # }
//! ```

mod params;
mod server;

pub use params::*;
pub use server::PokeApiServer;
