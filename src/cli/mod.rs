//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the pokeapi binary.

use clap::{Parser, Subcommand};

/// PokeAPI species catalog command-line interface.
#[derive(Parser, Debug)]
#[command(name = "pokeapi", about = "PokeAPI species catalog CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of formatted text.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Log request details to stderr.
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    /// Catalog base URL.
    #[arg(long, global = true, env = "POKEAPI_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The `--api-url` override, if one was given with a non-empty value.
    ///
    /// An empty `POKEAPI_URL` reaches clap as `Some("")`; treat it as unset
    /// so the library default applies.
    pub fn api_url_override(&self) -> Option<&str> {
        self.api_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the number of species in the catalog.
    Count,

    /// Fetch a single species by its numeric id.
    Get {
        /// National dex number (1 or greater).
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        id: u32,
    },

    /// Serve the catalog as MCP tools over stdio.
    Serve,
}
