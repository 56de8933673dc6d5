//! PokeAPI CLI binary.
//!
//! A command-line interface for the PokeAPI species catalog.

use clap::Parser;
use pokeapi::cli::{Cli, Command};
use pokeapi::mcp::PokeApiServer;
use pokeapi::output::PrettyPrint;
use pokeapi::{Catalog, ClientConfig, PokeApiClient};
use rmcp::{transport::stdio, ServiceExt};
use std::process::ExitCode;
use tracing::Level;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries command output and MCP framing, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let client = match build_client(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Check POKEAPI_URL, POKEAPI_SPRITE_URL and POKEAPI_TIMEOUT_SECS");
            return ExitCode::FAILURE;
        }
    };

    match run(client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build_client(cli: &Cli) -> pokeapi::Result<PokeApiClient> {
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.api_url_override() {
        config = config.with_api_url(url);
    }
    PokeApiClient::with_config(config)
}

async fn run(client: PokeApiClient, cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Count => handle_count(&client, cli.json).await?,
        Command::Get { id } => handle_get(&client, id, cli.json).await?,
        Command::Serve => serve(client).await?,
    }
    Ok(())
}

async fn handle_count(catalog: &impl Catalog, json: bool) -> pokeapi::Result<()> {
    let count = catalog.count().await?;
    if json {
        println!("{}", serde_json::json!({ "count": count }));
    } else {
        println!("{count}");
    }
    Ok(())
}

async fn handle_get(catalog: &impl Catalog, id: u32, json: bool) -> pokeapi::Result<()> {
    let species = catalog.fetch_by_id(id).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&species)?);
    } else {
        println!("{}", species.pretty_print());
    }
    Ok(())
}

async fn serve(client: PokeApiClient) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(base_url = %client.base_url(), "serving MCP over stdio");
    let service = PokeApiServer::new(client).serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}

