//! Basic example demonstrating the PokeAPI client.
//!
//! Run with:
//! ```
//! cargo run --example basic
//! ```

use pokeapi::{Count, Get, PokeApiClient, Species};

#[tokio::main]
async fn main() -> pokeapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    let client = PokeApiClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    println!("\n--- Counting Species ---");
    let total = Species::count(&client).await?;
    println!("The catalog holds {total} species");

    println!("\n--- Getting Species #25 ---");
    let pikachu = Species::get(&client, 25).await?;
    println!("{pikachu}");
    println!("  Name:  {}", pikachu.name);
    println!("  Image: {}", pikachu.image_url);

    Ok(())
}
