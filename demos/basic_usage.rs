//! Basic usage example for citymatch-rs
//!
//! Looks up a keyword (default: Berlin) against the public API.

use citymatch_rs::{get_cities, CityClient, ClientConfig, Result};

fn main() -> Result<()> {
    let keyword = std::env::args().nth(1).unwrap_or_else(|| "Berlin".to_string());

    println!("=== citymatch-rs Basic Usage ===\n");

    // One-shot lookup, rendered as a list literal
    println!("--- get_cities({keyword:?}) ---");
    println!("{}\n", get_cities(&keyword)?);

    // Reusable client with typed results
    let client = CityClient::new(ClientConfig::default())?;
    println!("--- {} ---", client.search_url(&keyword));
    let names = client.search(&keyword)?;
    println!("{} match(es):", names.len());
    for (i, name) in names.iter().enumerate() {
        println!("  {}. {name}", i + 1);
    }

    Ok(())
}
