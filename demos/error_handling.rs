//! Error handling example for citymatch-rs
//!
//! Shows how each failure mode surfaces to the caller.

use citymatch_rs::{parse_search_response, CityClient, CityError, ClientConfig};
use std::time::Duration;

fn describe(err: &CityError) -> &'static str {
    match err {
        CityError::Status { .. } => "non-success HTTP status",
        CityError::Shape(_) => "response is missing an expected key",
        CityError::Decode(_) => "response is not JSON",
        CityError::Transport(_) => "network failure",
    }
}

fn main() {
    println!("=== citymatch-rs Error Handling Example ===\n");

    println!("--- Example 1: Malformed bodies ---");
    for body in [
        r#"{"count":0}"#,
        r#"{"_embedded":{"city:search-results":[{"name":"x"}]}}"#,
        "<html></html>",
    ] {
        match parse_search_response(body) {
            Ok(names) => println!("  ok: {names}"),
            Err(e) => println!("  {}: {e}", describe(&e)),
        }
    }
    println!();

    println!("--- Example 2: Unreachable host ---");
    let config = ClientConfig::default()
        .with_base_url("http://127.0.0.1:9")
        .with_timeout(Duration::from_secs(2));
    match CityClient::new(config).and_then(|c| c.get_cities("Berlin")) {
        Ok(out) => println!("  ok: {out}"),
        Err(e) => println!("  {}: {e}", describe(&e)),
    }
}
