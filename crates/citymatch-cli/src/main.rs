//! citymatch — look up city names by keyword
//!
//! Usage examples
//! --------------
//!
//! - Search, printing the list literal
//!   $ citymatch search Berlin
//!   ['Berlin, Germany', 'Berlin, New Hampshire, US']
//!
//! - One name per line, keyword percent-encoded
//!   $ citymatch search "Trinidad & Tobago" --encode-keyword --format lines
//!
//! - Point at another host (or set CITYMATCH_BASE_URL)
//!   $ citymatch --base-url http://localhost:8080 search paris
//!
//! - Show the request URL only
//!   $ citymatch url Berlin
use anyhow::Context;
use citymatch_cli::args::{CliArgs, Commands};
use citymatch_cli::output;
use citymatch_core::CityClient;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let config = args.to_config();
    tracing::debug!(?config, "client configured");

    match args.command {
        Commands::Search { keyword, format } => {
            let client = CityClient::new(config).context("failed to build HTTP client")?;
            let names = client
                .search(&keyword)
                .with_context(|| format!("city search for {keyword:?} failed"))?;
            match output::render(&names, format)? {
                Some(text) => println!("{text}"),
                None => eprintln!("No cities found matching: {keyword}"),
            }
        }

        Commands::Url { keyword } => {
            println!("{}", config.search_url(&keyword));
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
