use citymatch_core::{ClientConfig, KeywordEncoding};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::time::Duration;

/// CLI arguments for citymatch-cli
#[derive(Debug, Parser)]
#[command(
    name = "citymatch",
    version,
    about = "Look up city names by keyword via the Teleport city-search API"
)]
pub struct CliArgs {
    /// Base URL of the city-search API
    #[arg(
        long = "base-url",
        env = "CITYMATCH_BASE_URL",
        default_value = citymatch_core::DEFAULT_BASE_URL,
        global = true
    )]
    pub base_url: String,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long = "timeout", env = "CITYMATCH_TIMEOUT_SECS", global = true)]
    pub timeout: Option<u64>,

    /// Percent-encode the keyword before putting it in the URL
    #[arg(long = "encode-keyword", global = true)]
    pub encode_keyword: bool,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    /// Client settings from the global flags (or their environment fallbacks).
    pub fn to_config(&self) -> ClientConfig {
        let mut config = ClientConfig::default().with_base_url(self.base_url.clone());
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if self.encode_keyword {
            config = config.with_keyword_encoding(KeywordEncoding::Percent);
        }
        config
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search for cities matching a keyword
    Search {
        /// Keyword sent as the `search` query parameter
        keyword: String,

        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::List)]
        format: OutputFormat,
    },

    /// Print the request URL for a keyword without sending it
    Url {
        /// Keyword sent as the `search` query parameter
        keyword: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// List literal, e.g. ['Berlin, Germany']
    List,
    /// One name per line
    Lines,
    /// JSON array
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_defaults_to_list_format() {
        let args = CliArgs::try_parse_from(["citymatch", "search", "Berlin"]).unwrap();
        match args.command {
            Commands::Search { keyword, format } => {
                assert_eq!(keyword, "Berlin");
                assert_eq!(format, OutputFormat::List);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(!args.encode_keyword);
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = CliArgs::try_parse_from([
            "citymatch",
            "search",
            "New York",
            "--format",
            "json",
            "--timeout",
            "5",
            "--encode-keyword",
            "-vv",
            "--base-url",
            "http://localhost:8080",
        ])
        .unwrap();
        assert_eq!(args.timeout, Some(5));
        assert!(args.encode_keyword);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.base_url, "http://localhost:8080");
        assert!(matches!(
            args.command,
            Commands::Search { format: OutputFormat::Json, .. }
        ));
    }

    #[test]
    fn flags_reach_client_config() {
        let args = CliArgs::try_parse_from([
            "citymatch",
            "--base-url",
            "http://localhost:8080/",
            "--timeout",
            "7",
            "--encode-keyword",
            "url",
            "New York",
        ])
        .unwrap();
        let config = args.to_config();
        assert_eq!(config.base_url, "http://localhost:8080/");
        assert_eq!(config.timeout, Some(Duration::from_secs(7)));
        assert_eq!(config.keyword_encoding, KeywordEncoding::Percent);
        assert_eq!(
            config.search_url("New York"),
            "http://localhost:8080/api/cities/?search=New%20York"
        );
    }

    #[test]
    fn environment_fills_unset_flags() {
        // Only this test sets these variables; the others pass every
        // env-backed flag explicitly or do not read it.
        std::env::set_var("CITYMATCH_BASE_URL", "http://cities.internal:9000");
        std::env::set_var("CITYMATCH_TIMEOUT_SECS", "3");
        let parsed = CliArgs::try_parse_from(["citymatch", "search", "Berlin"]);
        std::env::remove_var("CITYMATCH_BASE_URL");
        std::env::remove_var("CITYMATCH_TIMEOUT_SECS");

        let config = parsed.unwrap().to_config();
        assert_eq!(config.base_url, "http://cities.internal:9000");
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
        assert_eq!(config.keyword_encoding, KeywordEncoding::Verbatim);
    }

    #[test]
    fn url_requires_keyword() {
        assert!(CliArgs::try_parse_from(["citymatch", "url"]).is_err());
    }
}
