// crates/citymatch-core/src/client.rs

//! # City Lookup
//!
//! One blocking `GET` against the search endpoint, a status check, and the
//! extraction of every `matching_full_name` from the response envelope.
//! Failures are returned as-is: no retry, no fallback, no partial result.

use crate::config::ClientConfig;
use crate::error::{CityError, Result};
use crate::model::{CityNames, SearchResponseRaw};
use reqwest::blocking::Client;
use tracing::debug;

/// Look up cities matching `keyword` with the default configuration and
/// return the names as a list literal, e.g.
/// `['Berlin, Germany', 'Berlin, New Hampshire, US']`.
///
/// Builds a fresh client per call. Use [`CityClient`] to reuse connections.
pub fn get_cities(keyword: &str) -> Result<String> {
    CityClient::new(ClientConfig::default())?.get_cities(keyword)
}

/// Extract the ordered city names from a search response body.
///
/// ```rust
/// let body = r#"{"_embedded":{"city:search-results":[{"matching_full_name":"Oslo, Norway"}]}}"#;
/// let names = citymatch_core::parse_search_response(body)?;
/// assert_eq!(names.as_slice(), ["Oslo, Norway"]);
/// # Ok::<(), citymatch_core::CityError>(())
/// ```
pub fn parse_search_response(body: &str) -> Result<CityNames> {
    let raw: SearchResponseRaw = serde_json::from_str(body)?;
    Ok(CityNames::from(raw))
}

/// Blocking client for the city-search endpoint.
///
/// Must not be created or dropped inside an async runtime; see
/// [`reqwest::blocking`].
#[derive(Debug, Clone)]
pub struct CityClient {
    http: Client,
    config: ClientConfig,
}

impl CityClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The exact URL a search for `keyword` requests.
    pub fn search_url(&self, keyword: &str) -> String {
        self.config.search_url(keyword)
    }

    /// Search and return the typed names.
    pub fn search(&self, keyword: &str) -> Result<CityNames> {
        let url = self.search_url(keyword);
        debug!(%url, "searching cities");

        let response = self.http.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(CityError::Status { status, url });
        }

        let body = response.text()?;
        let names = parse_search_response(&body)?;
        debug!(count = names.len(), "city search finished");
        Ok(names)
    }

    /// Search and render the names as a list literal.
    pub fn get_cities(&self, keyword: &str) -> Result<String> {
        self.search(keyword).map(|names| names.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BERLIN: &str = r#"{"_embedded":{"city:search-results":[{"matching_full_name":"Berlin, Germany"},{"matching_full_name":"Berlin, New Hampshire, US"}]}}"#;

    #[test]
    fn parses_berlin_example() {
        let names = parse_search_response(BERLIN).unwrap();
        assert_eq!(
            names.to_string(),
            "['Berlin, Germany', 'Berlin, New Hampshire, US']"
        );
    }

    #[test]
    fn empty_results_parse_to_empty_list() {
        let names =
            parse_search_response(r#"{"_embedded":{"city:search-results":[]}}"#).unwrap();
        assert!(names.is_empty());
        assert_eq!(names.to_string(), "[]");
    }

    #[test]
    fn missing_embedded_is_an_error() {
        let err = parse_search_response(r#"{"count":0}"#).unwrap_err();
        assert!(matches!(err, CityError::Shape(_)));
    }

    #[test]
    fn missing_results_key_is_an_error() {
        let err = parse_search_response(r#"{"_embedded":{}}"#).unwrap_err();
        assert!(matches!(err, CityError::Shape(_)));
        assert!(err.to_string().contains("city:search-results"));
    }

    #[test]
    fn element_without_full_name_is_not_skipped() {
        let body = r#"{"_embedded":{"city:search-results":[
            {"matching_full_name":"Paris, France"},
            {"matching_alternate_names":[]}
        ]}}"#;
        let err = parse_search_response(body).unwrap_err();
        assert!(matches!(err, CityError::Shape(_)));
        assert!(err.to_string().contains("matching_full_name"));
    }

    #[test]
    fn non_json_body_is_decode_error() {
        let err = parse_search_response("not json").unwrap_err();
        assert!(matches!(err, CityError::Decode(_)));
    }

    #[test]
    fn null_full_name_is_an_error() {
        let body = r#"{"_embedded":{"city:search-results":[{"matching_full_name":null}]}}"#;
        assert!(matches!(
            parse_search_response(body),
            Err(CityError::Shape(_))
        ));
    }

    #[test]
    fn client_exposes_search_url() {
        let client =
            CityClient::new(ClientConfig::default().with_base_url("http://localhost:9")).unwrap();
        assert_eq!(
            client.search_url("Lima"),
            "http://localhost:9/api/cities/?search=Lima"
        );
    }
}
