// crates/citymatch-core/src/config.rs
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.teleport.org";

/// Path of the search endpoint, appended to the base URL.
pub const SEARCH_PATH: &str = "/api/cities/";

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

/// How the keyword is placed into the `search` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeywordEncoding {
    /// Interpolated as-is. Reserved characters such as `&` or `#` change the
    /// meaning of the URL; the caller owns that.
    #[default]
    Verbatim,
    /// Percent-encoded before interpolation.
    Percent,
}

/// Settings for a [`CityClient`](crate::CityClient).
///
/// The default talks to the public Teleport API with no timeout.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub user_agent: String,
    pub keyword_encoding: KeywordEncoding,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: concat!("citymatch/", env!("CARGO_PKG_VERSION")).to_string(),
            keyword_encoding: KeywordEncoding::Verbatim,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_keyword_encoding(mut self, encoding: KeywordEncoding) -> Self {
        self.keyword_encoding = encoding;
        self
    }

    /// `{base_url}/api/cities/?search={keyword}`, trailing slashes on the base trimmed.
    pub fn search_url(&self, keyword: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        match self.keyword_encoding {
            KeywordEncoding::Verbatim => format!("{base}{SEARCH_PATH}?search={keyword}"),
            KeywordEncoding::Percent => format!(
                "{base}{SEARCH_PATH}?search={}",
                urlencoding::encode(keyword)
            ),
        }
    }
}
