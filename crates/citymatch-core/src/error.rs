// crates/citymatch-core/src/error.rs

use reqwest::StatusCode;
use thiserror::Error;

/// Everything a lookup can fail with.
///
/// None of these are handled inside the crate; they are returned to the
/// caller as soon as they happen.
#[derive(Debug, Error)]
pub enum CityError {
    /// The API answered with a non-2xx status.
    #[error("HTTP {status} from {url}")]
    Status { status: StatusCode, url: String },

    /// The body is JSON but a required key is missing or has the wrong type.
    #[error("unexpected response shape: {0}")]
    Shape(#[source] serde_json::Error),

    /// The body is not JSON at all.
    #[error("invalid JSON body: {0}")]
    Decode(#[source] serde_json::Error),

    /// DNS, connect, timeout or body read failures, straight from reqwest.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl CityError {
    /// HTTP status carried by the error, if the server got as far as sending one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            CityError::Status { status, .. } => Some(*status),
            CityError::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// True for [`CityError::Shape`] and [`CityError::Decode`].
    pub fn is_body_error(&self) -> bool {
        matches!(self, CityError::Shape(_) | CityError::Decode(_))
    }
}

impl From<serde_json::Error> for CityError {
    fn from(e: serde_json::Error) -> Self {
        match e.classify() {
            serde_json::error::Category::Data => CityError::Shape(e),
            _ => CityError::Decode(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, CityError>;
