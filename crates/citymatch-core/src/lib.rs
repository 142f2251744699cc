// crates/citymatch-core/src/lib.rs

//! # citymatch-core
//!
//! Keyword city lookup against the Teleport city-search API.
//!
//! One call, one outbound `GET`, one list of names:
//!
//! ```rust,no_run
//! let cities = citymatch_core::get_cities("Berlin")?;
//! println!("{cities}"); // ['Berlin, Germany', 'Berlin, New Hampshire, US']
//! # Ok::<(), citymatch_core::CityError>(())
//! ```
//!
//! Use [`CityClient`] with a [`ClientConfig`] to point at another host, set a
//! timeout, or get the typed [`CityNames`] instead of the rendered string.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod client;
pub mod config;
pub mod error;
pub mod model;

// Re-exports
pub use crate::client::{get_cities, parse_search_response, CityClient};
pub use crate::config::{ClientConfig, KeywordEncoding, DEFAULT_BASE_URL, SEARCH_PATH};
pub use crate::error::{CityError, Result};
pub use crate::model::CityNames;
