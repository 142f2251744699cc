//! citymatch-cli
//! =============
//!
//! Command-line interface for the `citymatch-core` city lookup.
//!
//! The binary (`citymatch`) is the primary deliverable; this library target
//! holds its argument parser and output rendering so both can be tested and
//! documented.
//!
//! Basic usage:
//!
//! ```text
//! citymatch search Berlin
//! citymatch search "New York" --encode-keyword --format lines
//! citymatch --timeout 10 search paris --format json
//! citymatch url Berlin
//! ```
//!
//! Logs go to stderr. Set `RUST_LOG=citymatch_core=debug` or pass `-v` to see
//! the request URL and result count.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod args;
pub mod output;
