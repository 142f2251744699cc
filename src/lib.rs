//! citymatch-rs
//!
//! Workspace facade over [`citymatch_core`]. Runnable demos live in `demos/`:
//!
//! ```text
//! cargo run --example basic_usage -- Berlin
//! cargo run --example error_handling
//! ```
pub use citymatch_core::*;
