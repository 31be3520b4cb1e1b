//! Logic Module - Core Behavior
//!
//! Everything behavioral lives here, command-layer free:
//! - `input` - username normalization and CSV candidate extraction
//! - `client` - HTTP client for the prediction API
//! - `types` - wire/result data model
//! - `aggregate` - batch summary counts
//! - `session` - per-mode view state with stale-response suppression
//! - `view` - render-ready view models
//! - `export` - PDF report rendering

pub mod aggregate;
pub mod client;
pub mod export;
pub mod input;
pub mod session;
pub mod types;
pub mod view;
