//! API Module
//!
//! Tauri command surface for the webview UI.
//!
//! Structure:
//! - commands.rs: prediction and view-state commands
//! - export.rs: PDF report export command

pub mod commands;
pub mod export;

pub use commands::*;
