//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default API server, only edit this file.

/// Default prediction API base URL
///
/// This is the fallback URL when no environment variable is set.
/// The classifier backend is expected to listen locally.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Bot Detector";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get prediction API base URL from environment or use default
pub fn get_api_url() -> String {
    std::env::var("BOT_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url_has_no_trailing_slash() {
        assert!(!DEFAULT_API_URL.ends_with('/'));
    }
}
