//! Input Normalizer
//!
//! Turns free-text username input (single field, batch textarea, CSV text)
//! into a clean ordered list. No deduplication - order in, order out.

use once_cell::sync::Lazy;
use regex::Regex;

/// Tokens are separated by runs of commas and/or newlines
static TOKEN_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,\n]+").expect("valid regex"));

/// Header cells commonly found in the first row of uploaded CSVs
const CSV_HEADER_NAMES: [&str; 4] = ["username", "user", "screen_name", "handle"];

/// Normalize one raw token: trim, strip exactly one leading `@`, re-trim.
/// Returns `None` when nothing remains.
pub fn normalize_token(token: &str) -> Option<String> {
    let trimmed = token.trim();
    let stripped = trimmed.strip_prefix('@').unwrap_or(trimmed).trim();

    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

/// Normalize a raw batch input string into an ordered username list.
pub fn normalize_usernames(raw: &str) -> Vec<String> {
    TOKEN_SPLIT
        .split(raw)
        .filter_map(normalize_token)
        .collect()
}

/// Extract candidate usernames from CSV text, one per cell, skipping common
/// header cells. Only used for the local pre-upload preview - the uploaded
/// file itself is sent to the server unparsed.
pub fn csv_candidates(text: &str) -> Vec<String> {
    text.lines()
        .flat_map(|row| row.split(','))
        .filter_map(normalize_token)
        .filter(|cell| {
            let lower = cell.to_lowercase();
            !CSV_HEADER_NAMES.contains(&lower.as_str())
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
