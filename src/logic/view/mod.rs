//! View Models
//!
//! Render-ready representations of prediction results. All data-to-visual
//! mapping rules (bar widths, highlight rule, placeholder cells) live here
//! so the webview and the PDF report draw from the same numbers.

pub mod batch;
pub mod single;

/// Placeholder for numeric cells without a value
pub const EMPTY_CELL: &str = "\u{2014}";

/// Format a 0..1 probability as a one-decimal percentage
pub(crate) fn percent_display(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}
