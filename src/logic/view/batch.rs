//! Batch-Result View
//!
//! Summary cards plus a row-per-username table. Error rows get an error
//! badge and em-dash placeholders in the numeric columns.

use serde::Serialize;

use super::{percent_display, EMPTY_CELL};
use crate::logic::aggregate::{self, BatchSummary};
use crate::logic::types::{PredictionResult, Verdict};

/// One table row, in input order
#[derive(Debug, Clone, Serialize)]
pub struct BatchRow {
    /// 1-based position
    pub index: usize,
    pub username: String,
    /// Verdict badge; `None` together with `error` means the error badge
    pub verdict: Option<Verdict>,
    pub error: Option<String>,
    pub confidence: String,
    pub bot_percent: String,
    pub human_percent: String,
}

/// Render-ready batch report
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub summary: BatchSummary,
    pub rows: Vec<BatchRow>,
}

fn percent_cell(value: Option<f64>) -> String {
    value.map(percent_display).unwrap_or_else(|| EMPTY_CELL.to_string())
}

/// Build the table view. The summary is recomputed from the list on every
/// call; nothing is cached between renders.
pub fn build(results: &[PredictionResult]) -> BatchReport {
    BatchReport {
        summary: aggregate::summarize(results),
        rows: results
            .iter()
            .enumerate()
            .map(|(i, r)| BatchRow {
                index: i + 1,
                username: r.username.clone(),
                verdict: r.prediction,
                error: r.error.clone(),
                confidence: percent_cell(r.confidence),
                bot_percent: percent_cell(r.bot_probability),
                human_percent: percent_cell(r.human_probability),
            })
            .collect(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn classified(username: &str, verdict: Verdict, bot_probability: f64) -> PredictionResult {
        PredictionResult {
            username: username.to_string(),
            prediction: Some(verdict),
            confidence: Some(bot_probability.max(1.0 - bot_probability)),
            bot_probability: Some(bot_probability),
            human_probability: Some(1.0 - bot_probability),
            top_features: None,
            profile_data: None,
            radar_data: None,
            error: None,
        }
    }

    fn failed(username: &str, error: &str) -> PredictionResult {
        PredictionResult {
            username: username.to_string(),
            prediction: None,
            confidence: None,
            bot_probability: None,
            human_probability: None,
            top_features: None,
            profile_data: None,
            radar_data: None,
            error: Some(error.to_string()),
        }
    }

    #[test]
    fn test_rows_keep_input_order() {
        let results = vec![
            classified("elonmusk", Verdict::Human, 0.1),
            classified("BillGates", Verdict::Human, 0.2),
            classified("BarackObama", Verdict::Human, 0.3),
        ];

        let report = build(&results);
        assert_eq!(report.rows.len(), 3);
        let usernames: Vec<&str> = report.rows.iter().map(|r| r.username.as_str()).collect();
        assert_eq!(usernames, vec!["elonmusk", "BillGates", "BarackObama"]);
        assert_eq!(report.rows[0].index, 1);
        assert_eq!(report.rows[2].index, 3);
    }

    #[test]
    fn test_error_row_gets_placeholders() {
        let results = vec![
            classified("real", Verdict::Bot, 0.97),
            failed("x", "not found"),
        ];

        let report = build(&results);
        let row = &report.rows[1];
        assert_eq!(row.verdict, None);
        assert_eq!(row.error.as_deref(), Some("not found"));
        assert_eq!(row.confidence, "\u{2014}");
        assert_eq!(row.bot_percent, "\u{2014}");
        assert_eq!(row.human_percent, "\u{2014}");

        assert_eq!(report.summary.errors, 1);
        assert_eq!(report.summary.bots, 1);
        assert_eq!(report.summary.humans, 0);
    }

    #[test]
    fn test_percent_formatting() {
        let results = vec![classified("bot", Verdict::Bot, 0.972)];
        let row = &build(&results).rows[0];
        assert_eq!(row.bot_percent, "97.2%");
        assert_eq!(row.human_percent, "2.8%");
        assert_eq!(row.confidence, "97.2%");
    }
}
