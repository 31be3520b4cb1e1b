//! Batch Result Aggregator
//!
//! Pure summary counts over a batch result list. Recomputed on every view
//! build - there is no cached aggregate state anywhere.

use serde::Serialize;

use super::types::{PredictionResult, Verdict};

/// Derived batch statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub humans: usize,
    pub bots: usize,
    pub errors: usize,
}

/// Count verdicts and error rows. Rows carrying neither a prediction nor an
/// error stay uncounted, so `bots + humans <= total - errors` always holds.
pub fn summarize(results: &[PredictionResult]) -> BatchSummary {
    BatchSummary {
        total: results.len(),
        humans: results
            .iter()
            .filter(|r| r.prediction == Some(Verdict::Human))
            .count(),
        bots: results
            .iter()
            .filter(|r| r.prediction == Some(Verdict::Bot))
            .count(),
        errors: results.iter().filter(|r| r.is_error()).count(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
