//! Per-Mode View Session
//!
//! Owns the transient, request-scoped state behind the two display modes.
//! Each mode keeps its own loading flag, latest outcome and inline error;
//! switching modes never touches the other mode's state.
//!
//! A monotonically increasing generation per mode guards against overlapping
//! submissions: a response whose generation is no longer current is
//! discarded instead of clobbering the newer request's state.

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::types::PredictionResult;

/// Display mode toggle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Single,
    Batch,
}

/// Single-check state
#[derive(Debug, Clone, Default)]
pub struct SingleState {
    pub loading: bool,
    pub result: Option<PredictionResult>,
    pub error: Option<String>,
}

/// Batch-analysis state
#[derive(Debug, Clone, Default)]
pub struct BatchState {
    pub loading: bool,
    pub results: Vec<PredictionResult>,
    pub error: Option<String>,
}

/// All view state, owned by the command layer
#[derive(Debug, Default)]
pub struct Session {
    mode: Mode,
    single: SingleState,
    batch: BatchState,
    single_gen: u64,
    batch_gen: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn single(&self) -> &SingleState {
        &self.single
    }

    pub fn batch(&self) -> &BatchState {
        &self.batch
    }

    /// Start a single-check submission: previous result and error are
    /// replaced wholesale. Returns the generation the response must present
    /// to be applied.
    pub fn begin_single(&mut self) -> u64 {
        self.single_gen += 1;
        self.single = SingleState {
            loading: true,
            result: None,
            error: None,
        };
        self.single_gen
    }

    /// Apply a completed single-check outcome. Returns false when the
    /// response is stale and was discarded.
    pub fn finish_single(
        &mut self,
        generation: u64,
        outcome: Result<PredictionResult, String>,
    ) -> bool {
        if generation != self.single_gen {
            return false;
        }

        self.single = match outcome {
            Ok(result) => SingleState {
                loading: false,
                result: Some(result),
                error: None,
            },
            Err(message) => SingleState {
                loading: false,
                result: None,
                error: Some(message),
            },
        };
        true
    }

    /// Start a batch submission
    pub fn begin_batch(&mut self) -> u64 {
        self.batch_gen += 1;
        self.batch = BatchState {
            loading: true,
            results: Vec::new(),
            error: None,
        };
        self.batch_gen
    }

    /// Apply a completed batch outcome. Returns false when stale.
    pub fn finish_batch(
        &mut self,
        generation: u64,
        outcome: Result<Vec<PredictionResult>, String>,
    ) -> bool {
        if generation != self.batch_gen {
            return false;
        }

        self.batch = match outcome {
            Ok(results) => BatchState {
                loading: false,
                results,
                error: None,
            },
            Err(message) => BatchState {
                loading: false,
                results: Vec::new(),
                error: Some(message),
            },
        };
        true
    }
}

/// Global session singleton
static SESSION: Lazy<RwLock<Session>> = Lazy::new(|| RwLock::new(Session::new()));

pub fn get_session() -> &'static RwLock<Session> {
    &SESSION
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_result(username: &str) -> PredictionResult {
        PredictionResult {
            username: username.to_string(),
            prediction: Some(crate::logic::types::Verdict::Human),
            confidence: Some(0.9),
            bot_probability: Some(0.1),
            human_probability: Some(0.9),
            top_features: None,
            profile_data: None,
            radar_data: None,
            error: None,
        }
    }

    #[test]
    fn test_begin_clears_previous_state() {
        let mut session = Session::new();
        let generation = session.begin_single();
        assert!(session.finish_single(generation, Err("API error: Internal Server Error".into())));
        assert!(session.single().error.is_some());

        let generation = session.begin_single();
        assert!(session.single().loading);
        assert!(session.single().error.is_none());
        assert!(session.single().result.is_none());

        // A later success replaces the earlier error entirely
        assert!(session.finish_single(generation, Ok(ok_result("elonmusk"))));
        assert!(session.single().error.is_none());
        assert!(session.single().result.is_some());
        assert!(!session.single().loading);
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut session = Session::new();
        let first = session.begin_single();
        let second = session.begin_single();

        // First request resolves after the second was submitted
        assert!(!session.finish_single(first, Ok(ok_result("old"))));
        assert!(session.single().loading);
        assert!(session.single().result.is_none());

        assert!(session.finish_single(second, Ok(ok_result("new"))));
        assert_eq!(session.single().result.as_ref().unwrap().username, "new");
    }

    #[test]
    fn test_modes_keep_independent_state() {
        let mut session = Session::new();
        let generation = session.begin_single();
        session.finish_single(generation, Ok(ok_result("solo")));

        let generation = session.begin_batch();
        session.finish_batch(generation, Err("API error: Bad Gateway".into()));

        session.set_mode(Mode::Batch);
        assert_eq!(session.mode(), Mode::Batch);

        // Switching modes cleared nothing
        assert!(session.single().result.is_some());
        assert!(session.batch().error.is_some());

        session.set_mode(Mode::Single);
        assert!(session.single().result.is_some());
    }

    #[test]
    fn test_outcome_is_result_xor_error() {
        let mut session = Session::new();
        let generation = session.begin_batch();
        session.finish_batch(generation, Ok(vec![ok_result("a")]));
        assert!(session.batch().error.is_none());
        assert_eq!(session.batch().results.len(), 1);

        let generation = session.begin_batch();
        session.finish_batch(generation, Err("Network error: refused".into()));
        assert!(session.batch().results.is_empty());
        assert!(session.batch().error.is_some());
    }
}
