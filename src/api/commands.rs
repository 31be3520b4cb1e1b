//! Tauri Commands - Prediction API for the Frontend
//!
//! Each submission command normalizes its input, runs the network call and
//! folds the outcome into the per-mode session state, then hands back the
//! rebuilt view model. View models are recomputed from session state on
//! every call - the frontend never holds derived state of its own.

use once_cell::sync::Lazy;
use serde::Serialize;
use uuid::Uuid;

use crate::logic::view::batch::BatchReport;
use crate::logic::view::single::SingleReport;
use crate::logic::{client::PredictorClient, input, session, view};

static CLIENT: Lazy<PredictorClient> = Lazy::new(PredictorClient::default);

// ============================================================================
// VIEW MODELS FOR THE FRONTEND
// ============================================================================

/// Single-check view: loading flag, result card or inline error - never both
#[derive(Debug, Clone, Serialize)]
pub struct SingleView {
    pub loading: bool,
    pub report: Option<SingleReport>,
    pub error: Option<String>,
}

/// Batch view: loading flag, table + summary, inline error
#[derive(Debug, Clone, Serialize)]
pub struct BatchView {
    pub loading: bool,
    pub report: BatchReport,
    pub error: Option<String>,
}

/// Pre-upload CSV preview
#[derive(Debug, Clone, Serialize)]
pub struct CsvPreview {
    pub candidates: usize,
    pub sample: Vec<String>,
}

fn single_view(state: &session::SingleState) -> SingleView {
    SingleView {
        loading: state.loading,
        report: state.result.as_ref().and_then(view::single::build),
        error: state.error.clone(),
    }
}

fn batch_view(state: &session::BatchState) -> BatchView {
    BatchView {
        loading: state.loading,
        report: view::batch::build(&state.results),
        error: state.error.clone(),
    }
}

fn current_single_view() -> SingleView {
    single_view(session::get_session().read().single())
}

fn current_batch_view() -> BatchView {
    batch_view(session::get_session().read().batch())
}

// ============================================================================
// PREDICTION COMMANDS
// ============================================================================

/// Single-mode submission. Blank input is a silent no-op.
#[tauri::command]
pub async fn check_account(username: String) -> SingleView {
    let Some(username) = input::normalize_token(&username) else {
        log::debug!("check_account: empty input, nothing to do");
        return current_single_view();
    };

    let request_id = Uuid::new_v4();
    log::info!("[{}] single prediction for @{}", request_id, username);

    let generation = session::get_session().write().begin_single();

    let outcome = CLIENT
        .predict_one(&username)
        .await
        .map_err(|e| e.to_string());
    match &outcome {
        Ok(_) => log::info!("[{}] single prediction resolved", request_id),
        Err(e) => log::warn!("[{}] single prediction failed: {}", request_id, e),
    }

    let mut session = session::get_session().write();
    if !session.finish_single(generation, outcome) {
        log::debug!("[{}] stale single response discarded", request_id);
    }
    single_view(session.single())
}

/// Batch-mode submission from the textarea. An input that normalizes to an
/// empty list issues no request.
#[tauri::command]
pub async fn analyze_batch(input: String) -> BatchView {
    let usernames = input::normalize_usernames(&input);
    if usernames.is_empty() {
        log::debug!("analyze_batch: no usernames after normalization");
        return current_batch_view();
    }

    let request_id = Uuid::new_v4();
    log::info!("[{}] batch prediction for {} usernames", request_id, usernames.len());

    let generation = session::get_session().write().begin_batch();

    let outcome = CLIENT
        .predict_batch(&usernames)
        .await
        .map_err(|e| e.to_string());
    match &outcome {
        Ok(results) => log::info!("[{}] batch resolved with {} rows", request_id, results.len()),
        Err(e) => log::warn!("[{}] batch prediction failed: {}", request_id, e),
    }

    let mut session = session::get_session().write();
    if !session.finish_batch(generation, outcome) {
        log::debug!("[{}] stale batch response discarded", request_id);
    }
    batch_view(session.batch())
}

/// Batch-mode submission from a CSV upload. The raw bytes are forwarded to
/// the server unparsed.
#[tauri::command]
pub async fn analyze_csv(file_name: String, contents: Vec<u8>) -> BatchView {
    let request_id = Uuid::new_v4();
    log::info!(
        "[{}] csv prediction for {} ({} bytes)",
        request_id,
        file_name,
        contents.len()
    );

    let generation = session::get_session().write().begin_batch();

    let outcome = CLIENT
        .predict_csv(&file_name, contents)
        .await
        .map_err(|e| e.to_string());
    match &outcome {
        Ok(results) => log::info!("[{}] csv resolved with {} rows", request_id, results.len()),
        Err(e) => log::warn!("[{}] csv prediction failed: {}", request_id, e),
    }

    let mut session = session::get_session().write();
    if !session.finish_batch(generation, outcome) {
        log::debug!("[{}] stale csv response discarded", request_id);
    }
    batch_view(session.batch())
}

/// Local preview of an about-to-be-uploaded CSV: candidate count plus the
/// first few usernames. Never used to rewrite the upload.
#[tauri::command]
pub fn preview_csv(contents: Vec<u8>) -> CsvPreview {
    let text = String::from_utf8_lossy(&contents);
    let candidates = input::csv_candidates(&text);

    CsvPreview {
        candidates: candidates.len(),
        sample: candidates.into_iter().take(5).collect(),
    }
}

// ============================================================================
// VIEW-STATE COMMANDS
// ============================================================================

#[tauri::command]
pub fn get_single_view() -> SingleView {
    current_single_view()
}

#[tauri::command]
pub fn get_batch_view() -> BatchView {
    current_batch_view()
}

#[tauri::command]
pub fn get_mode() -> session::Mode {
    session::get_session().read().mode()
}

#[tauri::command]
pub fn set_mode(mode: session::Mode) {
    session::get_session().write().set_mode(mode);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::types::{PredictionResult, Verdict};

    #[test]
    fn test_single_view_never_carries_result_and_error() {
        let state = session::SingleState {
            loading: false,
            result: None,
            error: Some("API error: Internal Server Error".to_string()),
        };
        let v = single_view(&state);
        assert!(v.report.is_none());
        assert_eq!(v.error.as_deref(), Some("API error: Internal Server Error"));
    }

    #[test]
    fn test_batch_view_rebuilds_summary_from_rows() {
        let state = session::BatchState {
            loading: false,
            results: vec![PredictionResult {
                username: "a".to_string(),
                prediction: Some(Verdict::Bot),
                confidence: Some(0.8),
                bot_probability: Some(0.8),
                human_probability: Some(0.2),
                top_features: None,
                profile_data: None,
                radar_data: None,
                error: None,
            }],
            error: None,
        };
        let v = batch_view(&state);
        assert_eq!(v.report.summary.total, 1);
        assert_eq!(v.report.summary.bots, 1);
        assert_eq!(v.report.rows[0].username, "a");
    }

    #[test]
    fn test_csv_preview_counts_candidates() {
        let preview = preview_csv(b"username\n@one\ntwo,three".to_vec());
        assert_eq!(preview.candidates, 3);
        assert_eq!(preview.sample, vec!["one", "two", "three"]);
    }
}
