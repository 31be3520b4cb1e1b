//! Export API Command
//!
//! PDF export of the current single-mode result.

use serde::Serialize;

use crate::logic::{export, session, view};

/// Result of a successful export
#[derive(Debug, Clone, Serialize)]
pub struct ExportOutcome {
    pub path: String,
    pub file_name: String,
}

/// Export the currently displayed single result as a PDF report. Fails when
/// no result is on screen; failures are reported once, never retried.
#[tauri::command]
pub async fn export_report() -> Result<ExportOutcome, String> {
    let report = {
        let session = session::get_session().read();
        session
            .single()
            .result
            .as_ref()
            .and_then(view::single::build)
    };

    let Some(report) = report else {
        return Err("No result to export".to_string());
    };

    let path = export::export_single_report(&report, None).map_err(|e| e.to_string())?;

    Ok(ExportOutcome {
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default(),
        path: path.to_string_lossy().to_string(),
    })
}
