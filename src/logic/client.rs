//! Prediction API Client
//!
//! HTTP client for the external bot classification service. Single, batch
//! and CSV-upload predictions over a fixed base URL. No retries, no
//! client-side timeout - the transport default applies.

use serde::Serialize;

use super::types::{BatchResponse, PredictionResult};
use crate::constants;

/// Prediction client errors
#[derive(Debug, Clone)]
pub enum PredictError {
    /// Transport-level failure (DNS, refused connection, dropped socket)
    Network(String),
    /// Non-2xx HTTP response
    Api { status: u16, status_text: String },
    /// Response body did not match the expected shape
    Parse(String),
}

impl std::fmt::Display for PredictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Network error: {}", e),
            Self::Api { status_text, .. } => write!(f, "API error: {}", status_text),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for PredictError {}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    username: &'a str,
}

#[derive(Debug, Serialize)]
struct BatchPredictRequest<'a> {
    usernames: &'a [String],
}

/// Client for the prediction API
pub struct PredictorClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for PredictorClient {
    fn default() -> Self {
        Self::new(constants::get_api_url())
    }
}

impl PredictorClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Classify a single username
    pub async fn predict_one(&self, username: &str) -> Result<PredictionResult, PredictError> {
        let url = format!("{}/predict", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&PredictRequest { username })
            .send()
            .await
            .map_err(|e| PredictError::Network(e.to_string()))?;

        let response = check_status(response)?;
        response
            .json()
            .await
            .map_err(|e| PredictError::Parse(e.to_string()))
    }

    /// Classify a whole username list in one request. Result order matches
    /// input order; per-row failures come back as error rows, not as a
    /// request failure.
    pub async fn predict_batch(
        &self,
        usernames: &[String],
    ) -> Result<Vec<PredictionResult>, PredictError> {
        let url = format!("{}/predict/batch", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&BatchPredictRequest { usernames })
            .send()
            .await
            .map_err(|e| PredictError::Network(e.to_string()))?;

        let response = check_status(response)?;
        let body: BatchResponse = response
            .json()
            .await
            .map_err(|e| PredictError::Parse(e.to_string()))?;

        Ok(body.results)
    }

    /// Upload a CSV file as multipart form data. The server parses the file
    /// itself; the bytes go up untouched.
    pub async fn predict_csv(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<Vec<PredictionResult>, PredictError> {
        let url = format!("{}/predict/csv", self.base_url);

        let part = reqwest::multipart::Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str("text/csv")
            .map_err(|e| PredictError::Network(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| PredictError::Network(e.to_string()))?;

        let response = check_status(response)?;
        let body: BatchResponse = response
            .json()
            .await
            .map_err(|e| PredictError::Parse(e.to_string()))?;

        Ok(body.results)
    }
}

/// Map non-2xx responses to an API error carrying the status text
fn check_status(response: reqwest::Response) -> Result<reqwest::Response, PredictError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(PredictError::Api {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_u16().to_string()),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
