//! Prediction Types
//!
//! Core types for classification results coming back from the prediction
//! API. No logic here - only data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// VERDICT
// ============================================================================

/// Classifier verdict for one account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "BOT")]
    Bot,
    #[serde(rename = "HUMAN")]
    Human,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Bot => "BOT",
            Verdict::Human => "HUMAN",
        }
    }

    /// Badge color used by the UI and the PDF report
    pub fn color(&self) -> &'static str {
        match self {
            Verdict::Bot => "#ef4444",   // Red
            Verdict::Human => "#10b981", // Green
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// FEATURE IMPORTANCE
// ============================================================================

/// Signed contribution of one input feature to the verdict.
/// Sign convention is relative to the BOT class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeight {
    pub feature: String,
    pub importance: f64,
}

// ============================================================================
// RADAR DATA
// ============================================================================

/// Normalized feature vector for the queried profile plus precomputed
/// average-bot and average-human reference vectors. Labels are supplied by
/// the server and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarData {
    pub labels: Vec<String>,
    pub user: Vec<f64>,
    pub avg_bot: Vec<f64>,
    pub avg_human: Vec<f64>,
}

// ============================================================================
// PREDICTION RESULT
// ============================================================================

/// One classification result as returned by the server.
///
/// Batch responses carry error rows with only `username` and `error` set and
/// explicit `null`s everywhere else, so every classification field is
/// optional here. Never mutated after parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    pub username: String,
    #[serde(default)]
    pub prediction: Option<Verdict>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub bot_probability: Option<f64>,
    #[serde(default)]
    pub human_probability: Option<f64>,
    #[serde(default)]
    pub top_features: Option<Vec<FeatureWeight>>,
    #[serde(default)]
    pub profile_data: Option<serde_json::Value>,
    #[serde(default)]
    pub radar_data: Option<RadarData>,
    #[serde(default)]
    pub error: Option<String>,
}

impl PredictionResult {
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Wire shape of `/predict/batch` and `/predict/csv` responses
#[derive(Debug, Deserialize)]
pub struct BatchResponse {
    pub results: Vec<PredictionResult>,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_wire_format() {
        assert_eq!(serde_json::to_string(&Verdict::Bot).unwrap(), "\"BOT\"");
        let v: Verdict = serde_json::from_str("\"HUMAN\"").unwrap();
        assert_eq!(v, Verdict::Human);
    }

    #[test]
    fn test_full_result_parses() {
        let body = r#"{
            "username": "elonmusk",
            "prediction": "HUMAN",
            "confidence": 0.93,
            "bot_probability": 0.07,
            "human_probability": 0.93,
            "top_features": [{"feature": "followers", "importance": -1.2}],
            "radar_data": {
                "labels": ["followers", "following"],
                "user": [0.8, 0.2],
                "avg_bot": [0.1, 0.9],
                "avg_human": [0.7, 0.3]
            }
        }"#;

        let result: PredictionResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.prediction, Some(Verdict::Human));
        assert_eq!(result.confidence, Some(0.93));
        assert_eq!(result.top_features.as_ref().unwrap().len(), 1);
        assert_eq!(result.radar_data.as_ref().unwrap().labels.len(), 2);
        assert!(!result.is_error());
    }

    #[test]
    fn test_batch_error_row_with_explicit_nulls() {
        // The server fills error rows with nulls rather than omitting keys
        let body = r#"{"results": [{
            "username": "x",
            "prediction": null,
            "confidence": null,
            "bot_probability": null,
            "human_probability": null,
            "top_features": null,
            "error": "not found"
        }]}"#;

        let response: BatchResponse = serde_json::from_str(body).unwrap();
        let row = &response.results[0];
        assert!(row.is_error());
        assert_eq!(row.prediction, None);
        assert_eq!(row.confidence, None);
    }

    #[test]
    fn test_minimal_error_row_with_missing_keys() {
        let body = r#"{"username": "x", "error": "not found"}"#;
        let result: PredictionResult = serde_json::from_str(body).unwrap();
        assert!(result.is_error());
        assert_eq!(result.prediction, None);
    }
}
