//! Single-Result View
//!
//! Builds the render-ready report for one classified account: verdict
//! badge, probability bars, ranked feature-importance bars and the radar
//! overlay data.

use serde::Serialize;

use super::percent_display;
use crate::logic::types::{FeatureWeight, PredictionResult, RadarData, Verdict};

/// One probability bar; `width_percent` is the fill width of the track
#[derive(Debug, Clone, Serialize)]
pub struct ProbabilityBar {
    pub label: String,
    pub width_percent: f64,
    pub display: String,
}

/// One ranked feature-importance bar
#[derive(Debug, Clone, Serialize)]
pub struct FeatureBar {
    pub feature: String,
    pub importance: f64,
    /// Signed value as the UI shows it, e.g. `+0.42` or `-1.30`
    pub display: String,
    /// `|importance| / max(|importance|) * 100`
    pub width_percent: f64,
    /// Whether this bar gets the bot-contribution color
    pub highlights_bot: bool,
}

/// Render-ready single-check report
#[derive(Debug, Clone, Serialize)]
pub struct SingleReport {
    pub username: String,
    pub verdict: Verdict,
    pub verdict_color: String,
    pub confidence: f64,
    pub confidence_display: String,
    pub human_bar: ProbabilityBar,
    pub bot_bar: ProbabilityBar,
    pub features: Vec<FeatureBar>,
    pub radar: Option<RadarData>,
    pub profile: Option<serde_json::Value>,
}

/// Sign-to-color decision rule: under a BOT verdict a positive importance
/// pushed toward BOT; under a HUMAN verdict a negative one did.
pub fn highlights_bot(verdict: Verdict, importance: f64) -> bool {
    match verdict {
        Verdict::Bot => importance > 0.0,
        Verdict::Human => importance < 0.0,
    }
}

fn importance_display(importance: f64) -> String {
    if importance > 0.0 {
        format!("+{:.2}", importance)
    } else {
        format!("{:.2}", importance)
    }
}

fn feature_bars(verdict: Verdict, features: &[FeatureWeight]) -> Vec<FeatureBar> {
    let max_magnitude = features
        .iter()
        .map(|f| f.importance.abs())
        .fold(0.0_f64, f64::max);

    features
        .iter()
        .map(|f| FeatureBar {
            feature: f.feature.clone(),
            importance: f.importance,
            display: importance_display(f.importance),
            width_percent: if max_magnitude > 0.0 {
                f.importance.abs() / max_magnitude * 100.0
            } else {
                0.0
            },
            highlights_bot: highlights_bot(verdict, f.importance),
        })
        .collect()
}

fn probability_bar(label: &str, probability: f64) -> ProbabilityBar {
    ProbabilityBar {
        label: label.to_string(),
        width_percent: probability * 100.0,
        display: percent_display(probability),
    }
}

/// Build the report. Returns `None` when the result lacks the required
/// classification fields (an error row cannot be rendered as a report).
pub fn build(result: &PredictionResult) -> Option<SingleReport> {
    let verdict = result.prediction?;
    let confidence = result.confidence?;
    let bot_probability = result.bot_probability?;
    let human_probability = result.human_probability?;

    Some(SingleReport {
        username: result.username.clone(),
        verdict,
        verdict_color: verdict.color().to_string(),
        confidence,
        confidence_display: percent_display(confidence),
        human_bar: probability_bar("Human", human_probability),
        bot_bar: probability_bar("Bot", bot_probability),
        features: result
            .top_features
            .as_deref()
            .map(|f| feature_bars(verdict, f))
            .unwrap_or_default(),
        radar: result.radar_data.clone(),
        profile: result.profile_data.clone(),
    })
}

// ============================================================================
// TESTS
// ============================================================================
