//! Verdict interpretation: confidence formatting and rationale synthesis.

pub mod model;
pub mod rationale;

use model::{AnalysisResponse, AnalysisResult, InputKind};

/// Scale a [0, 1] confidence to a percentage rounded to one decimal place.
pub fn confidence_percent(confidence: f64) -> f64 {
    (confidence * 1000.0).round() / 10.0
}

/// Turn a checked service response into a presentation-ready result.
///
/// Pure: the same arguments always produce the same result.
pub fn interpret(kind: InputKind, raw_input: &str, response: &AnalysisResponse) -> AnalysisResult {
    let is_phishing = response.is_phishing();
    let rationale = match kind {
        InputKind::Url => rationale::url_rationale(raw_input, is_phishing),
        InputKind::Email => rationale::email_rationale(is_phishing).to_string(),
    };

    AnalysisResult {
        kind,
        label: response.label,
        confidence_percent: confidence_percent(response.confidence),
        rationale,
    }
}
