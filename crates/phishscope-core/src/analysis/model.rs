//! Analysis domain models.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PhishError, PhishResult};

/// The category of user input, selecting the endpoint and the rationale path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Url,
    Email,
}

impl InputKind {
    /// Path of the prediction endpoint for this kind, relative to the service base.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            Self::Url => "/predict/url",
            Self::Email => "/predict/email",
        }
    }

    /// Name of the JSON field carrying the payload.
    pub fn payload_field(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Email => "text",
        }
    }

    /// Message shown while a request of this kind is in flight.
    pub fn loading_message(&self) -> &'static str {
        match self {
            Self::Url => "Analyzing URL...",
            Self::Email => "Analyzing Content...",
        }
    }

    /// Message shown when the user submits nothing.
    pub fn empty_input_message(&self) -> &'static str {
        match self {
            Self::Url => "Please enter a URL",
            Self::Email => "Please enter some text",
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated submission, ready to be sent to the classification service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    kind: InputKind,
    payload: String,
}

impl AnalysisRequest {
    /// Build a request, rejecting input that is empty after trimming.
    ///
    /// The payload itself is kept verbatim; trimming only decides emptiness.
    pub fn new(kind: InputKind, raw_input: &str) -> PhishResult<Self> {
        if raw_input.trim().is_empty() {
            return Err(PhishError::validation(kind.empty_input_message()));
        }
        Ok(Self {
            kind,
            payload: raw_input.to_string(),
        })
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// JSON body for the kind's endpoint: `{"url": ...}` or `{"text": ...}`.
    pub fn body(&self) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        body.insert(
            self.kind.payload_field().to_string(),
            serde_json::Value::String(self.payload.clone()),
        );
        serde_json::Value::Object(body)
    }
}

/// Verdict returned by the classification service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Phishing,
    Legitimate,
}

impl Label {
    /// Parse a wire label. Only the two exact names are recognized.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "phishing" => Some(Self::Phishing),
            "legitimate" => Some(Self::Legitimate),
            _ => None,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phishing => "phishing",
            Self::Legitimate => "legitimate",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How unrecognized wire labels are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPolicy {
    /// Reject anything other than `phishing` / `legitimate`.
    #[default]
    Strict,
    /// Treat anything other than `phishing` as legitimate.
    ///
    /// An empty or corrupted label becomes indistinguishable from a clean
    /// verdict under this policy.
    Lenient,
}

/// Raw prediction body as sent by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionBody {
    pub prediction: String,
    pub confidence: f64,
    /// Raw phishing probability. Diagnostic only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// A prediction that passed schema checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisResponse {
    pub label: Label,
    /// Confidence in `label`, within [0, 1].
    pub confidence: f64,
    pub score: Option<f64>,
}

impl AnalysisResponse {
    /// Check a wire body and lift it into a typed response.
    pub fn from_body(body: PredictionBody, policy: LabelPolicy) -> PhishResult<Self> {
        if !body.confidence.is_finite() || !(0.0..=1.0).contains(&body.confidence) {
            return Err(PhishError::schema(format!(
                "Confidence {} is outside [0, 1]",
                body.confidence
            )));
        }

        let label = match (Label::from_wire(&body.prediction), policy) {
            (Some(label), _) => label,
            (None, LabelPolicy::Strict) => {
                return Err(PhishError::schema(format!(
                    "Unrecognized prediction label '{}'",
                    body.prediction
                )));
            }
            (None, LabelPolicy::Lenient) => {
                warn!(
                    label = %body.prediction,
                    "Unrecognized prediction label, treating as legitimate"
                );
                Label::Legitimate
            }
        };

        Ok(Self {
            label,
            confidence: body.confidence,
            score: body.score,
        })
    }

    pub fn is_phishing(&self) -> bool {
        self.label == Label::Phishing
    }
}

/// Presentation-ready outcome of one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub kind: InputKind,
    pub label: Label,
    /// `confidence * 100`, rounded to one decimal place.
    pub confidence_percent: f64,
    pub rationale: String,
}

impl AnalysisResult {
    pub fn is_phishing(&self) -> bool {
        self.label == Label::Phishing
    }

    /// One-line verdict title.
    pub fn headline(&self) -> &'static str {
        match self.label {
            Label::Phishing => "Warning: Potential Phishing Detected!",
            Label::Legitimate => "Secure: Looks Safe to me.",
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "We are {:.1}% confident in this analysis.",
            self.confidence_percent
        )
    }
}
