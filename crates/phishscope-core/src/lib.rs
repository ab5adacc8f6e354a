//! PhishScope Core Library
//!
//! Sends URLs and email text to a remote phishing classifier and turns its
//! verdict into a result with a confidence percentage and an explanation.

pub mod analysis;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod transport;

pub use analysis::interpret;
pub use analysis::model::{
    AnalysisRequest, AnalysisResponse, AnalysisResult, InputKind, Label, LabelPolicy,
    PredictionBody,
};
pub use config::ServiceConfig;
pub use dispatcher::{Dispatcher, Notifier, Phase};
pub use error::{PhishError, PhishResult};
pub use transport::{ClassificationTransport, HttpTransport};
