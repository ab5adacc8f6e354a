//! Request dispatch: validation, in-flight tracking and notifications.
//!
//! One `submit` call is one user action. Overlapping submissions are neither
//! deduplicated nor queued, and a superseded request is never cancelled.

use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{error, info, warn};

use crate::analysis::interpret;
use crate::analysis::model::{
    AnalysisRequest, AnalysisResponse, AnalysisResult, InputKind, LabelPolicy,
};
use crate::error::{PhishError, PhishResult};
use crate::transport::ClassificationTransport;

/// Alert text for failures after the request left the client.
const BACKEND_ERROR_MESSAGE: &str = "Error connecting to backend API";

/// Receives user-facing notifications about a submission.
pub trait Notifier: Send + Sync {
    /// A request of `kind` is about to be sent.
    fn loading(&self, kind: InputKind, message: &str);

    /// The submission failed. Sent exactly once per failed submission.
    fn alert(&self, message: &str);

    /// The submission produced a result.
    fn resolved(&self, _result: &AnalysisResult) {}
}

/// Lifecycle phase for one input kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    InFlight,
}

/// Marks a kind as in flight until dropped.
struct InFlightGuard<'a> {
    counter: &'a AtomicUsize,
}

impl<'a> InFlightGuard<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self { counter }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Sends submissions to the classification service and interprets the answers.
pub struct Dispatcher<T, N> {
    transport: T,
    notifier: N,
    label_policy: LabelPolicy,
    url_in_flight: AtomicUsize,
    email_in_flight: AtomicUsize,
}

impl<T: ClassificationTransport, N: Notifier> Dispatcher<T, N> {
    pub fn new(transport: T, notifier: N) -> Self {
        Self {
            transport,
            notifier,
            label_policy: LabelPolicy::default(),
            url_in_flight: AtomicUsize::new(0),
            email_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn with_label_policy(mut self, policy: LabelPolicy) -> Self {
        self.label_policy = policy;
        self
    }

    pub fn phase(&self, kind: InputKind) -> Phase {
        if self.counter(kind).load(Ordering::SeqCst) > 0 {
            Phase::InFlight
        } else {
            Phase::Idle
        }
    }

    fn counter(&self, kind: InputKind) -> &AtomicUsize {
        match kind {
            InputKind::Url => &self.url_in_flight,
            InputKind::Email => &self.email_in_flight,
        }
    }

    /// Classify `raw_input` as `kind`.
    ///
    /// Blank input fails with a validation error before anything is sent.
    /// Every failure is reported to the notifier once and leaves the kind idle.
    pub async fn submit(&self, kind: InputKind, raw_input: &str) -> PhishResult<AnalysisResult> {
        let request = match AnalysisRequest::new(kind, raw_input) {
            Ok(request) => request,
            Err(err) => {
                warn!(kind = %kind, "Rejected empty submission");
                self.notifier.alert(alert_message(&err));
                return Err(err);
            }
        };

        let guard = InFlightGuard::enter(self.counter(kind));
        self.notifier.loading(kind, kind.loading_message());
        info!(kind = %kind, chars = raw_input.chars().count(), "Submitting for classification");

        let outcome = self
            .transport
            .classify(&request)
            .await
            .and_then(|body| AnalysisResponse::from_body(body, self.label_policy));
        drop(guard);

        match outcome {
            Ok(response) => {
                let result = interpret(kind, request.payload(), &response);
                info!(
                    kind = %kind,
                    label = %result.label,
                    confidence_percent = result.confidence_percent,
                    "Classification resolved"
                );
                self.notifier.resolved(&result);
                Ok(result)
            }
            Err(err) => {
                error!(
                    kind = %kind,
                    error_kind = err.kind_name(),
                    error = %err,
                    "Classification failed"
                );
                self.notifier.alert(alert_message(&err));
                Err(err)
            }
        }
    }
}

fn alert_message(err: &PhishError) -> &str {
    match err {
        PhishError::Validation(msg) => msg,
        PhishError::Transport { .. } | PhishError::Schema(_) => BACKEND_ERROR_MESSAGE,
    }
}
