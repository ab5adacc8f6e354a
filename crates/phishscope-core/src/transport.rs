//! HTTP transport to the classification service.
//!
//! Posts the payload as JSON to `{base}/predict/url` or `{base}/predict/email`
//! and hands back the raw prediction body.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::analysis::model::{AnalysisRequest, InputKind, PredictionBody};
use crate::config::ServiceConfig;
use crate::error::{PhishError, PhishResult};

/// Sends one classification request and returns the service's answer.
#[async_trait]
pub trait ClassificationTransport: Send + Sync {
    async fn classify(&self, request: &AnalysisRequest) -> PhishResult<PredictionBody>;
}

/// Error body the service sends alongside 4xx responses.
#[derive(Deserialize)]
struct ServiceErrorBody {
    error: String,
}

/// reqwest-backed transport.
#[derive(Clone)]
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport for the given service base URL.
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self::with_client(base_url, client)
    }

    /// Create a transport around a preconfigured client.
    pub fn with_client(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(&config.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the prediction endpoint for `kind`.
    pub fn endpoint(&self, kind: InputKind) -> String {
        format!("{}{}", self.base_url, kind.endpoint_path())
    }

    /// Check whether the service answers HTTP at all.
    ///
    /// The service exposes no health route, so any response, including a 404,
    /// counts as reachable.
    pub async fn health_check(&self) -> bool {
        match self.client.get(format!("{}/", self.base_url)).send().await {
            Ok(resp) => {
                debug!(status = %resp.status(), "Classification service reachable");
                true
            }
            Err(e) => {
                debug!(error = %e, "Classification service unreachable");
                false
            }
        }
    }
}

#[async_trait]
impl ClassificationTransport for HttpTransport {
    async fn classify(&self, request: &AnalysisRequest) -> PhishResult<PredictionBody> {
        let url = self.endpoint(request.kind());
        debug!(url = %url, kind = %request.kind(), "Sending classification request");

        let response = self.client.post(&url).json(&request.body()).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ServiceErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            return Err(PhishError::http_status(
                status.as_u16(),
                format!("Classification service error ({}): {}", status, detail),
            ));
        }

        let text = response.text().await?;
        let body: PredictionBody = serde_json::from_str(&text)
            .map_err(|e| PhishError::schema(format!("Malformed prediction body: {}", e)))?;

        debug!(
            prediction = %body.prediction,
            confidence = body.confidence,
            "Received prediction"
        );

        Ok(body)
    }
}
