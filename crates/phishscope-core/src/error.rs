//! Centralized error types for PhishScope.

use thiserror::Error;

/// Main error type for a submission.
///
/// Every variant is terminal for the submission that produced it: nothing is
/// retried and no partial result is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PhishError {
    /// The input was rejected before any request was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The service could not be reached or answered with a non-success status.
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        status: Option<u16>,
    },

    /// The service answered, but the body is not a usable prediction.
    #[error("Schema error: {0}")]
    Schema(String),
}

/// Result type for PhishScope operations.
pub type PhishResult<T> = Result<T, PhishError>;

impl PhishError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a transport error without an HTTP status (connection refused, timeout...).
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport {
            message: msg.into(),
            status: None,
        }
    }

    /// Create a transport error for a non-success HTTP status.
    pub fn http_status(status: u16, msg: impl Into<String>) -> Self {
        Self::Transport {
            message: msg.into(),
            status: Some(status),
        }
    }

    /// Create a schema error.
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Short machine-readable name, used as a structured log field.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Transport { .. } => "transport",
            Self::Schema(_) => "schema",
        }
    }
}

impl From<reqwest::Error> for PhishError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::Schema(format!("Failed to parse service response: {}", err));
        }
        match err.status() {
            Some(status) => Self::http_status(status.as_u16(), err.to_string()),
            None if err.is_timeout() => Self::transport(format!("Request timed out: {}", err)),
            None => Self::transport(format!("Failed to connect to classification service: {}", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            PhishError::validation("Please enter a URL").to_string(),
            "Validation error: Please enter a URL"
        );
        assert_eq!(
            PhishError::http_status(500, "boom").to_string(),
            "Transport error: boom"
        );
        assert_eq!(
            PhishError::schema("missing field `prediction`").to_string(),
            "Schema error: missing field `prediction`"
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(PhishError::validation("x").kind_name(), "validation");
        assert_eq!(PhishError::transport("x").kind_name(), "transport");
        assert_eq!(PhishError::schema("x").kind_name(), "schema");
    }

    #[test]
    fn test_http_status_is_kept() {
        match PhishError::http_status(503, "unavailable") {
            PhishError::Transport { status, .. } => assert_eq!(status, Some(503)),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
