use thiserror::Error;
use tracing::warn;

use jargon_core::ValidationError;

/// Longest error-body excerpt kept in a [`ApiError::Status`].
const MAX_BODY_SNIPPET: usize = 400;

/// Everything an operation can fail with.
///
/// Transport failures are classified exactly once, at the client boundary,
/// then propagated unchanged; logging is a side effect of classification.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server responded with a non-2xx status.
    #[error("server responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request went out but no response arrived (connect failure,
    /// timeout, connection dropped mid-flight).
    #[error("no response from server: {0}")]
    NoResponse(#[source] reqwest::Error),

    /// The request could not be built or sent at all.
    #[error("request could not be sent: {0}")]
    Setup(#[source] reqwest::Error),

    /// A 2xx response whose body did not parse as the expected shape.
    #[error("malformed response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// Client-side pre-submission rejection; never reaches the network.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ApiError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::Validation(_))
    }
}

/// Sort a transport error into its [`ApiError`] kind and log it.
pub(crate) fn classify(path: &str, err: reqwest::Error) -> ApiError {
    if err.is_builder() {
        warn!(path, error = %err, "request could not be constructed");
        ApiError::Setup(err)
    } else if err.is_decode() {
        warn!(path, error = %err, "response body did not decode");
        ApiError::Decode(err)
    } else if err.is_timeout() || err.is_connect() || err.is_request() {
        warn!(path, error = %err, "no response from server");
        ApiError::NoResponse(err)
    } else {
        warn!(path, error = %err, "request failed before send");
        ApiError::Setup(err)
    }
}

/// Cap an error body for logs and error values, on a char boundary.
pub(crate) fn body_snippet(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.len() <= MAX_BODY_SNIPPET {
        return trimmed.to_string();
    }
    let mut end = MAX_BODY_SNIPPET;
    while end > 0 && !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &trimmed[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_bodies_are_truncated() {
        let snippet = body_snippet("x".repeat(1000));
        assert_eq!(snippet.len(), MAX_BODY_SNIPPET + 3);
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = "é".repeat(MAX_BODY_SNIPPET);
        let snippet = body_snippet(body);
        assert!(snippet.len() <= MAX_BODY_SNIPPET + 3);
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn short_bodies_pass_through() {
        assert_eq!(body_snippet("  not found  ".to_string()), "not found");
    }

    #[test]
    fn validation_errors_convert() {
        let err: ApiError = ValidationError::EmptyTerm.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "term must not be empty");
    }
}
