//! Fetcher error types.

use thiserror::Error;

/// Result type for audit-trail fetches.
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while fetching audit events.
///
/// Every variant is terminal: nothing is retried and no partial result is
/// kept.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The bearer token was empty.
    #[error("organization token must be provided")]
    MissingToken,

    /// The configured endpoint is not a valid URL.
    #[error("invalid audit trail endpoint {endpoint:?}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },

    /// Network or HTTP stack failure.
    #[error("request failed")]
    Transport(#[from] reqwest::Error),

    /// The server answered with anything other than 200.
    #[error("unexpected response status: {0}")]
    UnexpectedStatus(u16),

    /// The body was not a valid audit-trail envelope.
    #[error("failed to decode response body")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_unexpected_status_message_carries_code() {
        let err = FetchError::UnexpectedStatus(503);
        assert_eq!(err.to_string(), "unexpected response status: 503");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_decode_cause_is_source_not_message() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let cause_text = cause.to_string();
        let err = FetchError::from(cause);

        assert_eq!(err.to_string(), "failed to decode response body");
        assert_eq!(err.source().map(ToString::to_string), Some(cause_text));
    }

    #[test]
    fn test_invalid_endpoint_cause_is_source_not_message() {
        let err = FetchError::InvalidEndpoint {
            endpoint: "nope".to_string(),
            source: url::ParseError::RelativeUrlWithoutBase,
        };

        assert_eq!(err.to_string(), "invalid audit trail endpoint \"nope\"");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("relative URL without a base")
        );
    }
}
