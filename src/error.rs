//! Error types for the notifier.

use thiserror::Error;

/// Result type for notifier operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a notification run.
///
/// There are no retries anywhere: every error propagates to the entry point,
/// which reports it to the invoking scheduler through a non-zero exit code.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration is missing or invalid. Raised before any network activity.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// The upstream request could not be completed (connect, timeout, ...).
    #[error("upstream request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// The upstream API answered with a non-success status.
    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The upstream response body was not the expected JSON shape.
    #[error("failed to decode upstream response: {0}")]
    Decode(#[source] serde_json::Error),

    /// A webhook delivery failed.
    #[error("webhook delivery failed: {message}")]
    Dispatch { message: String },
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an upstream status error.
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            body: body.into(),
        }
    }

    /// Creates a dispatch error.
    pub fn dispatch(message: impl Into<String>) -> Self {
        Self::Dispatch {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = Error::config("series_ids is empty");
        assert_eq!(
            format!("{}", err),
            "configuration error: series_ids is empty"
        );
    }

    #[test]
    fn upstream_error_display() {
        let err = Error::upstream(503, "Service Unavailable");
        let display = format!("{}", err);
        assert!(display.contains("503"));
        assert!(display.contains("Service Unavailable"));
    }

    #[test]
    fn decode_error_has_source() {
        use std::error::Error as _;
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::Decode(json_err);
        assert!(err.source().is_some());
    }
}
