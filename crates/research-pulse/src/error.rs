//! Error types for the upstream API clients.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. Every variant means the same thing to the view layer:
//! the live path produced no usable data.

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the upstream.
    #[error("upstream returned status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// JSON parsing error.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Response parsed but lacked the data the caller needs.
    #[error("response missing expected data: {0}")]
    MissingData(&'static str),

    /// Completion API key not configured.
    #[error("completion API key not configured")]
    MissingApiKey,
}

impl ClientError {
    /// Create a non-success status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status { status, message: message.into() }
    }

    /// Create a missing-data error.
    #[must_use]
    pub const fn missing(what: &'static str) -> Self {
        Self::MissingData(what)
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = ClientError::status(503, "service unavailable");
        let text = err.to_string();
        assert!(text.contains("503"));
        assert!(text.contains("service unavailable"));
    }

    #[test]
    fn test_missing_data_display() {
        let err = ClientError::missing("choices");
        assert!(err.to_string().contains("choices"));
    }
}
