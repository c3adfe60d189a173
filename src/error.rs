//! Error types for the client.

use std::time::Duration;

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while talking to a SearXNG instance.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Connection, DNS or body read failure.
    #[error("Failed to fetch search results: {0}")]
    Network(String),

    /// The request did not complete before the deadline.
    #[error("Failed to fetch search results: request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    /// The server answered with a non-success status.
    #[error("Failed to fetch search results: HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// The body could not be read as a search response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The configured base URL is not an absolute URL.
    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A configured request header is not a valid HTTP header.
    #[error("Invalid request header: {0}")]
    InvalidHeader(String),
}

impl SearchError {
    /// Returns true for failures of the GET itself (network, timeout, status).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout(_) | Self::HttpStatus { .. }
        )
    }

    /// Returns the HTTP status code, if the server answered with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_network() {
        let err = SearchError::Network("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to fetch search results: connection refused"
        );
    }

    #[test]
    fn test_error_display_timeout() {
        let err = SearchError::Timeout(Duration::from_millis(5000));
        assert_eq!(
            err.to_string(),
            "Failed to fetch search results: request timed out after 5000ms"
        );
    }

    #[test]
    fn test_error_display_http_status() {
        let err = SearchError::HttpStatus {
            status: 429,
            message: "Too Many Requests".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch search results: HTTP 429: Too Many Requests"
        );
    }

    #[test]
    fn test_error_display_parse() {
        let err = SearchError::Parse("expected value at line 1".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to parse response: expected value at line 1"
        );
    }

    #[test]
    fn test_error_from_url_parse() {
        let err: SearchError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, SearchError::InvalidUrl(_)));
        assert!(err.to_string().starts_with("Invalid base URL"));
    }

    #[test]
    fn test_is_transport() {
        assert!(SearchError::Network("x".into()).is_transport());
        assert!(SearchError::Timeout(Duration::from_secs(5)).is_transport());
        assert!(SearchError::HttpStatus {
            status: 500,
            message: String::new()
        }
        .is_transport());
        assert!(!SearchError::Parse("x".into()).is_transport());
        assert!(!SearchError::InvalidHeader("x".into()).is_transport());
    }

    #[test]
    fn test_status() {
        let err = SearchError::HttpStatus {
            status: 503,
            message: "unavailable".into(),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(SearchError::Network("x".into()).status(), None);
    }

    #[test]
    fn test_error_debug() {
        let err = SearchError::Timeout(Duration::from_secs(5));
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Timeout"));
    }
}
