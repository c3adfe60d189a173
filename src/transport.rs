//! HTTP transport abstraction for issuing search requests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::Result;

/// Status and body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for performing the GET behind a search.
///
/// Implementations report connection failures as
/// [`SearchError::Network`](crate::SearchError::Network) and an elapsed
/// deadline as [`SearchError::Timeout`](crate::SearchError::Timeout). Any
/// HTTP status, success or not, is returned as a [`TransportResponse`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Fetches `url` with the given headers, giving up after `timeout`.
    async fn get(&self, url: &str, headers: &HeaderMap, timeout: Duration)
        -> Result<TransportResponse>;
}
