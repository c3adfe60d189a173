//! HTTP transport using reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Client;

use crate::transport::{HttpTransport, TransportResponse};
use crate::{Result, SearchError};

const USER_AGENT: &str = concat!("searxng-client/", env!("CARGO_PKG_VERSION"));

/// A transport that issues requests through a shared reqwest [`Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with default settings.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;
        Ok(Self { client })
    }

    /// Creates a transport around a preconfigured reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        headers: &HeaderMap,
        timeout: Duration,
    ) -> Result<TransportResponse> {
        let response = self
            .client
            .get(url)
            .headers(headers.clone())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| map_error(e, timeout))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| map_error(e, timeout))?;

        Ok(TransportResponse { status, body })
    }
}

fn map_error(error: reqwest::Error, timeout: Duration) -> SearchError {
    if error.is_timeout() {
        SearchError::Timeout(timeout)
    } else {
        SearchError::Network(error.to_string())
    }
}
