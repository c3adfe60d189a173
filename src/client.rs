//! Search orchestration.

use std::sync::Arc;

use reqwest::header::HeaderMap;
use tokio::time::{timeout, Duration};
use tracing::{debug, error, instrument};

use crate::params::QUERY_KEY;
use crate::transport::HttpTransport;
use crate::transport_http::ReqwestTransport;
use crate::url_builder::build_url;
use crate::{ClientConfig, Result, SearchError, SearchParameters, SearchResults};

/// Deadline for one search request, body included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(5000);

const SEARCH_ENDPOINT: &str = "search";

/// Client for the JSON search API of one SearXNG instance.
///
/// The client is cheap to clone and holds no per-call state, so one
/// instance can serve concurrent searches.
#[derive(Clone)]
pub struct SearxngClient {
    base_url: String,
    default_params: SearchParameters,
    headers: HeaderMap,
    transport: Arc<dyn HttpTransport>,
}

impl SearxngClient {
    /// Creates a client that talks HTTP through reqwest.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_transport(config, ReqwestTransport::new()?)
    }

    /// Creates a client that issues requests through `transport`.
    pub fn with_transport<T: HttpTransport + 'static>(
        config: ClientConfig,
        transport: T,
    ) -> Result<Self> {
        Ok(Self {
            base_url: config.resolved_base_url()?,
            default_params: SearchParameters::builtin_defaults()
                .merge(&config.default_search_params),
            headers: config.resolved_headers()?,
            transport: Arc::new(transport),
        })
    }

    /// Base URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Built-in defaults merged with the configured ones.
    pub fn default_params(&self) -> &SearchParameters {
        &self.default_params
    }

    /// Headers sent with every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the URL a search for `query` with `overrides` would fetch.
    pub fn search_url(&self, query: &str, overrides: Option<&SearchParameters>) -> String {
        let params = match overrides {
            Some(overrides) => self.default_params.merge(overrides),
            None => self.default_params.clone(),
        };

        let mut pairs = vec![(QUERY_KEY.to_string(), Some(query.to_string()))];
        pairs.extend(params.to_pairs());

        build_url(&self.base_url, SEARCH_ENDPOINT, pairs)
    }

    /// Runs one search.
    ///
    /// `q` is always `query`, whatever `overrides` contains. A response with
    /// no results, answers, infoboxes or suggestions is replaced by
    /// [`SearchResults::empty`].
    #[instrument(skip(self, overrides), fields(base_url = %self.base_url))]
    pub async fn search(
        &self,
        query: &str,
        overrides: Option<&SearchParameters>,
    ) -> Result<SearchResults> {
        let url = self.search_url(query, overrides);
        debug!(url = %url, "Sending search request");

        let response = match timeout(
            REQUEST_TIMEOUT,
            self.transport.get(&url, &self.headers, REQUEST_TIMEOUT),
        )
        .await
        {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                error!(error = %e, "Search request failed");
                return Err(e);
            }
            Err(_) => {
                error!(timeout = ?REQUEST_TIMEOUT, "Search request timed out");
                return Err(SearchError::Timeout(REQUEST_TIMEOUT));
            }
        };

        if !response.is_success() {
            let message = reqwest::StatusCode::from_u16(response.status)
                .ok()
                .and_then(|status| status.canonical_reason())
                .unwrap_or("unexpected status")
                .to_string();
            error!(status = response.status, "Search request returned an error status");
            return Err(SearchError::HttpStatus {
                status: response.status,
                message,
            });
        }

        let results: SearchResults = serde_json::from_str(&response.body).map_err(|e| {
            error!(error = %e, "Failed to parse search response");
            SearchError::Parse(e.to_string())
        })?;

        if results.is_empty() {
            debug!("No results, returning canonical empty response");
            return Ok(SearchResults::empty(query));
        }

        debug!(result_count = results.results.len(), "Search completed");
        Ok(results)
    }
}
