//! Client configuration.

use std::collections::BTreeMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{Result, SearchError, SearchParameters};

/// Configuration for a [`SearxngClient`](crate::SearxngClient).
///
/// `default_search_params` are merged over the built-in `format=json` and
/// `lang=auto`. `default_request_headers` are merged over the built-in
/// `Content-Type: application/json`; header names compare case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root URL of the SearXNG instance, e.g. `http://localhost:8080`.
    pub base_url: String,
    #[serde(default)]
    pub default_search_params: SearchParameters,
    #[serde(default)]
    pub default_request_headers: BTreeMap<String, String>,
}

impl ClientConfig {
    /// Creates a configuration with no instance-level defaults.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_search_params: SearchParameters::default(),
            default_request_headers: BTreeMap::new(),
        }
    }

    /// Sets the parameters applied to every search from this client.
    pub fn with_default_params(mut self, params: SearchParameters) -> Self {
        self.default_search_params = params;
        self
    }

    /// Adds a header sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_request_headers.insert(name.into(), value.into());
        self
    }

    /// Validates `base_url` and returns it without trailing slashes.
    pub(crate) fn resolved_base_url(&self) -> Result<String> {
        Url::parse(&self.base_url)?;
        Ok(self.base_url.trim_end_matches('/').to_string())
    }

    /// Built-in headers overlaid with the configured ones.
    pub(crate) fn resolved_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &self.default_request_headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| SearchError::InvalidHeader(format!("{}: {}", name, e)))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| SearchError::InvalidHeader(format!("{}: {}", name, e)))?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Format, SafeSearch};

    #[test]
    fn test_config_new() {
        let config = ClientConfig::new("http://localhost:8080");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.default_search_params, SearchParameters::default());
        assert!(config.default_request_headers.is_empty());
    }

    #[test]
    fn test_resolved_base_url_strips_trailing_slash() {
        let config = ClientConfig::new("http://localhost:8080/");
        assert_eq!(config.resolved_base_url().unwrap(), "http://localhost:8080");

        let config = ClientConfig::new("https://search.example.org/searx//");
        assert_eq!(
            config.resolved_base_url().unwrap(),
            "https://search.example.org/searx"
        );
    }

    #[test]
    fn test_resolved_base_url_rejects_relative() {
        let config = ClientConfig::new("/search");
        assert!(matches!(
            config.resolved_base_url(),
            Err(SearchError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_resolved_headers_builtin() {
        let headers = ClientConfig::new("http://localhost").resolved_headers().unwrap();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_resolved_headers_override_case_insensitive() {
        let headers = ClientConfig::new("http://localhost")
            .with_header("content-type", "text/plain")
            .with_header("Authorization", "Bearer token")
            .resolved_headers()
            .unwrap();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers[CONTENT_TYPE], "text/plain");
        assert_eq!(headers["authorization"], "Bearer token");
    }

    #[test]
    fn test_resolved_headers_invalid() {
        let result = ClientConfig::new("http://localhost")
            .with_header("bad header", "x")
            .resolved_headers();
        assert!(matches!(result, Err(SearchError::InvalidHeader(_))));

        let result = ClientConfig::new("http://localhost")
            .with_header("X-Ok", "line\nbreak")
            .resolved_headers();
        assert!(matches!(result, Err(SearchError::InvalidHeader(_))));
    }

    #[test]
    fn test_config_deserialization() {
        let json = r#"{
            "base_url": "http://localhost:8080",
            "default_search_params": {"format": "json", "safesearch": "moderate"},
            "default_request_headers": {"X-Api-Key": "secret"}
        }"#;
        let config: ClientConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_search_params.format, Some(Format::Json));
        assert_eq!(
            config.default_request_headers.get("X-Api-Key").map(String::as_str),
            Some("secret")
        );
    }

    #[test]
    fn test_config_deserialization_numeric_safesearch() {
        let json = r#"{
            "base_url": "http://localhost:8080",
            "default_search_params": {"safesearch": 2}
        }"#;
        let config: ClientConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.default_search_params.safesearch,
            Some(SafeSearch::Strict)
        );
    }

    #[test]
    fn test_config_deserialization_minimal() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost"}"#).unwrap();
        assert_eq!(config, ClientConfig::new("http://localhost"));
    }
}
