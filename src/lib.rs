//! # searxng-client
//!
//! A typed async client for the JSON search API of a SearXNG instance.
//!
//! - Structured, optional search parameters merged over per-client defaults
//! - Query URL construction for the `/search` endpoint
//! - A fixed 5 second deadline per request
//! - Zero-result responses collapsed to one canonical empty value
//! - Pluggable HTTP transport (reqwest by default)
//!
//! ## Example
//!
//! ```rust,no_run
//! use searxng_client::{Category, ClientConfig, SearchParameters, SearxngClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = SearxngClient::new(ClientConfig::new("http://localhost:8080"))?;
//!
//!     let params = SearchParameters::new()
//!         .with_categories([Category::General, Category::Web])
//!         .with_pageno(2);
//!     let results = client.search("rust programming", Some(&params)).await?;
//!
//!     for result in &results.results {
//!         println!("{}: {}", result.title, result.url);
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod params;
mod result;
mod transport_http;
mod url_builder;

pub mod transport;

pub use client::{SearxngClient, REQUEST_TIMEOUT};
pub use config::ClientConfig;
pub use error::{Result, SearchError};
pub use params::{
    Autocomplete, Category, EngineName, Format, Language, Plugin, SafeSearch, SearchParameters,
    Theme, TimeRange, QUERY_KEY, RECOGNIZED_KEYS,
};
pub use result::{is_empty_results, Infobox, SearchResult, SearchResults};
pub use transport::{HttpTransport, TransportResponse};
pub use transport_http::ReqwestTransport;
pub use url_builder::build_url;
