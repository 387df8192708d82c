//! Thin client for the external business-search provider used by the
//! theater lookup route. One round-trip, no retries; failures surface to the
//! caller as an upstream error.

use once_cell::sync::Lazy;
use serde_json::Value;
use thiserror::Error;

use crate::config;

const SEARCH_TERM: &str = "Movie Theater";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search provider API key is not configured")]
    NotConfigured,

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("search provider returned {0}")]
    Upstream(String),
}

static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Looks up movie theaters around a free-form location term and returns the
/// provider's business list as-is.
pub async fn find_theaters(location: &str) -> Result<Value, SearchError> {
    let cfg = &config::config().search;
    if cfg.api_key.is_empty() {
        return Err(SearchError::NotConfigured);
    }

    let url = format!("{}/businesses/search", cfg.base_url.trim_end_matches('/'));
    let response = CLIENT
        .get(&url)
        .query(&[("term", SEARCH_TERM), ("location", location)])
        .bearer_auth(&cfg.api_key)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(SearchError::Upstream(response.status().to_string()));
    }

    let body: Value = response.json().await?;
    Ok(body
        .get("businesses")
        .cloned()
        .unwrap_or_else(|| Value::Array(vec![])))
}
