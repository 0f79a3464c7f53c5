//! WordPress Content Client
//!
//! Queries the CMS page search (`wp/v2/pages`) and maps each hit's
//! rendered title and excerpt into the display shape. Pages already
//! carry an absolute link, so no link building happens here.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::types::{ResultItem, SearchError, SearchResult};

const API: &str = "content";
const SEARCH_PATH: &str = "/wp-json/wp/v2/pages/";

/// Client for the CMS page search endpoint
pub struct ContentClient {
    client: Client,
    base_url: String,
    per_page: u32,
}

// Response types for the pages endpoint
#[derive(Debug, Deserialize)]
struct PageHit {
    #[serde(default)]
    title: Rendered,
    #[serde(default)]
    excerpt: Rendered,
    #[serde(default)]
    link: String,
}

#[derive(Debug, Default, Deserialize)]
struct Rendered {
    #[serde(default)]
    rendered: String,
}

impl ContentClient {
    /// Create a client for a CMS base URL (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            per_page: 100,
        }
    }

    /// Configure client from config
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(config.content_base_url.clone()).with_per_page(config.content_per_page)
    }

    /// Set the page size requested from the CMS
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    /// Search CMS pages and map the hits
    pub async fn search(&self, query: &str) -> SearchResult<Vec<ResultItem>> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);

        info!(query = %query, "searching CMS pages");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("filter[s]", query.to_string()),
                ("per_page", self.per_page.to_string()),
            ])
            .send()
            .await
            .map_err(|e| SearchError::request(API, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                api: API,
                status: status.as_u16(),
            });
        }

        let hits: Vec<PageHit> = response
            .json()
            .await
            .map_err(|e| SearchError::parse(API, e))?;

        debug!(raw_count = hits.len(), "content response parsed");

        let items: Vec<ResultItem> = hits
            .into_iter()
            .map(|hit| ResultItem {
                title: hit.title.rendered,
                description: hit.excerpt.rendered,
                link: hit.link,
            })
            .collect();

        info!(count = items.len(), "content search completed");
        Ok(items)
    }
}
