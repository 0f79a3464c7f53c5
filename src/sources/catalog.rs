//! CKAN Catalog Client
//!
//! Queries the portal's `package_search` action and maps each package
//! into the display shape. Titles and descriptions arrive as
//! per-language maps; the link is built from the UI language and the
//! package name (`/{lang}/dataset/{name}`).

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::types::{LocalizedText, ResultItem, SearchError, SearchResult};

const API: &str = "catalog";
const SEARCH_PATH: &str = "/api/3/action/package_search";

/// Client for the dataset catalog's search action
pub struct CatalogClient {
    client: Client,
    base_url: String,
    facet_limit: u32,
    default_language: String,
}

// Response types for the package_search action
#[derive(Debug, Deserialize)]
struct PackageSearchResponse {
    result: PackageSearchResult,
}

#[derive(Debug, Deserialize)]
struct PackageSearchResult {
    #[serde(default)]
    results: Vec<CatalogPackage>,
}

#[derive(Debug, Deserialize)]
struct CatalogPackage {
    #[serde(default)]
    title: LocalizedText,
    #[serde(default)]
    description: LocalizedText,
    name: String,
}

impl CatalogClient {
    /// Create a client for a catalog base URL (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            facet_limit: 100,
            default_language: "en".to_string(),
        }
    }

    /// Configure client from config
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(config.catalog_base_url.clone())
            .with_facet_limit(config.catalog_facet_limit)
            .with_default_language(config.default_language.clone())
    }

    /// Set the facet limit sent with every search
    pub fn with_facet_limit(mut self, limit: u32) -> Self {
        self.facet_limit = limit;
        self
    }

    /// Set the fallback language for translated fields
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    /// Search the catalog and map the hits for the given UI language
    pub async fn search(&self, query: &str, language: &str) -> SearchResult<Vec<ResultItem>> {
        let url = format!("{}{}", self.base_url, SEARCH_PATH);

        info!(query = %query, "searching dataset catalog");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("facet.limit", self.facet_limit.to_string()),
                ("q", query.to_string()),
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

        let body: PackageSearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::parse(API, e))?;

        debug!(raw_count = body.result.results.len(), "catalog response parsed");

        let items: Vec<ResultItem> = body
            .result
            .results
            .iter()
            .map(|package| package.to_result_item(language, &self.default_language))
            .collect();

        info!(count = items.len(), "catalog search completed");
        Ok(items)
    }
}

impl CatalogPackage {
    fn to_result_item(&self, language: &str, fallback: &str) -> ResultItem {
        ResultItem {
            title: self.title.resolve(language, fallback),
            description: self.description.resolve(language, fallback),
            link: format!("/{}/dataset/{}", language, self.name),
        }
    }
}
