use anyhow::Result;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the CKAN catalog (no trailing slash).
    pub catalog_base_url: String,
    /// Base URL of the WordPress CMS (no trailing slash).
    pub content_base_url: String,
    /// Language used when a translated field lacks the UI language.
    pub default_language: String,
    /// Minimum query length for the automatic search at initialization.
    pub min_query_len: usize,
    pub catalog_facet_limit: u32,
    pub content_per_page: u32,
    pub page_items_per_page: usize,
    pub dataset_items_per_page: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            catalog_base_url: env::var("PORTAL_CATALOG_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            content_base_url: env::var("PORTAL_CONTENT_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            default_language: env::var("PORTAL_DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),
            min_query_len: env::var("PORTAL_MIN_QUERY_LEN")
                .unwrap_or_else(|_| "3".to_string())
                .parse()?,
            catalog_facet_limit: env::var("PORTAL_CATALOG_FACET_LIMIT")
                .unwrap_or_else(|_| "100".to_string())
                .parse()?,
            content_per_page: env::var("PORTAL_CONTENT_PER_PAGE")
                .unwrap_or_else(|_| "100".to_string())
                .parse()?,
            page_items_per_page: env::var("PORTAL_PAGE_ITEMS_PER_PAGE")
                .unwrap_or_else(|_| "8".to_string())
                .parse()?,
            dataset_items_per_page: env::var("PORTAL_DATASET_ITEMS_PER_PAGE")
                .unwrap_or_else(|_| "5".to_string())
                .parse()?,
        })
    }

    /// Build a configuration for a portal from its two base URLs, with
    /// the stock page sizes and limits.
    pub fn for_portal(catalog_base_url: impl Into<String>, content_base_url: impl Into<String>) -> Self {
        Self {
            catalog_base_url: catalog_base_url.into(),
            content_base_url: content_base_url.into(),
            default_language: "en".to_string(),
            min_query_len: 3,
            catalog_facet_limit: 100,
            content_per_page: 100,
            page_items_per_page: 8,
            dataset_items_per_page: 5,
        }
    }
}
