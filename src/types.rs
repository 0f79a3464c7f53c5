// Shared types for the portal search client

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while querying the upstream search APIs
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("{api} request failed: {message}")]
    Request { api: &'static str, message: String },

    #[error("{api} returned HTTP {status}")]
    Status { api: &'static str, status: u16 },

    #[error("failed to parse {api} response: {message}")]
    Parse { api: &'static str, message: String },
}

impl SearchError {
    pub(crate) fn request(api: &'static str, err: reqwest::Error) -> Self {
        SearchError::Request {
            api,
            message: err.to_string(),
        }
    }

    pub(crate) fn parse(api: &'static str, err: impl std::fmt::Display) -> Self {
        SearchError::Parse {
            api,
            message: err.to_string(),
        }
    }
}

pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Normalized display shape for a hit from either API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub title: String,
    pub description: String,
    pub link: String,
}

/// Translated field as the catalog serves it: a map from language code
/// to string. `resolve` defines the missing-key policy: the requested
/// language first, then the portal's default language, then empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(HashMap<String, String>);

impl LocalizedText {
    pub fn resolve(&self, language: &str, fallback: &str) -> String {
        self.0
            .get(language)
            .or_else(|| self.0.get(fallback))
            .cloned()
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, String>> for LocalizedText {
    fn from(map: HashMap<String, String>) -> Self {
        LocalizedText(map)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for LocalizedText {
    fn from(pairs: [(&str, &str); N]) -> Self {
        LocalizedText(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_requested_language() {
        let text = LocalizedText::from([("de", "Zug"), ("en", "Train")]);
        assert_eq!(text.resolve("de", "en"), "Zug");
        assert_eq!(text.resolve("en", "de"), "Train");
    }

    #[test]
    fn test_resolve_falls_back_to_default_language() {
        let text = LocalizedText::from([("en", "Train")]);
        assert_eq!(text.resolve("it", "en"), "Train");
    }

    #[test]
    fn test_resolve_defaults_to_empty() {
        let text = LocalizedText::default();
        assert_eq!(text.resolve("de", "en"), "");

        let text = LocalizedText::from([("fr", "Gare")]);
        assert_eq!(text.resolve("de", "en"), "");
    }

    #[test]
    fn test_deserializes_as_plain_map() {
        let text: LocalizedText =
            serde_json::from_str(r#"{"de": "Bahnhof", "fr": "Gare"}"#).unwrap();
        assert_eq!(text.resolve("fr", "en"), "Gare");
    }

    #[test]
    fn test_error_messages_name_the_api() {
        let err = SearchError::Status {
            api: "catalog",
            status: 503,
        };
        assert_eq!(err.to_string(), "catalog returned HTTP 503");
    }
}
