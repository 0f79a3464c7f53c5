//! Search Widget
//!
//! Owns the search state and the two source clients. One `search`
//! call fans the query out to the catalog and the CMS concurrently,
//! waits for both, and replaces both result lists together; the two
//! lists then paginate independently.
//!
//! `search` takes `&mut self`, so two searches cannot overlap on the
//! same widget; the borrow rules stand in for the request-generation
//! token a shared-state port would need.

use tracing::{info, warn};

use crate::config::Config;
use crate::pagination::Pagination;
use crate::sources::{CatalogClient, ContentClient};
use crate::types::{ResultItem, SearchResult};

/// Which result list a pagination operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultList {
    Pages,
    Datasets,
}

/// Observable widget state, bound by the rendering collaborator
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Query as currently typed (or taken from the page URL).
    pub query: String,
    /// Query of the last search that completed successfully.
    pub last_executed_query: String,
    pub is_loading: bool,
    /// Two-letter UI language, fixed at initialization.
    pub language: String,
    pub dataset_results: Vec<ResultItem>,
    pub page_results: Vec<ResultItem>,
    /// Message from the last failed search, cleared on the next one.
    pub last_error: Option<String>,
}

/// Federated search over the portal's catalog and CMS
pub struct SearchWidget {
    catalog: CatalogClient,
    content: ContentClient,
    min_query_len: usize,
    default_language: String,
    pub state: SearchState,
    pub paginate_pages: Pagination,
    pub paginate_datasets: Pagination,
}

impl SearchWidget {
    pub fn new(config: &Config) -> Self {
        Self {
            catalog: CatalogClient::from_config(config),
            content: ContentClient::from_config(config),
            min_query_len: config.min_query_len,
            default_language: config.default_language.clone(),
            state: SearchState::default(),
            paginate_pages: Pagination::new(config.page_items_per_page),
            paginate_datasets: Pagination::new(config.dataset_items_per_page),
        }
    }

    /// Initialize from the host page: pick the UI language from the
    /// page's `lang` attribute and, when the page URL carries a `q`
    /// parameter of at least `min_query_len` characters, run the
    /// initial search with it. Shorter values only prefill the query,
    /// with no network call.
    pub async fn initialize(
        &mut self,
        lang_attr: Option<&str>,
        page_url: &str,
    ) -> SearchResult<()> {
        self.state.language = parse_language(lang_attr, &self.default_language);
        info!(language = %self.state.language, "widget initialized");

        if let Some(query) = initial_query(page_url) {
            self.state.query = query.clone();
            if query.chars().count() >= self.min_query_len {
                self.search(&query).await?;
            }
        }
        Ok(())
    }

    /// Run the query against both APIs and replace both result lists.
    ///
    /// Any string is accepted, including empty; validation belongs to
    /// the APIs. Waits for BOTH requests to settle. If either fails,
    /// the previous results stay in place, `is_loading` is reset and
    /// the error is both returned and mirrored into
    /// `state.last_error`.
    pub async fn search(&mut self, query: &str) -> SearchResult<()> {
        self.state.is_loading = true;
        self.state.last_error = None;

        info!(query = %query, "running federated search");

        let (datasets, pages) = tokio::join!(
            self.catalog.search(query, &self.state.language),
            self.content.search(query),
        );

        let (datasets, pages) = match (datasets, pages) {
            (Ok(datasets), Ok(pages)) => (datasets, pages),
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "federated search failed");
                self.state.is_loading = false;
                self.state.last_error = Some(e.to_string());
                return Err(e);
            }
        };

        self.state.dataset_results = datasets;
        self.state.page_results = pages;
        self.paginate_datasets
            .sync_count(self.state.dataset_results.len());
        self.paginate_pages.sync_count(self.state.page_results.len());

        self.state.query = query.to_string();
        self.state.last_executed_query = query.to_string();
        self.state.is_loading = false;

        info!(
            datasets = self.state.dataset_results.len(),
            pages = self.state.page_results.len(),
            "federated search completed"
        );
        Ok(())
    }

    /// Jump the named list to a page index. No bounds check here; the
    /// index is clamped when the page is read or the list changes.
    pub fn set_page(&mut self, page_index: usize, which: ResultList) {
        match which {
            ResultList::Pages => self.paginate_pages.set_page(page_index),
            ResultList::Datasets => self.paginate_datasets.set_page(page_index),
        }
    }

    /// Current page of CMS page results
    pub fn current_page_results(&mut self) -> &[ResultItem] {
        self.paginate_pages.page_slice(&self.state.page_results)
    }

    /// Current page of dataset results
    pub fn current_dataset_results(&mut self) -> &[ResultItem] {
        self.paginate_datasets
            .page_slice(&self.state.dataset_results)
    }
}

/// Primary subtag of the host page's `lang` attribute ("de-CH" →
/// "de"), or the default language when absent or empty.
fn parse_language(lang_attr: Option<&str>, default_language: &str) -> String {
    lang_attr
        .and_then(|lang| lang.split('-').next())
        .map(str::trim)
        .filter(|lang| !lang.is_empty())
        .unwrap_or(default_language)
        .to_string()
}

/// Decoded `q` parameter of the page URL, if any
fn initial_query(page_url: &str) -> Option<String> {
    let url = reqwest::Url::parse(page_url).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const CATALOG_BODY: &str = r#"{"result": {"results": [
        {"title": {"en": "T"}, "description": {"en": "D"}, "name": "n"}
    ]}}"#;
    const CONTENT_BODY: &str =
        r#"[{"title": {"rendered": "T2"}, "excerpt": {"rendered": "D2"}, "link": "/page/2"}]"#;

    async fn mock_portal() -> (mockito::ServerGuard, Config) {
        let server = mockito::Server::new_async().await;
        let config = Config::for_portal(server.url(), server.url());
        (server, config)
    }

    async fn mock_both(server: &mut mockito::ServerGuard) -> (mockito::Mock, mockito::Mock) {
        let catalog = server
            .mock("GET", "/api/3/action/package_search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(CATALOG_BODY)
            .create_async()
            .await;
        let content = server
            .mock("GET", "/wp-json/wp/v2/pages/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(CONTENT_BODY)
            .create_async()
            .await;
        (catalog, content)
    }

    #[test]
    fn test_parse_language_takes_primary_subtag() {
        assert_eq!(parse_language(Some("de-CH"), "en"), "de");
        assert_eq!(parse_language(Some("fr"), "en"), "fr");
        assert_eq!(parse_language(None, "en"), "en");
        assert_eq!(parse_language(Some(""), "en"), "en");
    }

    #[test]
    fn test_initial_query_decodes_the_parameter() {
        assert_eq!(
            initial_query("https://portal.example.org/en/search?q=zug%20station"),
            Some("zug station".to_string())
        );
        assert_eq!(
            initial_query("https://portal.example.org/en/search?page=2"),
            None
        );
        assert_eq!(initial_query("not a url"), None);
    }

    #[tokio::test]
    async fn test_initialize_runs_search_for_long_enough_query() {
        let (mut server, config) = mock_portal().await;
        let (catalog, content) = mock_both(&mut server).await;

        let mut widget = SearchWidget::new(&config);
        widget
            .initialize(Some("de-CH"), "https://portal.example.org/de/suche?q=zug")
            .await
            .unwrap();

        assert_eq!(widget.state.language, "de");
        assert_eq!(widget.state.query, "zug");
        assert_eq!(widget.state.last_executed_query, "zug");
        assert!(!widget.state.is_loading);
        catalog.assert_async().await;
        content.assert_async().await;
    }

    #[tokio::test]
    async fn test_initialize_skips_search_for_short_query() {
        let (_server, config) = mock_portal().await;

        // no mocks registered: any request would make initialize
        // return an error and fail the unwrap below
        let mut widget = SearchWidget::new(&config);
        widget
            .initialize(None, "https://portal.example.org/en/search?q=zu")
            .await
            .unwrap();

        assert_eq!(widget.state.language, "en");
        assert_eq!(widget.state.query, "zu");
        assert_eq!(widget.state.last_executed_query, "");
        assert!(widget.state.dataset_results.is_empty());
        assert!(widget.state.page_results.is_empty());
    }

    #[tokio::test]
    async fn test_search_replaces_both_result_lists() {
        let (mut server, config) = mock_portal().await;
        let _mocks = mock_both(&mut server).await;

        let mut widget = SearchWidget::new(&config);
        widget.state.language = "en".to_string();
        widget.search("x").await.unwrap();

        assert_eq!(widget.state.last_executed_query, "x");
        assert!(!widget.state.is_loading);
        assert_eq!(widget.state.dataset_results[0].link, "/en/dataset/n");
        assert_eq!(widget.state.page_results[0].title, "T2");
        assert_eq!(widget.paginate_datasets.result_count(), 1);
        assert_eq!(widget.paginate_pages.result_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_search_keeps_previous_results_and_resets_loading() {
        let (mut server, config) = mock_portal().await;

        let mut widget = SearchWidget::new(&config);
        widget.state.language = "en".to_string();

        let _first = mock_both(&mut server).await;
        widget.search("first").await.unwrap();
        server.reset_async().await;

        let _catalog_down = server
            .mock("GET", "/api/3/action/package_search")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;
        let _content_up = server
            .mock("GET", "/wp-json/wp/v2/pages/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let err = widget.search("second").await.unwrap_err();

        assert!(err.to_string().contains("catalog"));
        assert!(!widget.state.is_loading);
        assert!(widget.state.last_error.is_some());
        // previous results are untouched
        assert_eq!(widget.state.last_executed_query, "first");
        assert_eq!(widget.state.dataset_results.len(), 1);
        assert_eq!(widget.state.page_results.len(), 1);
    }

    #[tokio::test]
    async fn test_set_page_moves_one_list_only() {
        let (_server, config) = mock_portal().await;
        let mut widget = SearchWidget::new(&config);

        widget.state.page_results = (0..20)
            .map(|i| ResultItem {
                title: format!("page {i}"),
                description: String::new(),
                link: format!("/page/{i}"),
            })
            .collect();
        widget.paginate_pages.sync_count(20);

        widget.set_page(2, ResultList::Pages);

        let page = widget.current_page_results();
        assert_eq!(page.len(), 4);
        assert_eq!(page[0].title, "page 16");
        assert_eq!(widget.paginate_datasets.current_page(), 0);
    }
}
