// Portal Search - federated search client for an open-data portal
//
// Fans a user query out to the portal's dataset catalog (CKAN) and its
// CMS page search (WordPress), normalizes both result shapes, and
// paginates the two lists independently. Rendering belongs to the host
// application; this crate owns the state and the HTTP calls.

pub mod config;
pub mod pagination;
pub mod sources;
pub mod types;
pub mod widget;

// Re-exports for convenience
pub use config::Config;
pub use pagination::Pagination;
pub use types::{LocalizedText, ResultItem, SearchError, SearchResult};
pub use widget::{ResultList, SearchState, SearchWidget};
