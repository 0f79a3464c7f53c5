//! Search source clients
//!
//! One client per upstream API:
//! - `catalog`: the CKAN dataset catalog (`package_search` action)
//! - `content`: the WordPress CMS page search (`wp/v2/pages`)
//!
//! Both are read-only GET clients that normalize their hits into
//! `ResultItem`.

pub mod catalog;
pub mod content;

pub use catalog::CatalogClient;
pub use content::ContentClient;
