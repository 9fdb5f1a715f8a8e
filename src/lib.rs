//! Albumshelf Browser Library
//!
//! Terminal browser for a personal album catalog served over REST: fetch
//! the collection, filter/sort it locally, and share the view as a query
//! string.

pub mod browse;
pub mod catalog;
pub mod client;
pub mod config;

// Re-export commonly used types for convenience
pub use browse::{browse_albums, browse_artists, BrowseSession, BrowseState};
pub use catalog::{Album, Artist, SortNameRules};
pub use client::CatalogApi;
