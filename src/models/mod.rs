//! Data models for catalog API responses.
//!
//! This module contains all the data structures used to represent
//! artists, albums, tracks and search results.

pub mod album;
pub mod artist;
pub mod common;
pub mod search;
pub mod track;

// Re-exports for convenience
pub use album::{Album, AlbumSummary};
pub use artist::Artist;
pub use common::{Image, Page, SearchType};
pub use search::SearchResult;
pub use track::Track;
