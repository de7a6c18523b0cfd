//! # Melodex
//!
//! A typed Rust client for a music-catalog web API: search plus
//! artist, album and track metadata lookups over HTTP/JSON.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use melodex::{CatalogClient, SearchType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new()?;
//!
//!     // Search the catalog
//!     let result = client
//!         .search("daft punk", &[SearchType::Artist], Some(5), None)
//!         .await?;
//!     for artist in &result.artists.items {
//!         println!("{} ({})", artist.name, artist.id);
//!     }
//!
//!     // Fetch an album with its tracks
//!     let album = client.get_album("6akEvsycLGftJxYudPjmqK").await?;
//!     println!("{}: {} tracks", album.name, album.tracks.total);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Rate limiting
//!
//! Requests answered with HTTP 429 are retried a bounded number of
//! times with exponential backoff, honoring the server's `Retry-After`
//! hint when present. Once the budget is exhausted the client returns
//! [`CatalogError::RateLimited`], so sustained limiting is visible to
//! the caller. The budget is configurable via
//! [`CatalogClient::builder`] and [`RetryPolicy`].

pub mod api;
pub mod error;
pub mod models;

pub use api::{CatalogClient, CatalogClientBuilder, RetryPolicy};
pub use error::{CatalogError, Result};
pub use models::{Album, AlbumSummary, Artist, Image, Page, SearchResult, SearchType, Track};
