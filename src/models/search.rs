//! Search result envelope.

use serde::{Deserialize, Serialize};

use super::album::Album;
use super::artist::Artist;
use super::common::Page;
use super::track::Track;

/// Result of a catalog search.
///
/// Only the categories named in the search's `type` filter are
/// populated; the others stay at their empty defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// Artists matching the query.
    #[serde(default)]
    pub artists: Page<Artist>,

    /// Albums matching the query.
    #[serde(default)]
    pub albums: Page<Album>,

    /// Tracks matching the query.
    #[serde(default)]
    pub tracks: Page<Track>,
}
