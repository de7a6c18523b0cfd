//! Track-related models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::album::AlbumSummary;
use super::artist::Artist;

/// A full track record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Track {
    /// Catalog ID of the track.
    #[serde(default)]
    pub id: String,

    /// Track title.
    #[serde(default)]
    pub name: String,

    /// API URL of this track.
    #[serde(default)]
    pub href: String,

    /// Catalog URI of the track.
    #[serde(default)]
    pub uri: String,

    /// Disc number (1-indexed).
    #[serde(rename = "disc_number", default = "default_one")]
    pub disc: u32,

    /// Track number on the disc (1-indexed).
    #[serde(default = "default_one")]
    pub track_number: u32,

    /// Duration in milliseconds.
    #[serde(default)]
    pub duration_ms: u64,

    /// Popularity score, 0-100 per the API contract.
    #[serde(default)]
    pub popularity: u32,

    /// Known external URLs, keyed by provider name.
    #[serde(default)]
    pub external_urls: HashMap<String, String>,

    /// Artists who performed this track.
    #[serde(default)]
    pub artists: Vec<Artist>,

    /// The containing album, without its own track listing. Absent when
    /// the track was decoded from inside an album's track page.
    #[serde(default)]
    pub album: Option<AlbumSummary>,
}

fn default_one() -> u32 {
    1
}

impl Track {
    /// Create a new track with title and catalog ID.
    pub fn new<S1: Into<String>, S2: Into<String>>(name: S1, id: S2) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            disc: 1,
            track_number: 1,
            ..Default::default()
        }
    }

    /// Get all artist names joined with the given separator.
    pub fn artists_string(&self, separator: &str) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Duration formatted as `m:ss`.
    pub fn duration_formatted(&self) -> String {
        let total_secs = self.duration_ms / 1000;
        format!("{}:{:02}", total_secs / 60, total_secs % 60)
    }
}
