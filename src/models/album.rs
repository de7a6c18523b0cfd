//! Album-related models.
//!
//! `Album` carries its track page; `AlbumSummary` is the track-less
//! form embedded in a [`Track`](super::track::Track), which keeps the
//! album/track relationship one-directional instead of structurally
//! recursive.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::common::{Image, Page};
use super::artist::Artist;
use super::track::Track;

/// A full album record, including its (paged) track listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Album {
    /// Catalog ID of the album.
    #[serde(default)]
    pub id: String,

    /// Album title.
    #[serde(default)]
    pub name: String,

    /// Release date, e.g. `"1997-05-21"`. Precision varies; older
    /// releases may carry only a year.
    #[serde(default)]
    pub release_date: String,

    /// Album type: `"album"`, `"single"` or `"compilation"`.
    #[serde(default)]
    pub album_type: String,

    /// Genres associated with the album.
    #[serde(default)]
    pub genres: Vec<String>,

    /// Cover images in various sizes.
    #[serde(default)]
    pub images: Vec<Image>,

    /// Artists credited on the album.
    #[serde(default)]
    pub artists: Vec<Artist>,

    /// API URL of this album.
    #[serde(default)]
    pub href: String,

    /// Popularity score, 0-100 per the API contract.
    #[serde(default)]
    pub popularity: u32,

    /// Known external URLs, keyed by provider name.
    #[serde(default)]
    pub external_urls: HashMap<String, String>,

    /// The album's tracks. Empty when the API returned the album in a
    /// context that omits the listing (search results, artist albums).
    #[serde(default)]
    pub tracks: Page<Track>,
}

impl Album {
    /// Create a new album with title and catalog ID.
    pub fn new<S1: Into<String>, S2: Into<String>>(name: S1, id: S2) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Get all credited artist names joined with the given separator.
    pub fn artists_string(&self, separator: &str) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Get the largest cover image available.
    pub fn largest_image(&self) -> Option<&Image> {
        self.images.iter().max_by_key(|img| img.width * img.height)
    }
}

/// Album metadata as embedded in a track, without the track listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AlbumSummary {
    /// Catalog ID of the album.
    #[serde(default)]
    pub id: String,

    /// Album title.
    #[serde(default)]
    pub name: String,

    /// Release date.
    #[serde(default)]
    pub release_date: String,

    /// Album type: `"album"`, `"single"` or `"compilation"`.
    #[serde(default)]
    pub album_type: String,

    /// Cover images in various sizes.
    #[serde(default)]
    pub images: Vec<Image>,

    /// API URL of this album.
    #[serde(default)]
    pub href: String,

    /// Known external URLs, keyed by provider name.
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
}
