//! Common types shared across all models.

use serde::{Deserialize, Serialize};

/// Image with URL and dimensions.
///
/// Artists and albums carry several of these in decreasing sizes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Image {
    /// Height in pixels.
    pub height: u32,

    /// Width in pixels.
    pub width: u32,

    /// URL to the image.
    pub url: String,
}

impl Image {
    /// Create a new image.
    pub fn new<S: Into<String>>(url: S, height: u32, width: u32) -> Self {
        Self {
            height,
            width,
            url: url.into(),
        }
    }
}

/// Paged envelope wrapping a list of items.
///
/// The catalog API returns lists (album tracks, artist albums, each
/// search category) wrapped in this structure together with pagination
/// metadata. `next` and `previous` are null on the last/first page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// URL of the request that produced this page.
    #[serde(default)]
    pub href: Option<String>,

    /// URL of the next page, if any.
    #[serde(default)]
    pub next: Option<String>,

    /// URL of the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,

    /// Maximum number of items in this page.
    #[serde(default)]
    pub limit: u32,

    /// Offset of the first item of this page.
    #[serde(default)]
    pub offset: u32,

    /// Total number of items available across all pages.
    #[serde(default)]
    pub total: u32,

    /// Items in this page.
    #[serde(default)]
    pub items: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            href: None,
            next: None,
            previous: None,
            limit: 0,
            offset: 0,
            total: 0,
            items: Vec::new(),
        }
    }
}

impl<T> Page<T> {
    /// Number of items in this page (not the overall total).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page contains no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether more pages follow this one.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Resource type names recognized by the `type` and `album_type` filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchType {
    /// A full-length album.
    #[serde(rename = "album")]
    Album,
    /// A single release.
    #[serde(rename = "single")]
    Single,
    /// An album the artist appears on without owning it.
    #[serde(rename = "appears_on")]
    AppearsOn,
    /// A compilation release.
    #[serde(rename = "compilation")]
    Compilation,
    /// An artist.
    #[serde(rename = "artist")]
    Artist,
    /// A playlist.
    #[serde(rename = "playlist")]
    Playlist,
    /// A track.
    #[serde(rename = "track")]
    Track,
}

impl SearchType {
    /// The name the API expects in query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Album => "album",
            SearchType::Single => "single",
            SearchType::AppearsOn => "appears_on",
            SearchType::Compilation => "compilation",
            SearchType::Artist => "artist",
            SearchType::Playlist => "playlist",
            SearchType::Track => "track",
        }
    }

    /// Join a list of types into the comma-separated form the API expects.
    pub fn join(types: &[SearchType]) -> String {
        types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}
