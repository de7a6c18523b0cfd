//! Artist-related models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::common::Image;

/// A full artist record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    /// Catalog ID of the artist.
    #[serde(default)]
    pub id: String,

    /// Artist name.
    #[serde(default)]
    pub name: String,

    /// API URL of this artist.
    #[serde(default)]
    pub href: String,

    /// Object type marker, always `"artist"`.
    #[serde(rename = "type", default)]
    pub type_: String,

    /// Catalog URI of the artist.
    #[serde(default)]
    pub uri: String,

    /// Popularity score, 0-100 per the API contract.
    #[serde(default)]
    pub popularity: u32,

    /// Known external URLs, keyed by provider name.
    #[serde(default)]
    pub external_urls: HashMap<String, String>,

    /// Genres associated with the artist.
    #[serde(default)]
    pub genres: Vec<String>,

    /// Artist images in various sizes.
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Artist {
    /// Create a new artist with name and catalog ID.
    pub fn new<S1: Into<String>, S2: Into<String>>(name: S1, id: S2) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            type_: "artist".to_string(),
            ..Default::default()
        }
    }

    /// Get the largest image available.
    pub fn largest_image(&self) -> Option<&Image> {
        self.images.iter().max_by_key(|img| img.width * img.height)
    }
}
