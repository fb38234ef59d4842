// src/models/post.rs

//! Post data structure.

use serde::{Deserialize, Serialize};

/// One note from the remote collection, as published.
///
/// The serialized form (`guid`/`title`/`update`) is the manifest wire
/// format; `body` exists only in process during transformation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    /// Opaque stable identifier assigned by the note source
    #[serde(rename = "guid")]
    pub id: String,

    /// Note title, used as display name and output filename stem
    pub title: String,

    /// Source-assigned update timestamp, monotonic per note
    #[serde(rename = "update", default)]
    pub updated: i64,

    /// Raw markup body, attached just before transformation
    #[serde(skip)]
    pub body: String,
}

impl Post {
    /// Create a post from metadata, with no body attached yet.
    pub fn new(id: impl Into<String>, title: impl Into<String>, updated: i64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            updated,
            body: String::new(),
        }
    }

    /// Output filename for this post's page.
    pub fn page_name(&self) -> String {
        format!("{}.html", self.title)
    }
}

/// Read-only projection of a post used for the index listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Display label
    pub title: String,

    /// Relative link target
    pub link: String,
}

impl From<&Post> for IndexEntry {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            link: post.page_name(),
        }
    }
}
