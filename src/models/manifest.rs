// src/models/manifest.rs

//! Manifest snapshot of previously published post metadata.

use std::collections::HashMap;

use crate::error::Result;
use crate::models::Post;

/// Mapping from post id to its last-published metadata.
///
/// Read once from the previous run's `meta.json` and written once as
/// this run's snapshot; never mutated in process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest(HashMap<String, Post>);

impl Manifest {
    /// Build a manifest from the current run's metadata list.
    pub fn from_posts(posts: &[Post]) -> Self {
        Self(
            posts
                .iter()
                .map(|p| (p.id.clone(), p.clone()))
                .collect(),
        )
    }

    /// Parse a manifest from its published JSON bytes.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        Ok(Self(serde_json::from_slice(bytes)?))
    }

    /// Serialize to the published JSON form, keyed by id.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }

    /// Number of posts in the snapshot.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Update timestamp recorded for an id; absent ids read as zero,
    /// which the comparator treats as "differs".
    pub fn updated_of(&self, id: &str) -> i64 {
        self.0.get(id).map_or(0, |p| p.updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_published_json() {
        let posts = vec![Post::new("a", "First", 10), Post::new("b", "Second", 20)];
        let manifest = Manifest::from_posts(&posts);

        let json = manifest.to_json().unwrap();
        let parsed = Manifest::parse(json.as_bytes()).unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.updated_of("a"), 10);
        assert_eq!(parsed.updated_of("b"), 20);
    }

    #[test]
    fn absent_id_reads_as_zero() {
        let manifest = Manifest::from_posts(&[Post::new("a", "First", 10)]);
        assert_eq!(manifest.updated_of("missing"), 0);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(Manifest::parse(b"not json").is_err());
        assert!(Manifest::parse(b"[1,2,3]").is_err());
    }
}
