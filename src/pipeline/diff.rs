// src/pipeline/diff.rs

//! Change detection against the previously published manifest.
//!
//! Compares the live note set with the last-published snapshot by
//! `(count, per-id updated)`. Content is never hashed, so an edit that
//! does not bump `updated` is invisible here.

use std::collections::HashMap;

use crate::models::{Manifest, Post};
use crate::services::ManifestFetch;

/// Decide whether the site must be regenerated.
///
/// The fetch outcome weighs in asymmetrically:
/// - `Unreachable` → clean, so a transient fetch error never forces a
///   full republish;
/// - `NotFound` → dirty (first publish);
/// - `Unreadable` or unparseable bytes → dirty (corrupt state is
///   republished).
///
/// With a parsed manifest, dirty iff the counts differ or any live
/// note's `updated` differs from the snapshot. Ids missing from the
/// snapshot read as zero and therefore differ.
pub fn is_dirty(current: &HashMap<String, Post>, remote: &ManifestFetch) -> bool {
    let remote = match remote {
        ManifestFetch::Unreachable => return false,
        ManifestFetch::NotFound => return true,
        ManifestFetch::Unreadable => return true,
        ManifestFetch::Found(bytes) => match Manifest::parse(bytes) {
            Ok(manifest) => manifest,
            Err(e) => {
                log::warn!("Published manifest is corrupt ({}), forcing republish", e);
                return true;
            }
        },
    };

    if current.len() != remote.len() {
        return true;
    }

    current
        .values()
        .any(|post| post.updated != remote.updated_of(&post.id))
}
