// src/services/mod.rs

//! Remote collaborators: the note source API and the manifest endpoint.

pub mod manifest;
pub mod notes;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Post;

pub use manifest::{ManifestFetch, fetch_remote_manifest};
pub use notes::HttpNoteSource;

/// Capability surface of the remote note collection.
///
/// All three calls are fallible remote operations; the pipeline treats
/// failures per post or per resource, never as batch aborts.
#[async_trait]
pub trait NoteSource: Send + Sync {
    /// List metadata (id, title, updated) for every note in the collection.
    async fn list_note_metadata(&self) -> Result<Vec<Post>>;

    /// Fetch the raw markup body of one note.
    async fn fetch_note_body(&self, id: &str) -> Result<String>;

    /// Fetch a binary resource of a note by content hash.
    async fn fetch_resource(&self, note_id: &str, hash: &[u8]) -> Result<Vec<u8>>;
}
