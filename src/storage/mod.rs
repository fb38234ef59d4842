// src/storage/mod.rs

//! Storage abstraction for publish artifacts.
//!
//! One run produces a flat set of artifacts in the output directory:
//!
//! ```text
//! public/
//! ├── meta.json       # Manifest of published post metadata
//! ├── index.html      # Listing page, most recent first
//! ├── changed.data    # Sentinel written on every dirty run
//! └── {title}.html    # One page per published note
//! ```

pub mod local;

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

pub use local::LocalStorage;

/// Trait for publish artifact persistence.
#[async_trait]
pub trait PublishStorage: Send + Sync {
    /// Write `{dir}/{name}.{extension}`, creating the directory if
    /// absent and overwriting any existing file.
    async fn write_artifact(
        &self,
        dir: &Path,
        name: &str,
        extension: &str,
        content: &str,
    ) -> Result<()>;
}
