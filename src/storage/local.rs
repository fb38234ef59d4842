// src/storage/local.rs

//! Local filesystem storage implementation.

use std::path::Path;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::storage::PublishStorage;

/// Local filesystem storage backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }
}

#[async_trait]
impl PublishStorage for LocalStorage {
    async fn write_artifact(
        &self,
        dir: &Path,
        name: &str,
        extension: &str,
        content: &str,
    ) -> Result<()> {
        let path = dir.join(format!("{name}.{extension}"));
        self.write_bytes(&path, content.as_bytes()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn writes_named_artifact() {
        let tmp = TempDir::new().unwrap();
        LocalStorage
            .write_artifact(tmp.path(), "index", "html", "<ul></ul>")
            .await
            .unwrap();

        let content = std::fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert_eq!(content, "<ul></ul>");
    }

    #[tokio::test]
    async fn creates_missing_directories() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a/b");

        LocalStorage
            .write_artifact(&nested, "meta", "json", "{}")
            .await
            .unwrap();

        assert!(nested.join("meta.json").exists());
    }

    #[tokio::test]
    async fn overwrites_existing_artifact() {
        let tmp = TempDir::new().unwrap();
        LocalStorage
            .write_artifact(tmp.path(), "changed", "data", "false")
            .await
            .unwrap();
        LocalStorage
            .write_artifact(tmp.path(), "changed", "data", "true")
            .await
            .unwrap();

        let content = std::fs::read_to_string(tmp.path().join("changed.data")).unwrap();
        assert_eq!(content, "true");
    }

    #[tokio::test]
    async fn leaves_no_temp_file_behind() {
        let tmp = TempDir::new().unwrap();
        LocalStorage
            .write_artifact(tmp.path(), "meta", "json", "{}")
            .await
            .unwrap();

        assert!(!tmp.path().join("meta.tmp").exists());
    }
}
