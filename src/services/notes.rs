// src/services/notes.rs

//! HTTP-backed note source client.
//!
//! Thin wrapper over the note source's REST surface; all pipeline
//! logic lives elsewhere and talks to the [`NoteSource`] trait.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::Post;
use crate::services::NoteSource;

/// Note source client speaking the collection's HTTP API.
pub struct HttpNoteSource {
    client: Client,
    endpoint: String,
    token: String,
    collection_id: String,
}

impl HttpNoteSource {
    /// Create a client for the collection named in the configuration.
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            endpoint: config.source_endpoint.trim_end_matches('/').to_string(),
            token: config.source_token.clone(),
            collection_id: config.collection_id.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path)
    }

    async fn get(&self, path: &str, context: &str) -> Result<reqwest::Response> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(&self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::source(
                context,
                format!("unexpected status {}", response.status()),
            ));
        }
        Ok(response)
    }
}

#[async_trait]
impl NoteSource for HttpNoteSource {
    async fn list_note_metadata(&self) -> Result<Vec<Post>> {
        let path = format!("collections/{}/notes", self.collection_id);
        let response = self.get(&path, "list_note_metadata").await?;
        Ok(response.json().await?)
    }

    async fn fetch_note_body(&self, id: &str) -> Result<String> {
        let path = format!("notes/{id}/content");
        let response = self.get(&path, "fetch_note_body").await?;
        Ok(response.text().await?)
    }

    async fn fetch_resource(&self, note_id: &str, hash: &[u8]) -> Result<Vec<u8>> {
        let path = format!("notes/{}/resources/{}", note_id, hex::encode(hash));
        let response = self.get(&path, "fetch_resource").await?;
        Ok(response.bytes().await?.to_vec())
    }
}
