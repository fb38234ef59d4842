// src/services/manifest.rs

//! Remote manifest retrieval.
//!
//! The previous run's manifest is published alongside the site; its
//! retrieval outcome, not just its bytes, drives the dirty decision.

use reqwest::{Client, StatusCode};

/// Outcome of fetching the previously published manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestFetch {
    /// 200: body retrieved, may still fail to parse
    Found(Vec<u8>),

    /// 404: no manifest published yet (first run)
    NotFound,

    /// Network failure or unexpected status code
    Unreachable,

    /// 200 but the body could not be read
    Unreadable,
}

/// Fetch the previous run's manifest from its well-known URL.
///
/// Never returns an error: every failure mode maps to a
/// [`ManifestFetch`] variant the comparator knows how to weigh.
pub async fn fetch_remote_manifest(client: &Client, url: &str) -> ManifestFetch {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("Manifest fetch failed for {}: {}", url, e);
            return ManifestFetch::Unreachable;
        }
    };

    match response.status() {
        StatusCode::NOT_FOUND => ManifestFetch::NotFound,
        StatusCode::OK => match response.bytes().await {
            Ok(bytes) => ManifestFetch::Found(bytes.to_vec()),
            Err(e) => {
                log::warn!("Manifest body unreadable: {}", e);
                ManifestFetch::Unreadable
            }
        },
        status => {
            log::warn!("Manifest fetch returned unexpected status {}", status);
            ManifestFetch::Unreachable
        }
    }
}
