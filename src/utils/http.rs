// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use crate::error::Result;

const USER_AGENT: &str = concat!("notepress/", env!("CARGO_PKG_VERSION"));
const TIMEOUT_SECS: u64 = 30;

/// Create the configured asynchronous HTTP client shared by the note
/// source and the manifest fetch.
pub fn create_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .build()?;
    Ok(client)
}
