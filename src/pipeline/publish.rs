// src/pipeline/publish.rs

//! Publish pipeline orchestration.
//!
//! One run: list note metadata, decide dirty against the published
//! manifest, then regenerate every page. Per-post failures are logged
//! and skipped; the manifest, index, and change sentinel are written
//! only after all post writes have settled.

use std::collections::HashMap;
use std::path::Path;

use futures::stream::{self, StreamExt};

use crate::config::Config;
use crate::error::Result;
use crate::models::{Manifest, Post};
use crate::pipeline::render::{DEFAULT_POST_TEMPLATE, render_with_template};
use crate::pipeline::{IndexTemplate, build_index, inline_resources, is_dirty};
use crate::services::{ManifestFetch, NoteSource};
use crate::storage::PublishStorage;

/// Outcome of one publish run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishSummary {
    /// Whether the collection differed from the published manifest
    pub dirty: bool,
    /// Notes in the live metadata list
    pub total: usize,
    /// Pages written this run
    pub published: usize,
    /// Notes skipped after a fetch/transform/write failure
    pub skipped: usize,
}

impl PublishSummary {
    fn clean(total: usize) -> Self {
        Self {
            dirty: false,
            total,
            published: 0,
            skipped: 0,
        }
    }
}

/// Run one incremental publish.
///
/// `remote` is the already-resolved fetch outcome for the previously
/// published manifest; everything else flows through the injected
/// collaborators.
pub async fn run_publish(
    config: &Config,
    source: &dyn NoteSource,
    storage: &dyn PublishStorage,
    remote: &ManifestFetch,
) -> Result<PublishSummary> {
    let posts = source.list_note_metadata().await?;
    let current: HashMap<String, Post> = posts
        .iter()
        .map(|p| (p.id.clone(), p.clone()))
        .collect();

    if !is_dirty(&current, remote) {
        log::info!("Remote posts match the published manifest, nothing to publish");
        return Ok(PublishSummary::clean(posts.len()));
    }

    log::info!("Collection changed, regenerating {} pages", posts.len());
    let post_template = load_post_template(config.template_dir.as_deref());

    // Fan out per post, bounded; each job is independent of the others.
    let mut results = stream::iter(posts.iter())
        .map(|post| {
            let template = post_template.as_str();
            async move {
                let outcome = publish_post(config, source, storage, post, template).await;
                (post, outcome)
            }
        })
        .buffered(config.max_concurrent);

    let mut summary = PublishSummary {
        dirty: true,
        total: posts.len(),
        published: 0,
        skipped: 0,
    };
    let mut written = Vec::new();

    while let Some((post, outcome)) = results.next().await {
        match outcome {
            Ok(()) => {
                log::info!("Published {} ({})", post.title, post.id);
                summary.published += 1;
                written.push(post.clone());
            }
            Err(e) => {
                log::warn!("Skipping {} ({}): {}", post.title, post.id, e);
                summary.skipped += 1;
            }
        }
    }

    // Finalization happens strictly after the per-post writes, so a
    // partially written run never reports success. The manifest holds
    // only the successfully published posts; a skipped note stays
    // dirty and is retried next run.
    match Manifest::from_posts(&written).to_json() {
        Ok(json) => write_or_log(storage, &config.output_dir, "meta", "json", &json).await,
        Err(e) => log::error!("Manifest serialization failed: {}", e),
    }

    let index = build_index(&posts, &IndexTemplate::load(config.template_dir.as_deref()));
    write_or_log(storage, &config.output_dir, "index", "html", &index).await;
    write_or_log(storage, &config.output_dir, "changed", "data", "true").await;

    Ok(summary)
}

/// Fetch, transform, inline, and write a single post's page.
async fn publish_post(
    config: &Config,
    source: &dyn NoteSource,
    storage: &dyn PublishStorage,
    post: &Post,
    template: &str,
) -> Result<()> {
    let body = source.fetch_note_body(&post.id).await?;
    let html = render_with_template(&post.title, &body, template)?;
    let html = inline_resources(source, &post.id, &html).await?;
    storage
        .write_artifact(&config.output_dir, &post.title, "html", &html)
        .await
}

/// Write one artifact, logging instead of failing so the remaining
/// artifacts are still attempted.
async fn write_or_log(
    storage: &dyn PublishStorage,
    dir: &Path,
    name: &str,
    extension: &str,
    content: &str,
) {
    if let Err(e) = storage.write_artifact(dir, name, extension, content).await {
        log::error!("Failed to write {}.{}: {}", name, extension, e);
    }
}

/// Load `{dir}/post.html` as the page template, falling back to the
/// built-in wrapper.
fn load_post_template(dir: Option<&Path>) -> String {
    let Some(dir) = dir else {
        return DEFAULT_POST_TEMPLATE.to_string();
    };
    match std::fs::read_to_string(dir.join("post.html")) {
        Ok(template) => template,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Post template unreadable, using built-in: {}", e);
            }
            DEFAULT_POST_TEMPLATE.to_string()
        }
    }
}
