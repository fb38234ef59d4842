// src/pipeline/inline.rs

//! Resource inlining: embedded image markers → self-contained data URIs.
//!
//! Note bodies reference binary resources with `en-media` markers
//! carrying a content hash and a MIME type. Image markers are replaced
//! with `<img>` tags whose source is a base64 data URI; everything
//! else is left untouched. A marker whose resource cannot be fetched
//! is preserved byte-for-byte, so a missing image degrades the page
//! instead of sinking the whole post.

use std::sync::OnceLock;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use regex::Regex;

use crate::error::Result;
use crate::services::NoteSource;

/// Matches an image `en-media` marker in either the paired or the
/// self-closing form. Non-image MIME types never match.
fn marker_regex() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| {
        Regex::new(r#"<en-media hash="([0-9a-fA-F]+)" type="(image/\w+)"\s*(?:/>|></en-media>)"#)
            .expect("marker pattern is valid")
    })
}

/// Replace every resolvable image marker in `content` with an inline
/// data-URI image.
///
/// Each marker is handled independently; failures are logged and the
/// marker kept, and the assembled result is always returned.
pub async fn inline_resources(
    source: &dyn NoteSource,
    note_id: &str,
    content: &str,
) -> Result<String> {
    let mut result = String::with_capacity(content.len());
    let mut cursor = 0;

    for caps in marker_regex().captures_iter(content) {
        let marker = caps.get(0).expect("whole match always present");
        result.push_str(&content[cursor..marker.start()]);

        let replacement =
            resolve_marker(source, note_id, marker.as_str(), &caps[1], &caps[2]).await;
        result.push_str(&replacement);
        cursor = marker.end();
    }

    result.push_str(&content[cursor..]);
    Ok(result)
}

/// Fetch one marker's resource and produce its replacement, falling
/// back to the original marker text on any failure.
async fn resolve_marker(
    source: &dyn NoteSource,
    note_id: &str,
    marker: &str,
    hash_hex: &str,
    mime: &str,
) -> String {
    let hash = match hex::decode(hash_hex) {
        Ok(hash) => hash,
        Err(e) => {
            log::warn!("Undecodable resource hash {} in {}: {}", hash_hex, note_id, e);
            return marker.to_string();
        }
    };

    match source.fetch_resource(note_id, &hash).await {
        Ok(bytes) if !bytes.is_empty() => {
            log::debug!("Inlined resource {} ({} bytes)", hash_hex, bytes.len());
            format!(r#"<img src="data:{};base64,{}"/>"#, mime, BASE64.encode(&bytes))
        }
        Ok(_) => {
            log::warn!("Resource {} of {} returned empty payload", hash_hex, note_id);
            marker.to_string()
        }
        Err(e) => {
            log::warn!("Resource {} of {} not fetched: {}", hash_hex, note_id, e);
            marker.to_string()
        }
    }
}
