// src/pipeline/render.rs

//! Markup transformation: note body → standalone HTML page.
//!
//! A note body is an XML-ish document whose real content sits inside a
//! single `en-note` root element. Everything outside that element
//! (prolog, doctype, wrappers) is discarded.

use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::utils::html::escape_text;

/// Built-in page template; `{title}` is escaped, `{content}` is raw markup.
pub const DEFAULT_POST_TEMPLATE: &str =
    "<html><head><title>{title}</title></head><body>{content}</body></html>";

/// Tag of the element holding the note's actual content.
const ROOT_ELEMENT: &str = "en-note";

/// Render a note body into a standalone HTML document.
pub fn render(title: &str, body: &str) -> Result<String> {
    render_with_template(title, body, DEFAULT_POST_TEMPLATE)
}

/// Render a note body through a caller-supplied page template.
///
/// Fails with a parse error when the body has no `en-note` root; the
/// batch loop treats that as a per-post skip.
pub fn render_with_template(title: &str, body: &str, template: &str) -> Result<String> {
    let document = Html::parse_document(body);
    let selector =
        Selector::parse(ROOT_ELEMENT).map_err(|e| AppError::parse(format!("{e:?}")))?;

    let root = document
        .select(&selector)
        .next()
        .ok_or_else(|| AppError::parse(format!("no <{ROOT_ELEMENT}> root element in body")))?;

    Ok(template
        .replace("{title}", &escape_text(title))
        .replace("{content}", &root.inner_html()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE en-note SYSTEM "http://xml.evernote.com/pub/enml2.dtd">

<en-note><div>here is a image</div><div><en-media hash="f5dc113a0ce391202b55d8c4fa580a0e" type="image/png"></en-media></div><div><br></div></en-note>
"#;

    #[test]
    fn extracts_root_content_and_drops_wrapper() {
        let html = render("test pic", SAMPLE).unwrap();

        assert!(html.starts_with("<html><head><title>test pic</title></head><body>"));
        assert!(html.ends_with("</body></html>"));
        assert!(html.contains("<div>here is a image</div>"));
        // Prolog and root tag itself must not survive.
        assert!(!html.contains("<?xml"));
        assert!(!html.contains("DOCTYPE"));
        assert!(!html.contains("<en-note>"));
    }

    #[test]
    fn resource_markers_survive_the_transform() {
        let html = render("test pic", SAMPLE).unwrap();
        assert!(html.contains(r#"hash="f5dc113a0ce391202b55d8c4fa580a0e""#));
    }

    #[test]
    fn title_is_escaped() {
        let html = render("a < b & c", "<en-note>x</en-note>").unwrap();
        assert!(html.contains("<title>a &lt; b &amp; c</title>"));
    }

    #[test]
    fn body_without_root_is_a_parse_error() {
        let err = render("t", "<div>plain html, no note root</div>").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn custom_template_receives_same_fields() {
        let html = render_with_template(
            "T",
            "<en-note><p>hi</p></en-note>",
            "<article data-title=\"{title}\">{content}</article>",
        )
        .unwrap();
        assert_eq!(html, "<article data-title=\"T\"><p>hi</p></article>");
    }
}
