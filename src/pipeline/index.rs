// src/pipeline/index.rs

//! Index page generation.
//!
//! Lists every published post as a `{link, title}` pair, most recent
//! first, with a generation-time footer. A custom page template only
//! changes the surrounding markup; the pairs and their order are the
//! same on both paths.

use std::path::Path;

use chrono::Utc;

use crate::models::{IndexEntry, Post};
use crate::utils::html::escape_text;

/// Built-in per-entry markup; `{link}` and `{title}` placeholders.
const DEFAULT_ENTRY: &str = "<li><a href=\"{link}\">{title}</a></li>";

/// Built-in page markup; `{entries}` placeholder.
const DEFAULT_PAGE: &str = "{entries}";

/// Markup templates for the index page.
#[derive(Debug, Clone)]
pub struct IndexTemplate {
    page: String,
    entry: String,
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE.to_string(),
            entry: DEFAULT_ENTRY.to_string(),
        }
    }
}

impl IndexTemplate {
    /// Load the page template from `{dir}/index.html` if present,
    /// falling back to the built-in markup.
    pub fn load(dir: Option<&Path>) -> Self {
        let mut template = Self::default();
        let Some(dir) = dir else { return template };

        match std::fs::read_to_string(dir.join("index.html")) {
            Ok(page) => template.page = page,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Index template unreadable, using built-in: {}", e),
        }
        template
    }

    fn render_entry(&self, entry: &IndexEntry) -> String {
        self.entry
            .replace("{link}", &entry.link)
            .replace("{title}", &escape_text(&entry.title))
    }
}

/// Build the index page for the given posts.
///
/// Stable sort by `updated` descending; equal timestamps keep their
/// input order. An empty post list yields only the footer.
pub fn build_index(posts: &[Post], template: &IndexTemplate) -> String {
    let mut ordered: Vec<&Post> = posts.iter().collect();
    ordered.sort_by(|a, b| b.updated.cmp(&a.updated));

    let entries: String = ordered
        .iter()
        .map(|post| template.render_entry(&IndexEntry::from(*post)))
        .collect();

    let page = template.page.replace("{entries}", &entries);
    format!("{}last updated @{}", page, Utc::now().to_rfc2822())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts(items: &[(&str, i64)]) -> Vec<Post> {
        items
            .iter()
            .enumerate()
            .map(|(i, (title, updated))| Post::new(format!("id{i}"), *title, *updated))
            .collect()
    }

    fn link_positions(index: &str, titles: &[&str]) -> Vec<usize> {
        titles
            .iter()
            .map(|t| index.find(&format!("href=\"{t}.html\"")).unwrap())
            .collect()
    }

    #[test]
    fn orders_by_recency_descending() {
        let posts = posts(&[("Three", 3), ("One", 1), ("Two", 2)]);
        let index = build_index(&posts, &IndexTemplate::default());

        let positions = link_positions(&index, &["Three", "Two", "One"]);
        assert!(positions[0] < positions[1] && positions[1] < positions[2]);
    }

    #[test]
    fn ties_keep_input_order_and_appear_once() {
        let posts = posts(&[("Alpha", 2), ("Beta", 2)]);
        let index = build_index(&posts, &IndexTemplate::default());

        assert_eq!(index.matches("Alpha").count(), 2); // link + label
        assert_eq!(index.matches("Beta").count(), 2);
        let positions = link_positions(&index, &["Alpha", "Beta"]);
        assert!(positions[0] < positions[1]);
    }

    #[test]
    fn empty_list_yields_footer_only() {
        let index = build_index(&[], &IndexTemplate::default());
        assert!(index.starts_with("last updated @"));
        assert!(!index.contains("<li>"));
    }

    #[test]
    fn entries_link_title_pages() {
        let posts = posts(&[("Hello World", 5)]);
        let index = build_index(&posts, &IndexTemplate::default());
        assert!(index.contains("<li><a href=\"Hello World.html\">Hello World</a></li>"));
    }

    #[test]
    fn entry_labels_are_escaped() {
        let posts = posts(&[("a < b", 1)]);
        let index = build_index(&posts, &IndexTemplate::default());
        assert!(index.contains(">a &lt; b</a>"));
    }

    #[test]
    fn custom_page_template_exposes_same_pairs_in_same_order() {
        let posts = posts(&[("Late", 9), ("Early", 1)]);
        let plain = build_index(&posts, &IndexTemplate::default());

        let mut custom = IndexTemplate::default();
        custom.page = "<html><body><ul>{entries}</ul></body></html>".to_string();
        let wrapped = build_index(&posts, &custom);

        for index in [&plain, &wrapped] {
            let positions = link_positions(index, &["Late", "Early"]);
            assert!(positions[0] < positions[1]);
        }
        assert!(wrapped.contains("<ul><li>"));
    }
}
