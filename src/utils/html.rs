// src/utils/html.rs

//! HTML text escaping.

/// Escape a string for use as HTML text content or attribute value.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_text(r#"<a href="x">&'t"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;t"
        );
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape_text("hello world"), "hello world");
    }
}
