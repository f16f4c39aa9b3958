//! Regex-level HTML helpers shared by the normalizer and the exporters.
//!
//! These are pattern scans over markup, not a parser: malformed or nested
//! markup is handled only as far as the patterns reach.

use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"<[^>]*>"));

static H1_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?is)<h1(?:\s[^>]*)?>(.*?)</h1>"));

/// Label used when an HTML body has no first-level heading.
pub const DEFAULT_TITLE: &str = "Generated Content";

/// Compiles a built-in pattern. Only for string literals whose validity is
/// covered by tests; panics otherwise.
pub fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(err) => panic!("invalid built-in pattern {pattern:?}: {err}"),
    }
}

/// Removes every `<...>` tag, leaving text and entities untouched.
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}

/// Inner text of the first `<h1>`, markup stripped and trimmed.
pub fn first_heading(html: &str) -> Option<String> {
    H1_RE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|inner| strip_tags(inner.as_str()).trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Heading text, or [`DEFAULT_TITLE`] when there is none.
pub fn derive_title(html: &str) -> String {
    first_heading(html).unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

/// Words in the text content of an HTML fragment.
pub fn count_words(html: &str) -> u32 {
    strip_tags(html).split_whitespace().count() as u32
}

/// Escapes text for inclusion in HTML element content or attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_text_is_stripped_of_markup() {
        let html = "<p>intro</p><H1 class=\"t\">Grow <em>fast</em></H1><h1>second</h1>";
        assert_eq!(first_heading(html).as_deref(), Some("Grow fast"));
    }

    #[test]
    fn missing_heading_uses_default_title() {
        assert_eq!(derive_title("<p>no heading</p>"), DEFAULT_TITLE);
        assert_eq!(derive_title("<h1> <b></b> </h1>"), DEFAULT_TITLE);
    }

    #[test]
    fn words_are_counted_after_stripping() {
        assert_eq!(count_words("<h1>One two</h1>\n<p>three   four</p>"), 4);
        assert_eq!(count_words("<br/>"), 0);
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
