use wizard_core::SeoMeta;

/// Prepends a `---` block with title, SEO fields and the export timestamp
/// when the content carries SEO metadata; otherwise returns the body
/// unchanged so it still opens with its own heading.
pub fn build_markdown_document(
    title: &str,
    seo: &SeoMeta,
    exported_utc: Option<&str>,
    body_markdown: &str,
) -> String {
    if seo.is_empty() {
        return body_markdown.to_string();
    }
    let mut frontmatter = format!("---\ntitle: {}\n", single_line(title));
    if !seo.meta_title.is_empty() {
        frontmatter.push_str(&format!("meta_title: {}\n", single_line(&seo.meta_title)));
    }
    if !seo.meta_description.is_empty() {
        frontmatter.push_str(&format!(
            "meta_description: {}\n",
            single_line(&seo.meta_description)
        ));
    }
    if let Some(ts) = exported_utc {
        frontmatter.push_str(&format!("exported_utc: {ts}\n"));
    }
    frontmatter.push_str("---\n\n");
    format!("{frontmatter}{body_markdown}")
}

fn single_line(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
