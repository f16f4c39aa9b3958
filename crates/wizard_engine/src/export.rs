//! Serializes [`GeneratedContent`] to Markdown, plain text and printable HTML.
//!
//! All functions here are pure; writing and printing belong to the caller.

use std::sync::LazyLock;

use regex::Regex;
use wizard_core::html::{compile, escape, strip_tags};
use wizard_core::{ExportFormat, GeneratedContent};

use crate::convert::{Converter, RuleTableConverter};
use crate::filename::export_filename;
use crate::frontmatter::build_markdown_document;

static EXCESS_NEWLINES_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"\n{3,}"));

const PRINT_STYLESHEET: &str = "\
body { font-family: Arial, sans-serif; max-width: 800px; margin: 40px auto; padding: 20px; }
h1 { color: #1a1a1a; }
h2, h3 { color: #333; margin-top: 1.5rem; }
p { line-height: 1.6; color: #444; white-space: pre-wrap; }";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Prefix Markdown exports with a frontmatter block when there is SEO
    /// metadata.
    pub include_frontmatter: bool,
    /// Recorded in the frontmatter block; never emits one on its own.
    pub exported_utc: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_frontmatter: true,
            exported_utc: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub mime_type: &'static str,
    pub filename: String,
    pub bytes: Vec<u8>,
}

pub fn to_markdown(content: &GeneratedContent) -> String {
    match content {
        GeneratedContent::TwitterThread { tweets, .. } => {
            let sections: Vec<String> = tweets
                .iter()
                .enumerate()
                .map(|(i, tweet)| format!("## Tweet {}\n{tweet}", i + 1))
                .collect();
            format!("# {}\n\n{}", content.title(), sections.join("\n\n"))
        }
        GeneratedContent::LinkedInPost { body, .. } => RuleTableConverter.to_markdown(body),
        GeneratedContent::Article { html_body, .. }
        | GeneratedContent::CaseStudy { html_body, .. } => {
            RuleTableConverter.to_markdown(html_body)
        }
    }
}

pub fn to_plain_text(content: &GeneratedContent) -> String {
    match content {
        GeneratedContent::TwitterThread { tweets, .. } => {
            let numbered: Vec<String> = tweets
                .iter()
                .enumerate()
                .map(|(i, tweet)| format!("[{}] {tweet}", i + 1))
                .collect();
            format!("{}\n\n{}", content.title(), numbered.join("\n\n"))
        }
        GeneratedContent::LinkedInPost { body, .. } => html_to_plain_text(body),
        GeneratedContent::Article { html_body, .. }
        | GeneratedContent::CaseStudy { html_body, .. } => html_to_plain_text(html_body),
    }
}

/// Strips every tag and collapses runs of three or more newlines to two.
pub fn html_to_plain_text(html: &str) -> String {
    EXCESS_NEWLINES_RE
        .replace_all(&strip_tags(html), "\n\n")
        .into_owned()
}

/// Standalone HTML document for an external print step.
pub fn to_printable_html(content: &GeneratedContent) -> String {
    let title = escape(&content.title());
    let body = match content {
        GeneratedContent::TwitterThread { tweets, .. } => tweets
            .iter()
            .enumerate()
            .map(|(i, tweet)| format!("<h3>Tweet {}</h3><p>{}</p>", i + 1, escape(tweet)))
            .collect::<Vec<_>>()
            .join("\n"),
        GeneratedContent::LinkedInPost { body, .. } => format!("<p>{}</p>", escape(body)),
        GeneratedContent::Article { html_body, .. }
        | GeneratedContent::CaseStudy { html_body, .. } => html_body.clone(),
    };
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{PRINT_STYLESHEET}\n</style>\n</head>\n<body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n"
    )
}

pub fn export_artifact(
    content: &GeneratedContent,
    format: ExportFormat,
    options: &ExportOptions,
) -> ExportArtifact {
    let text = match format {
        ExportFormat::Markdown => {
            let markdown = to_markdown(content);
            if options.include_frontmatter {
                build_markdown_document(
                    &content.title(),
                    content.seo(),
                    options.exported_utc.as_deref(),
                    &markdown,
                )
            } else {
                markdown
            }
        }
        ExportFormat::PlainText => to_plain_text(content),
        ExportFormat::PrintableHtml => to_printable_html(content),
    };
    ExportArtifact {
        mime_type: format.mime_type(),
        filename: export_filename(&content.title(), format.extension()),
        bytes: text.into_bytes(),
    }
}
