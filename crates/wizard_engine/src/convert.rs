//! One-way HTML to Markdown conversion by ordered pattern substitution.
//!
//! Known limitation: the output is lossy and cannot be converted back.
//! Only the tags named in [`MARKDOWN_RULES`] are translated; links, images,
//! tables, styling and nesting beyond those tags are dropped by the final
//! strip-all rule. Entities are passed through untouched.

use std::sync::LazyLock;

use regex::Regex;
use wizard_core::html::compile;

pub struct SubstitutionRule {
    pub name: &'static str,
    pub pattern: &'static str,
    pub replacement: &'static str,
}

/// Applied top to bottom; the last rule removes whatever markup is left.
pub const MARKDOWN_RULES: [SubstitutionRule; 11] = [
    SubstitutionRule {
        name: "h1",
        pattern: r"(?is)<h1(?:\s[^>]*)?>(.*?)</h1>",
        replacement: "# ${1}\n\n",
    },
    SubstitutionRule {
        name: "h2",
        pattern: r"(?is)<h2(?:\s[^>]*)?>(.*?)</h2>",
        replacement: "## ${1}\n\n",
    },
    SubstitutionRule {
        name: "h3",
        pattern: r"(?is)<h3(?:\s[^>]*)?>(.*?)</h3>",
        replacement: "### ${1}\n\n",
    },
    SubstitutionRule {
        name: "paragraph",
        pattern: r"(?is)<p(?:\s[^>]*)?>(.*?)</p>",
        replacement: "${1}\n\n",
    },
    SubstitutionRule {
        name: "bold",
        pattern: r"(?is)<(?:strong|b)(?:\s[^>]*)?>(.*?)</(?:strong|b)>",
        replacement: "**${1}**",
    },
    SubstitutionRule {
        name: "italic",
        pattern: r"(?is)<(?:em|i)(?:\s[^>]*)?>(.*?)</(?:em|i)>",
        replacement: "*${1}*",
    },
    SubstitutionRule {
        name: "list item",
        pattern: r"(?is)<li(?:\s[^>]*)?>(.*?)</li>",
        replacement: "- ${1}\n",
    },
    SubstitutionRule {
        name: "unordered list",
        pattern: r"(?i)</?ul(?:\s[^>]*)?>",
        replacement: "\n",
    },
    SubstitutionRule {
        name: "ordered list",
        pattern: r"(?i)</?ol(?:\s[^>]*)?>",
        replacement: "\n",
    },
    SubstitutionRule {
        name: "line break",
        pattern: r"(?i)<br\s*/?>",
        replacement: "\n",
    },
    SubstitutionRule {
        name: "remaining tags",
        pattern: r"<[^>]*>",
        replacement: "",
    },
];

static COMPILED_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    MARKDOWN_RULES
        .iter()
        .map(|rule| (compile(rule.pattern), rule.replacement))
        .collect()
});

pub trait Converter: Send + Sync {
    fn to_markdown(&self, html: &str) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RuleTableConverter;

impl Converter for RuleTableConverter {
    fn to_markdown(&self, html: &str) -> String {
        COMPILED_RULES
            .iter()
            .fold(html.to_string(), |text, (re, replacement)| {
                re.replace_all(&text, *replacement).into_owned()
            })
    }
}
