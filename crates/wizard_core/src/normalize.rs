//! Converts loosely-shaped generation responses into the canonical model.
//!
//! Both entry points walk a fixed, ordered rule table. Every table ends in a
//! catch-all, so normalization is total: unknown shapes degrade to a
//! placeholder keyword list or a stringified article instead of an error.

use engine_logging::{engine_debug, engine_warn};
use serde_json::{Map, Value};

use crate::content::{LINKEDIN_TITLE, TWITTER_TITLE};
use crate::{html, ContentType, GeneratedContent, SeoMeta};

/// Substituted when a keyword response yields nothing usable.
pub const PLACEHOLDER_KEYWORDS: [&str; 2] = ["fallback keyword 1", "fallback keyword 2"];

struct KeywordRule {
    name: &'static str,
    matches: fn(&Value) -> bool,
    extract: fn(&Value) -> Vec<Value>,
}

const KEYWORD_RULES: [KeywordRule; 5] = [
    KeywordRule {
        name: "objects with keyword field",
        matches: is_keyword_objects,
        extract: splice_keyword_fields,
    },
    KeywordRule {
        name: "plain strings",
        matches: is_string_sequence,
        extract: sequence_items,
    },
    KeywordRule {
        name: "nested sequence",
        matches: is_nested_sequence,
        extract: flatten_once,
    },
    KeywordRule {
        name: "wrapped keywords field",
        matches: has_keywords_field,
        extract: unwrap_keywords_field,
    },
    KeywordRule {
        name: "unrecognized",
        matches: any_shape,
        extract: no_items,
    },
];

/// Resolves any keyword response into a flat, trimmed, de-duplicated list.
///
/// Never empty: yields [`PLACEHOLDER_KEYWORDS`] when nothing usable remains.
pub fn normalize_keywords(raw: &Value) -> Vec<String> {
    let mut items = Vec::new();
    for rule in &KEYWORD_RULES {
        if (rule.matches)(raw) {
            engine_debug!("keyword response matched rule: {}", rule.name);
            items = (rule.extract)(raw);
            break;
        }
    }

    if items.iter().any(Value::is_array) {
        items = flatten_items(items);
    }

    let mut keywords: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        let Value::String(text) = item else {
            continue;
        };
        let trimmed = text.trim();
        if trimmed.is_empty() || keywords.iter().any(|k| k == trimmed) {
            continue;
        }
        keywords.push(trimmed.to_string());
    }

    if keywords.is_empty() {
        engine_warn!("no usable keywords in response, substituting placeholder list");
        return PLACEHOLDER_KEYWORDS.iter().map(|k| k.to_string()).collect();
    }
    keywords
}

fn first_item(raw: &Value) -> Option<&Value> {
    raw.as_array().and_then(|items| items.first())
}

fn is_keyword_objects(raw: &Value) -> bool {
    first_item(raw)
        .and_then(Value::as_object)
        .is_some_and(|obj| obj.contains_key("keyword"))
}

fn is_string_sequence(raw: &Value) -> bool {
    first_item(raw).is_some_and(Value::is_string)
}

fn is_nested_sequence(raw: &Value) -> bool {
    first_item(raw).is_some_and(Value::is_array)
}

fn has_keywords_field(raw: &Value) -> bool {
    raw.get("keywords").is_some_and(Value::is_array)
}

fn any_shape(_raw: &Value) -> bool {
    true
}

fn no_items(_raw: &Value) -> Vec<Value> {
    Vec::new()
}

fn splice_keyword_fields(raw: &Value) -> Vec<Value> {
    let Some(items) = raw.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .flat_map(|item| match item.get("keyword") {
            Some(Value::Array(inner)) => inner.clone(),
            Some(text @ Value::String(_)) => vec![text.clone()],
            _ => Vec::new(),
        })
        .collect()
}

fn sequence_items(raw: &Value) -> Vec<Value> {
    raw.as_array().cloned().unwrap_or_default()
}

fn flatten_once(raw: &Value) -> Vec<Value> {
    flatten_items(sequence_items(raw))
}

fn unwrap_keywords_field(raw: &Value) -> Vec<Value> {
    let Some(items) = raw.get("keywords").and_then(Value::as_array) else {
        return Vec::new();
    };
    if items.first().is_some_and(Value::is_object) {
        items
            .iter()
            .filter_map(|item| item.get("keyword"))
            .filter(|keyword| is_truthy(keyword))
            .cloned()
            .collect()
    } else {
        items.clone()
    }
}

fn flatten_items(items: Vec<Value>) -> Vec<Value> {
    items
        .into_iter()
        .flat_map(|item| match item {
            Value::Array(inner) => inner,
            other => vec![other],
        })
        .collect()
}

struct ContentRule {
    marker: &'static str,
    build: fn(&Map<String, Value>, SeoMeta) -> GeneratedContent,
}

/// Checked in order; the first marker present wins.
const CONTENT_RULES: [ContentRule; 4] = [
    ContentRule {
        marker: "linkedinPost",
        build: build_linkedin_post,
    },
    ContentRule {
        marker: "twitterThread",
        build: build_twitter_thread,
    },
    ContentRule {
        marker: "htmlCaseStudy",
        build: build_case_study,
    },
    ContentRule {
        marker: "htmlArticle",
        build: build_html_article,
    },
];

/// Resolves any content response into a [`GeneratedContent`]. Never fails.
pub fn normalize_content(raw: &Value, content_type: ContentType) -> GeneratedContent {
    let inspected = match raw {
        Value::Array(items) => items.first(),
        other => Some(other),
    };
    let object = inspected.and_then(Value::as_object);

    let content = object
        .and_then(|obj| {
            CONTENT_RULES
                .iter()
                .find(|rule| obj.get(rule.marker).is_some_and(is_truthy))
                .map(|rule| {
                    engine_debug!("content response matched marker: {}", rule.marker);
                    (rule.build)(obj, read_seo(obj))
                })
        })
        .or_else(|| object.and_then(legacy_article))
        .unwrap_or_else(|| {
            engine_warn!("unrecognized content response, falling back to stringified article");
            stringified_article(raw)
        });

    apply_fixed_title(content, content_type)
}

fn build_linkedin_post(obj: &Map<String, Value>, seo: SeoMeta) -> GeneratedContent {
    let body = obj.get("linkedinPost").map(value_text).unwrap_or_default();
    let char_count = count_field(obj, "characterCount")
        .unwrap_or_else(|| body.chars().count() as u32);
    GeneratedContent::LinkedInPost {
        body,
        char_count,
        seo,
    }
}

fn build_twitter_thread(obj: &Map<String, Value>, seo: SeoMeta) -> GeneratedContent {
    let tweets = obj.get("twitterThread").map(tweet_list).unwrap_or_default();
    let tweet_count = count_field(obj, "totalTweets").unwrap_or(tweets.len() as u32);
    GeneratedContent::TwitterThread {
        tweets,
        tweet_count,
        seo,
    }
}

fn build_case_study(obj: &Map<String, Value>, seo: SeoMeta) -> GeneratedContent {
    let html_body = obj.get("htmlCaseStudy").map(value_text).unwrap_or_default();
    let word_count =
        count_field(obj, "wordCount").unwrap_or_else(|| html::count_words(&html_body));
    GeneratedContent::CaseStudy {
        html_body,
        word_count,
        seo,
    }
}

fn build_html_article(obj: &Map<String, Value>, seo: SeoMeta) -> GeneratedContent {
    let html_body = obj.get("htmlArticle").map(value_text).unwrap_or_default();
    let word_count =
        count_field(obj, "wordCount").unwrap_or_else(|| html::count_words(&html_body));
    GeneratedContent::Article {
        title: html::derive_title(&html_body),
        html_body,
        word_count,
        seo,
    }
}

/// `{ article: { title?, content, wordCount? }, seo? }` from older workflows.
fn legacy_article(obj: &Map<String, Value>) -> Option<GeneratedContent> {
    let article = obj.get("article")?.as_object()?;
    let content = article.get("content").filter(|c| is_truthy(c))?;
    let seo = read_seo(obj);
    engine_debug!("content response matched legacy article shape");

    if content.is_array() {
        let tweets = tweet_list(content);
        let tweet_count = count_field(article, "wordCount").unwrap_or(tweets.len() as u32);
        return Some(GeneratedContent::TwitterThread {
            tweets,
            tweet_count,
            seo,
        });
    }

    let html_body = value_text(content);
    let title = article
        .get("title")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| html::derive_title(&html_body));
    let word_count =
        count_field(article, "wordCount").unwrap_or_else(|| html::count_words(&html_body));
    Some(GeneratedContent::Article {
        title,
        html_body,
        word_count,
        seo,
    })
}

fn stringified_article(raw: &Value) -> GeneratedContent {
    GeneratedContent::Article {
        title: html::DEFAULT_TITLE.to_string(),
        html_body: value_text(raw),
        word_count: 0,
        seo: SeoMeta::default(),
    }
}

fn apply_fixed_title(content: GeneratedContent, content_type: ContentType) -> GeneratedContent {
    let fixed = match content_type {
        ContentType::Linkedin => LINKEDIN_TITLE,
        ContentType::Twitter => TWITTER_TITLE,
        ContentType::Article | ContentType::CaseStudy => return content,
    };
    match content {
        GeneratedContent::Article {
            html_body,
            word_count,
            seo,
            ..
        } => GeneratedContent::Article {
            title: fixed.to_string(),
            html_body,
            word_count,
            seo,
        },
        other => other,
    }
}

fn read_seo(obj: &Map<String, Value>) -> SeoMeta {
    let Some(seo) = obj.get("seo").and_then(Value::as_object) else {
        return SeoMeta::default();
    };
    let field = |name: &str| {
        seo.get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    SeoMeta {
        meta_title: field("metaTitle"),
        meta_description: field("metaDescription"),
    }
}

/// A positive numeric count; absent, zero or non-numeric values yield `None`.
fn count_field(obj: &Map<String, Value>, name: &str) -> Option<u32> {
    let value = obj.get(name)?;
    let count = value
        .as_u64()
        .or_else(|| value.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
        .or_else(|| value.as_str().and_then(|s| s.trim().parse::<u64>().ok()))?;
    u32::try_from(count).ok().filter(|c| *c > 0)
}

fn tweet_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter(|item| !item.is_null())
            .map(value_text)
            .collect(),
        other => vec![value_text(other)],
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
