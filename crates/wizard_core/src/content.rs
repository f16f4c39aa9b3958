use crate::html;

pub const LINKEDIN_TITLE: &str = "LinkedIn Post";
pub const TWITTER_TITLE: &str = "Twitter Thread";

/// LinkedIn rejects posts beyond this many characters.
pub const LINKEDIN_CHAR_LIMIT: usize = 3000;
pub const TWEET_CHAR_LIMIT: usize = 280;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeoMeta {
    pub meta_title: String,
    pub meta_description: String,
}

impl SeoMeta {
    pub fn is_empty(&self) -> bool {
        self.meta_title.is_empty() && self.meta_description.is_empty()
    }
}

/// Canonical, shape-independent form of one generation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratedContent {
    Article {
        title: String,
        html_body: String,
        word_count: u32,
        seo: SeoMeta,
    },
    LinkedInPost {
        body: String,
        char_count: u32,
        seo: SeoMeta,
    },
    TwitterThread {
        tweets: Vec<String>,
        tweet_count: u32,
        seo: SeoMeta,
    },
    CaseStudy {
        html_body: String,
        word_count: u32,
        seo: SeoMeta,
    },
}

impl GeneratedContent {
    pub fn title(&self) -> String {
        match self {
            GeneratedContent::Article { title, html_body, .. } => {
                if title.trim().is_empty() {
                    html::derive_title(html_body)
                } else {
                    title.clone()
                }
            }
            GeneratedContent::LinkedInPost { .. } => LINKEDIN_TITLE.to_string(),
            GeneratedContent::TwitterThread { .. } => TWITTER_TITLE.to_string(),
            GeneratedContent::CaseStudy { html_body, .. } => html::derive_title(html_body),
        }
    }

    pub fn seo(&self) -> &SeoMeta {
        match self {
            GeneratedContent::Article { seo, .. }
            | GeneratedContent::LinkedInPost { seo, .. }
            | GeneratedContent::TwitterThread { seo, .. }
            | GeneratedContent::CaseStudy { seo, .. } => seo,
        }
    }

    /// Word, character or tweet count depending on the variant.
    pub fn metric(&self) -> u32 {
        match self {
            GeneratedContent::Article { word_count, .. }
            | GeneratedContent::CaseStudy { word_count, .. } => *word_count,
            GeneratedContent::LinkedInPost { char_count, .. } => *char_count,
            GeneratedContent::TwitterThread { tweet_count, .. } => *tweet_count,
        }
    }

    pub fn metric_label(&self) -> &'static str {
        match self {
            GeneratedContent::Article { .. } | GeneratedContent::CaseStudy { .. } => "words",
            GeneratedContent::LinkedInPost { .. } => "characters",
            GeneratedContent::TwitterThread { .. } => "tweets",
        }
    }

    pub fn html_body(&self) -> Option<&str> {
        match self {
            GeneratedContent::Article { html_body, .. }
            | GeneratedContent::CaseStudy { html_body, .. } => Some(html_body),
            GeneratedContent::LinkedInPost { .. } | GeneratedContent::TwitterThread { .. } => None,
        }
    }

    pub fn over_limit(&self) -> bool {
        match self {
            GeneratedContent::LinkedInPost { body, .. } => {
                body.chars().count() > LINKEDIN_CHAR_LIMIT
            }
            GeneratedContent::TwitterThread { tweets, .. } => tweets
                .iter()
                .any(|tweet| tweet.chars().count() > TWEET_CHAR_LIMIT),
            GeneratedContent::Article { .. } | GeneratedContent::CaseStudy { .. } => false,
        }
    }

    /// Body as the user edits it; tweets are separated by blank lines.
    pub fn editable_text(&self) -> String {
        match self {
            GeneratedContent::Article { html_body, .. }
            | GeneratedContent::CaseStudy { html_body, .. } => html_body.clone(),
            GeneratedContent::LinkedInPost { body, .. } => body.clone(),
            GeneratedContent::TwitterThread { tweets, .. } => tweets.join("\n\n"),
        }
    }

    /// Replaces the body with edited text and re-derives the metric from it.
    pub fn with_edited_body(&self, text: &str) -> GeneratedContent {
        match self {
            GeneratedContent::Article { title, seo, .. } => GeneratedContent::Article {
                title: title.clone(),
                html_body: text.to_string(),
                word_count: html::count_words(text),
                seo: seo.clone(),
            },
            GeneratedContent::CaseStudy { seo, .. } => GeneratedContent::CaseStudy {
                html_body: text.to_string(),
                word_count: html::count_words(text),
                seo: seo.clone(),
            },
            GeneratedContent::LinkedInPost { seo, .. } => GeneratedContent::LinkedInPost {
                body: text.to_string(),
                char_count: text.chars().count() as u32,
                seo: seo.clone(),
            },
            GeneratedContent::TwitterThread { seo, .. } => {
                let tweets: Vec<String> = text
                    .split("\n\n")
                    .map(str::trim)
                    .filter(|tweet| !tweet.is_empty())
                    .map(ToOwned::to_owned)
                    .collect();
                GeneratedContent::TwitterThread {
                    tweet_count: tweets.len() as u32,
                    tweets,
                    seo: seo.clone(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_follow_variant_rules() {
        let article = GeneratedContent::Article {
            title: String::new(),
            html_body: "<h1>Launch <b>Day</b></h1><p>x</p>".into(),
            word_count: 3,
            seo: SeoMeta::default(),
        };
        assert_eq!(article.title(), "Launch Day");

        let case_study = GeneratedContent::CaseStudy {
            html_body: "<p>no heading</p>".into(),
            word_count: 2,
            seo: SeoMeta::default(),
        };
        assert_eq!(case_study.title(), "Generated Content");

        let post = GeneratedContent::LinkedInPost {
            body: "<h1>ignored</h1>".into(),
            char_count: 0,
            seo: SeoMeta::default(),
        };
        assert_eq!(post.title(), "LinkedIn Post");
    }

    #[test]
    fn editing_a_thread_resplits_tweets() {
        let thread = GeneratedContent::TwitterThread {
            tweets: vec!["a".into()],
            tweet_count: 1,
            seo: SeoMeta::default(),
        };
        let edited = thread.with_edited_body("first\n\n second \n\n\n\nthird");
        assert_eq!(
            edited,
            GeneratedContent::TwitterThread {
                tweets: vec!["first".into(), "second".into(), "third".into()],
                tweet_count: 3,
                seo: SeoMeta::default(),
            }
        );
    }

    #[test]
    fn long_linkedin_post_is_over_limit() {
        let post = GeneratedContent::LinkedInPost {
            body: "x".repeat(LINKEDIN_CHAR_LIMIT + 1),
            char_count: 0,
            seo: SeoMeta::default(),
        };
        assert!(post.over_limit());
    }
}
