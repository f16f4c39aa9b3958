use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Technical,
    Enthusiastic,
    Authoritative,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Technical,
        Tone::Enthusiastic,
        Tone::Authoritative,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Technical => "technical",
            Tone::Enthusiastic => "enthusiastic",
            Tone::Authoritative => "authoritative",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Technical => "Technical",
            Tone::Enthusiastic => "Enthusiastic",
            Tone::Authoritative => "Authoritative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContentType {
    #[default]
    #[serde(rename = "article")]
    Article,
    #[serde(rename = "linkedin")]
    Linkedin,
    #[serde(rename = "twitter")]
    Twitter,
    #[serde(rename = "case-study")]
    CaseStudy,
}

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::Article,
        ContentType::Linkedin,
        ContentType::Twitter,
        ContentType::CaseStudy,
    ];

    /// Wire name, also used as the `step` of a content request.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Article => "article",
            ContentType::Linkedin => "linkedin",
            ContentType::Twitter => "twitter",
            ContentType::CaseStudy => "case-study",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentType::Article => "SEO Article",
            ContentType::Linkedin => "LinkedIn Post",
            ContentType::Twitter => "Twitter Thread",
            ContentType::CaseStudy => "Case Study",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseChoiceError {
    kind: &'static str,
    value: String,
}

impl FromStr for Tone {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseChoiceError {
                kind: "tone",
                value: wanted.to_string(),
            })
    }
}

impl FromStr for ContentType {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ContentType::ALL
            .into_iter()
            .find(|ct| ct.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseChoiceError {
                kind: "content type",
                value: wanted.to_string(),
            })
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated campaign parameters carried from stage 1 into the later stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignConfig {
    pub description: String,
    pub target_audience: String,
    pub tone: Tone,
    pub content_type: ContentType,
}

/// The stage-1 form as the user is editing it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CampaignDraft {
    pub description: String,
    pub target_audience: String,
    pub tone: Tone,
    pub content_type: ContentType,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingCampaignFields,
    #[error("Please select at least one keyword.")]
    EmptySelection,
}

impl CampaignDraft {
    pub fn validate(&self) -> Result<CampaignConfig, ValidationError> {
        let description = self.description.trim();
        let target_audience = self.target_audience.trim();
        if description.is_empty() || target_audience.is_empty() {
            return Err(ValidationError::MissingCampaignFields);
        }
        Ok(CampaignConfig {
            description: description.to_string(),
            target_audience: target_audience.to_string(),
            tone: self.tone,
            content_type: self.content_type,
        })
    }
}

impl From<&CampaignConfig> for CampaignDraft {
    fn from(config: &CampaignConfig) -> Self {
        Self {
            description: config.description.clone(),
            target_audience: config.target_audience.clone(),
            tone: config.tone,
            content_type: config.content_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_fail_validation() {
        let draft = CampaignDraft {
            description: "  ".into(),
            target_audience: "devs".into(),
            ..CampaignDraft::default()
        };
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingCampaignFields)
        );
    }

    #[test]
    fn content_type_parses_wire_names() {
        assert_eq!("case-study".parse::<ContentType>(), Ok(ContentType::CaseStudy));
        assert_eq!("LinkedIn".parse::<ContentType>(), Ok(ContentType::Linkedin));
        assert!("blog".parse::<ContentType>().is_err());
        assert_eq!("casual".parse::<Tone>(), Ok(Tone::Casual));
    }
}
