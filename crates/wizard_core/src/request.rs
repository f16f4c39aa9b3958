use serde::Serialize;
use serde_json::Value;

use crate::{CampaignConfig, ContentType, Tone};

pub type RequestId = u64;

/// Which control issued a request. At most one request is in flight per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestAction {
    Keywords,
    Content,
    Regenerate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    Keywords {
        campaign: CampaignConfig,
    },
    Content {
        campaign: CampaignConfig,
        keywords: Vec<String>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KeywordsBody<'a> {
    campaign_description: &'a str,
    target_audience: &'a str,
    tone: Tone,
    content_type: ContentType,
    step: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentBody<'a> {
    step: ContentType,
    campaign_description: &'a str,
    target_audience: &'a str,
    tone: Tone,
    keywords: &'a [String],
}

impl GenerationRequest {
    pub fn campaign(&self) -> &CampaignConfig {
        match self {
            GenerationRequest::Keywords { campaign } | GenerationRequest::Content { campaign, .. } => {
                campaign
            }
        }
    }

    /// JSON body posted to the generation endpoint.
    pub fn to_json(&self) -> Value {
        let result = match self {
            GenerationRequest::Keywords { campaign } => serde_json::to_value(KeywordsBody {
                campaign_description: &campaign.description,
                target_audience: &campaign.target_audience,
                tone: campaign.tone,
                content_type: campaign.content_type,
                step: "keywords",
            }),
            GenerationRequest::Content { campaign, keywords } => {
                serde_json::to_value(ContentBody {
                    step: campaign.content_type,
                    campaign_description: &campaign.description,
                    target_audience: &campaign.target_audience,
                    tone: campaign.tone,
                    keywords,
                })
            }
        };
        // Plain string fields and unit enums always serialize.
        result.unwrap_or(Value::Null)
    }
}
