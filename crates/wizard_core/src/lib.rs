//! Wizard core: pure session state machine, response normalization and
//! the canonical content model. No I/O happens here.
mod campaign;
mod content;
mod effect;
pub mod html;
mod keywords;
mod msg;
mod normalize;
mod request;
mod state;
mod update;
mod view_model;

pub use campaign::{CampaignConfig, CampaignDraft, ContentType, ParseChoiceError, Tone, ValidationError};
pub use content::{
    GeneratedContent, SeoMeta, LINKEDIN_CHAR_LIMIT, LINKEDIN_TITLE, TWEET_CHAR_LIMIT,
    TWITTER_TITLE,
};
pub use effect::{Effect, ExportFormat};
pub use keywords::KeywordSet;
pub use msg::Msg;
pub use normalize::{normalize_content, normalize_keywords, PLACEHOLDER_KEYWORDS};
pub use request::{GenerationRequest, RequestAction, RequestId};
pub use state::{PendingRequest, Stage, WizardState};
pub use update::{can_resume, update};
pub use view_model::{ContentView, KeywordView, WizardViewModel};
