use crate::{CampaignDraft, GeneratedContent, RequestAction, Stage};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardViewModel {
    pub stage: Stage,
    pub draft: CampaignDraft,
    pub keywords: Vec<KeywordView>,
    pub selected_count: usize,
    pub can_resume: bool,
    /// Action whose control is disabled while its request is in flight.
    pub busy: Option<RequestAction>,
    pub exporting: bool,
    pub content: Option<ContentView>,
    pub generated_with: Vec<String>,
    pub last_export: Option<String>,
    pub error: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordView {
    pub text: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentView {
    pub title: String,
    pub metric: u32,
    pub metric_label: &'static str,
    pub over_limit: bool,
    pub edited: bool,
    pub content: GeneratedContent,
}
