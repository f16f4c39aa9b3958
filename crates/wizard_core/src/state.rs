use crate::view_model::{ContentView, KeywordView, WizardViewModel};
use crate::{
    CampaignConfig, CampaignDraft, GeneratedContent, GenerationRequest, KeywordSet,
    RequestAction, RequestId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    CampaignInput,
    KeywordSelection,
    ContentOutput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: RequestId,
    pub action: RequestAction,
    pub request: GenerationRequest,
}

/// The whole wizard session. Owned by the front end and threaded through
/// [`crate::update`]; there is no other copy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardState {
    stage: Stage,
    draft: CampaignDraft,
    campaign: Option<CampaignConfig>,
    keywords: KeywordSet,
    content: Option<GeneratedContent>,
    generated_with: Vec<String>,
    draft_edited: bool,
    pending: Option<PendingRequest>,
    next_request_id: RequestId,
    export_in_progress: bool,
    last_export: Option<String>,
    error: Option<String>,
    dirty: bool,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn draft(&self) -> &CampaignDraft {
        &self.draft
    }

    pub fn campaign(&self) -> Option<&CampaignConfig> {
        self.campaign.as_ref()
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    pub fn content(&self) -> Option<&GeneratedContent> {
        self.content.as_ref()
    }

    /// Keyword snapshot used by the last successful content generation.
    pub fn generated_with(&self) -> &[String] {
        &self.generated_with
    }

    pub fn pending(&self) -> Option<&PendingRequest> {
        self.pending.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns whether state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> WizardViewModel {
        WizardViewModel {
            stage: self.stage,
            draft: self.draft.clone(),
            keywords: self
                .keywords
                .keywords()
                .iter()
                .map(|keyword| KeywordView {
                    text: keyword.clone(),
                    selected: self.keywords.is_selected(keyword),
                })
                .collect(),
            selected_count: self.keywords.selected_count(),
            can_resume: crate::can_resume(self),
            busy: self.pending.as_ref().map(|pending| pending.action),
            exporting: self.export_in_progress,
            content: self.content.as_ref().map(|content| ContentView {
                title: content.title(),
                metric: content.metric(),
                metric_label: content.metric_label(),
                over_limit: content.over_limit(),
                edited: self.draft_edited,
                content: content.clone(),
            }),
            generated_with: self.generated_with.clone(),
            last_export: self.last_export.clone(),
            error: self.error.clone(),
            dirty: self.dirty,
        }
    }

    pub(crate) fn draft_mut(&mut self) -> &mut CampaignDraft {
        self.dirty = true;
        &mut self.draft
    }

    pub(crate) fn keywords_mut(&mut self) -> &mut KeywordSet {
        self.dirty = true;
        &mut self.keywords
    }

    pub(crate) fn set_stage(&mut self, stage: Stage) {
        if self.stage != stage {
            self.stage = stage;
            self.dirty = true;
        }
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.dirty = true;
    }

    pub(crate) fn clear_error(&mut self) {
        if self.error.take().is_some() {
            self.dirty = true;
        }
    }

    pub(crate) fn begin_request(
        &mut self,
        action: RequestAction,
        request: GenerationRequest,
    ) -> RequestId {
        self.next_request_id += 1;
        let id = self.next_request_id;
        self.pending = Some(PendingRequest {
            id,
            action,
            request,
        });
        self.dirty = true;
        id
    }

    /// Takes the pending request if `request_id` matches it.
    pub(crate) fn take_pending(&mut self, request_id: RequestId) -> Option<PendingRequest> {
        if self.pending.as_ref().map(|pending| pending.id) != Some(request_id) {
            return None;
        }
        self.dirty = true;
        self.pending.take()
    }

    pub(crate) fn cancel_pending(&mut self) -> Option<RequestId> {
        let pending = self.pending.take()?;
        self.dirty = true;
        Some(pending.id)
    }

    /// Commits a keyword response: campaign becomes fixed, nothing selected.
    /// Content generated for a different campaign is dropped.
    pub(crate) fn accept_keywords(&mut self, campaign: CampaignConfig, keywords: Vec<String>) {
        if self.campaign.as_ref() != Some(&campaign) {
            self.content = None;
            self.generated_with.clear();
            self.draft_edited = false;
        }
        self.campaign = Some(campaign);
        self.keywords = KeywordSet::from_keywords(keywords);
        self.stage = Stage::KeywordSelection;
        self.dirty = true;
    }

    /// Replaces generated content wholesale.
    pub(crate) fn accept_content(&mut self, content: GeneratedContent, keywords: Vec<String>) {
        self.content = Some(content);
        self.generated_with = keywords;
        self.draft_edited = false;
        self.stage = Stage::ContentOutput;
        self.dirty = true;
    }

    pub(crate) fn edit_content(&mut self, text: &str) -> bool {
        let Some(content) = self.content.as_ref() else {
            return false;
        };
        self.content = Some(content.with_edited_body(text));
        self.draft_edited = true;
        self.dirty = true;
        true
    }

    pub(crate) fn draft_edited(&self) -> bool {
        self.draft_edited
    }

    pub(crate) fn set_exporting(&mut self, exporting: bool) {
        self.export_in_progress = exporting;
        self.dirty = true;
    }

    pub(crate) fn exporting(&self) -> bool {
        self.export_in_progress
    }

    pub(crate) fn set_last_export(&mut self, location: String) {
        self.last_export = Some(location);
        self.dirty = true;
    }
}
