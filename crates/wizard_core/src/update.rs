use engine_logging::{engine_debug, engine_info, engine_warn};
use serde_json::Value;

use crate::{
    normalize_content, normalize_keywords, Effect, GenerationRequest, Msg, RequestAction,
    RequestId, Stage, ValidationError, WizardState,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: WizardState, msg: Msg) -> (WizardState, Vec<Effect>) {
    let effects = match msg {
        Msg::DescriptionChanged(text) => {
            state.draft_mut().description = text;
            Vec::new()
        }
        Msg::AudienceChanged(text) => {
            state.draft_mut().target_audience = text;
            Vec::new()
        }
        Msg::ToneSelected(tone) => {
            state.draft_mut().tone = tone;
            Vec::new()
        }
        Msg::ContentTypeSelected(content_type) => {
            state.draft_mut().content_type = content_type;
            Vec::new()
        }
        Msg::CampaignSubmitted => submit_campaign(&mut state),
        Msg::KeywordAdded(keyword) => {
            if state.stage() == Stage::KeywordSelection {
                state.keywords_mut().add(&keyword);
            }
            Vec::new()
        }
        Msg::KeywordRemoved(keyword) => {
            if state.stage() == Stage::KeywordSelection {
                state.keywords_mut().remove(&keyword);
            }
            Vec::new()
        }
        Msg::KeywordToggled(keyword) => {
            if state.stage() == Stage::KeywordSelection {
                state.keywords_mut().toggle(&keyword);
            }
            Vec::new()
        }
        Msg::SelectAllKeywords => {
            if state.stage() == Stage::KeywordSelection {
                state.keywords_mut().select_all();
            }
            Vec::new()
        }
        Msg::SelectNoKeywords => {
            if state.stage() == Stage::KeywordSelection {
                state.keywords_mut().select_none();
            }
            Vec::new()
        }
        Msg::GenerateClicked => generate_content(&mut state),
        Msg::RegenerateClicked => regenerate_content(&mut state),
        Msg::DraftEdited(text) => {
            if state.stage() == Stage::ContentOutput {
                state.edit_content(&text);
            }
            Vec::new()
        }
        Msg::BackClicked => go_back(&mut state),
        Msg::ResumeClicked => {
            resume(&mut state);
            Vec::new()
        }
        Msg::ExportRequested(format) => {
            if state.exporting() {
                return (state, Vec::new());
            }
            match state.content().cloned() {
                Some(content) if state.stage() == Stage::ContentOutput => {
                    state.set_exporting(true);
                    vec![Effect::Export { format, content }]
                }
                _ => Vec::new(),
            }
        }
        Msg::ExportFinished { format, location } => {
            engine_info!("Exported {} to {}", format.extension(), location);
            state.set_exporting(false);
            state.set_last_export(location);
            Vec::new()
        }
        Msg::ExportFailed { format, message } => {
            state.set_exporting(false);
            state.set_error(format!(
                "Failed to export {}: {message}",
                format.extension()
            ));
            Vec::new()
        }
        Msg::ResponseReceived { request_id, body } => {
            apply_response(&mut state, request_id, &body);
            Vec::new()
        }
        Msg::RequestFailed {
            request_id,
            message,
        } => {
            apply_failure(&mut state, request_id, &message);
            Vec::new()
        }
        Msg::ErrorDismissed => {
            state.clear_error();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Whether `ResumeClicked` would move forward from the current stage.
pub fn can_resume(state: &WizardState) -> bool {
    if state.pending().is_some() {
        return false;
    }
    match state.stage() {
        Stage::CampaignInput => match (state.campaign(), state.draft().validate()) {
            (Some(committed), Ok(current)) => {
                *committed == current && !state.keywords().is_empty()
            }
            _ => false,
        },
        Stage::KeywordSelection => state.content().is_some(),
        Stage::ContentOutput => false,
    }
}

fn submit_campaign(state: &mut WizardState) -> Vec<Effect> {
    if state.stage() != Stage::CampaignInput || state.pending().is_some() {
        return Vec::new();
    }
    let campaign = match state.draft().validate() {
        Ok(campaign) => campaign,
        Err(err) => {
            state.set_error(err.to_string());
            return Vec::new();
        }
    };
    send(
        state,
        RequestAction::Keywords,
        GenerationRequest::Keywords { campaign },
    )
}

fn generate_content(state: &mut WizardState) -> Vec<Effect> {
    if state.stage() != Stage::KeywordSelection || state.pending().is_some() {
        return Vec::new();
    }
    let keywords = state.keywords().selected();
    if keywords.is_empty() {
        state.set_error(ValidationError::EmptySelection.to_string());
        return Vec::new();
    }
    let Some(campaign) = state.campaign().cloned() else {
        engine_warn!("generate requested without a committed campaign");
        return Vec::new();
    };
    send(
        state,
        RequestAction::Content,
        GenerationRequest::Content { campaign, keywords },
    )
}

fn regenerate_content(state: &mut WizardState) -> Vec<Effect> {
    if state.stage() != Stage::ContentOutput || state.pending().is_some() {
        return Vec::new();
    }
    let Some(campaign) = state.campaign().cloned() else {
        engine_warn!("regenerate requested without a committed campaign");
        return Vec::new();
    };
    let keywords = state.generated_with().to_vec();
    send(
        state,
        RequestAction::Regenerate,
        GenerationRequest::Content { campaign, keywords },
    )
}

fn send(state: &mut WizardState, action: RequestAction, request: GenerationRequest) -> Vec<Effect> {
    state.clear_error();
    let body = request.to_json();
    let request_id = state.begin_request(action, request);
    engine_info!("Sending {:?} request id={}", action, request_id);
    vec![Effect::SendRequest {
        request_id,
        action,
        body,
    }]
}

fn apply_response(state: &mut WizardState, request_id: RequestId, body: &Value) {
    let Some(pending) = state.take_pending(request_id) else {
        engine_debug!("Dropping response for inactive request id={}", request_id);
        return;
    };
    match pending.request {
        GenerationRequest::Keywords { campaign } => {
            let keywords = normalize_keywords(body);
            engine_info!("Received {} keywords", keywords.len());
            state.accept_keywords(campaign, keywords);
        }
        GenerationRequest::Content { campaign, keywords } => {
            let content = normalize_content(body, campaign.content_type);
            if pending.action == RequestAction::Regenerate && state.draft_edited() {
                engine_warn!("Regenerated content replaces unsaved draft edits");
            }
            state.accept_content(content, keywords);
        }
    }
}

fn apply_failure(state: &mut WizardState, request_id: RequestId, message: &str) {
    let Some(pending) = state.take_pending(request_id) else {
        engine_debug!("Dropping failure for inactive request id={}", request_id);
        return;
    };
    engine_warn!(
        "{:?} request id={} failed: {}",
        pending.action,
        request_id,
        message
    );
    let prefix = match pending.action {
        RequestAction::Keywords => "Failed to generate keywords",
        RequestAction::Content => "Failed to generate content",
        RequestAction::Regenerate => "Failed to regenerate content",
    };
    state.set_error(format!("{prefix}: {message}"));
}

fn go_back(state: &mut WizardState) -> Vec<Effect> {
    let previous = match state.stage() {
        Stage::CampaignInput => return Vec::new(),
        Stage::KeywordSelection => Stage::CampaignInput,
        Stage::ContentOutput => Stage::KeywordSelection,
    };
    let mut effects = Vec::new();
    if let Some(request_id) = state.cancel_pending() {
        engine_info!("Cancelling request id={} on back navigation", request_id);
        effects.push(Effect::CancelRequest { request_id });
    }
    state.clear_error();
    state.set_stage(previous);
    effects
}

fn resume(state: &mut WizardState) {
    if !can_resume(state) {
        engine_debug!("Resume ignored at stage {:?}", state.stage());
        return;
    }
    let next = match state.stage() {
        Stage::CampaignInput => Stage::KeywordSelection,
        Stage::KeywordSelection => Stage::ContentOutput,
        Stage::ContentOutput => return,
    };
    state.clear_error();
    state.set_stage(next);
}
