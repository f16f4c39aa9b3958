use std::sync::Once;

use serde_json::json;
use wizard_core::{
    update, ContentType, Effect, ExportFormat, GeneratedContent, Msg, RequestAction, RequestId,
    SeoMeta, Stage, Tone, WizardState,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn apply(state: WizardState, msgs: Vec<Msg>) -> (WizardState, Vec<Effect>) {
    let mut state = state;
    let mut all = Vec::new();
    for msg in msgs {
        let (next, effects) = update(state, msg);
        state = next;
        all.extend(effects);
    }
    (state, all)
}

fn sent_request(effects: &[Effect]) -> (RequestId, RequestAction, serde_json::Value) {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::SendRequest {
                request_id,
                action,
                body,
            } => Some((*request_id, *action, body.clone())),
            _ => None,
        })
        .expect("send request effect")
}

fn filled_form(content_type: ContentType) -> Vec<Msg> {
    vec![
        Msg::DescriptionChanged("d".to_string()),
        Msg::AudienceChanged("a".to_string()),
        Msg::ToneSelected(Tone::Casual),
        Msg::ContentTypeSelected(content_type),
    ]
}

/// Drives stage 1 to stage 2 with the given keyword response.
fn at_keyword_selection(content_type: ContentType, response: serde_json::Value) -> WizardState {
    let mut msgs = filled_form(content_type);
    msgs.push(Msg::CampaignSubmitted);
    let (state, effects) = apply(WizardState::new(), msgs);
    let (request_id, _, _) = sent_request(&effects);
    let (state, _) = update(
        state,
        Msg::ResponseReceived {
            request_id,
            body: response,
        },
    );
    assert_eq!(state.stage(), Stage::KeywordSelection);
    state
}

fn at_content_output() -> WizardState {
    let state = at_keyword_selection(
        ContentType::Twitter,
        json!([{"keyword": "fitness"}, {"keyword": "gym"}]),
    );
    let (state, effects) = apply(
        state,
        vec![
            Msg::KeywordToggled("fitness".to_string()),
            Msg::KeywordToggled("gym".to_string()),
            Msg::GenerateClicked,
        ],
    );
    let (request_id, _, _) = sent_request(&effects);
    let (state, _) = update(
        state,
        Msg::ResponseReceived {
            request_id,
            body: json!({"twitterThread": ["t1", "t2"], "totalTweets": 2}),
        },
    );
    state
}

#[test]
fn missing_fields_block_submit_without_request() {
    init_logging();
    let (state, effects) = apply(
        WizardState::new(),
        vec![
            Msg::DescriptionChanged("only a description".to_string()),
            Msg::CampaignSubmitted,
        ],
    );
    assert!(effects.is_empty());
    assert_eq!(state.stage(), Stage::CampaignInput);
    assert_eq!(state.error(), Some("Please fill in all required fields."));

    let (state, _) = update(state, Msg::ErrorDismissed);
    assert_eq!(state.error(), None);
}

#[test]
fn submit_sends_keyword_request_with_campaign_fields() {
    init_logging();
    let mut msgs = filled_form(ContentType::Twitter);
    msgs.push(Msg::CampaignSubmitted);
    let (state, effects) = apply(WizardState::new(), msgs);

    let (_, action, body) = sent_request(&effects);
    assert_eq!(action, RequestAction::Keywords);
    assert_eq!(
        body,
        json!({
            "campaignDescription": "d",
            "targetAudience": "a",
            "tone": "casual",
            "contentType": "twitter",
            "step": "keywords"
        })
    );
    assert_eq!(state.view().busy, Some(RequestAction::Keywords));
    assert_eq!(state.stage(), Stage::CampaignInput);
}

#[test]
fn duplicate_submit_is_ignored_while_in_flight() {
    init_logging();
    let mut msgs = filled_form(ContentType::Article);
    msgs.push(Msg::CampaignSubmitted);
    msgs.push(Msg::CampaignSubmitted);
    let (_state, effects) = apply(WizardState::new(), msgs);
    assert_eq!(effects.len(), 1);
}

#[test]
fn end_to_end_twitter_scenario() {
    init_logging();
    let state = at_keyword_selection(
        ContentType::Twitter,
        json!([{"keyword": "fitness"}, {"keyword": "gym"}]),
    );
    assert_eq!(state.keywords().keywords(), ["fitness", "gym"]);
    assert_eq!(state.keywords().selected_count(), 0);

    let (state, effects) = apply(
        state,
        vec![
            Msg::KeywordToggled("fitness".to_string()),
            Msg::KeywordToggled("gym".to_string()),
            Msg::GenerateClicked,
        ],
    );
    let (request_id, action, body) = sent_request(&effects);
    assert_eq!(action, RequestAction::Content);
    assert_eq!(body["keywords"], json!(["fitness", "gym"]));
    assert_eq!(body["step"], json!("twitter"));

    let (state, _) = update(
        state,
        Msg::ResponseReceived {
            request_id,
            body: json!({"twitterThread": ["t1", "t2"], "totalTweets": 2}),
        },
    );
    assert_eq!(state.stage(), Stage::ContentOutput);
    assert_eq!(
        state.content(),
        Some(&GeneratedContent::TwitterThread {
            tweets: vec!["t1".to_string(), "t2".to_string()],
            tweet_count: 2,
            seo: SeoMeta::default(),
        })
    );
}

#[test]
fn generate_with_empty_selection_is_a_validation_error() {
    init_logging();
    let state = at_keyword_selection(ContentType::Article, json!(["a", "b"]));
    let (state, effects) = update(state, Msg::GenerateClicked);
    assert!(effects.is_empty());
    assert_eq!(state.error(), Some("Please select at least one keyword."));
    assert_eq!(state.stage(), Stage::KeywordSelection);
}

#[test]
fn keyword_failure_keeps_stage_and_reports_banner() {
    init_logging();
    let mut msgs = filled_form(ContentType::Article);
    msgs.push(Msg::CampaignSubmitted);
    let (state, effects) = apply(WizardState::new(), msgs);
    let (request_id, _, _) = sent_request(&effects);

    let (state, _) = update(
        state,
        Msg::RequestFailed {
            request_id,
            message: "service answered HTTP 500".to_string(),
        },
    );
    assert_eq!(state.stage(), Stage::CampaignInput);
    assert_eq!(
        state.error(),
        Some("Failed to generate keywords: service answered HTTP 500")
    );
    assert!(state.pending().is_none());
}

#[test]
fn regeneration_reuses_recorded_selection() {
    init_logging();
    let state = at_content_output();

    // Change the keyword list behind the output stage.
    let (state, _) = apply(
        state,
        vec![
            Msg::BackClicked,
            Msg::KeywordRemoved("gym".to_string()),
            Msg::KeywordAdded("protein".to_string()),
            Msg::ResumeClicked,
        ],
    );
    assert_eq!(state.stage(), Stage::ContentOutput);
    assert_eq!(state.keywords().selected(), vec!["fitness", "protein"]);

    let (state, effects) = update(state, Msg::RegenerateClicked);
    let (request_id, action, body) = sent_request(&effects);
    assert_eq!(action, RequestAction::Regenerate);
    assert_eq!(body["keywords"], json!(["fitness", "gym"]));

    let (state, _) = update(
        state,
        Msg::ResponseReceived {
            request_id,
            body: json!({"twitterThread": ["new"]}),
        },
    );
    assert_eq!(
        state.content(),
        Some(&GeneratedContent::TwitterThread {
            tweets: vec!["new".to_string()],
            tweet_count: 1,
            seo: SeoMeta::default(),
        })
    );
    assert_eq!(state.generated_with(), ["fitness", "gym"]);
}

#[test]
fn regeneration_failure_keeps_prior_content() {
    init_logging();
    let state = at_content_output();
    let before = state.content().cloned();

    let (state, effects) = update(state, Msg::RegenerateClicked);
    let (request_id, _, _) = sent_request(&effects);
    let (state, _) = update(
        state,
        Msg::RequestFailed {
            request_id,
            message: "network error".to_string(),
        },
    );
    assert_eq!(state.content().cloned(), before);
    assert_eq!(
        state.error(),
        Some("Failed to regenerate content: network error")
    );
    assert_eq!(state.stage(), Stage::ContentOutput);
}

#[test]
fn back_navigation_keeps_data_and_cancels_in_flight_request() {
    init_logging();
    let state = at_keyword_selection(ContentType::Article, json!(["a", "b"]));
    let (state, effects) = apply(
        state,
        vec![Msg::KeywordToggled("a".to_string()), Msg::GenerateClicked],
    );
    let (request_id, _, _) = sent_request(&effects);

    let (state, effects) = update(state, Msg::BackClicked);
    assert_eq!(effects, vec![Effect::CancelRequest { request_id }]);
    assert_eq!(state.stage(), Stage::CampaignInput);
    assert!(state.pending().is_none());
    assert_eq!(state.keywords().selected(), vec!["a"]);

    // A late response for the cancelled request changes nothing.
    let (state, _) = update(
        state,
        Msg::ResponseReceived {
            request_id,
            body: json!({"htmlArticle": "<h1>late</h1>"}),
        },
    );
    assert_eq!(state.stage(), Stage::CampaignInput);
    assert!(state.content().is_none());

    // Unchanged campaign: resume forward without a new request.
    let (state, effects) = update(state, Msg::ResumeClicked);
    assert!(effects.is_empty());
    assert_eq!(state.stage(), Stage::KeywordSelection);
}

#[test]
fn resume_requires_unchanged_campaign() {
    init_logging();
    let state = at_keyword_selection(ContentType::Article, json!(["a"]));
    let (state, _) = apply(
        state,
        vec![
            Msg::BackClicked,
            Msg::DescriptionChanged("something else".to_string()),
        ],
    );
    assert!(!state.view().can_resume);
    let (state, _) = update(state, Msg::ResumeClicked);
    assert_eq!(state.stage(), Stage::CampaignInput);
}

#[test]
fn draft_edits_update_content_and_metric() {
    init_logging();
    let state = at_content_output();
    let (mut state, _) = update(state, Msg::DraftEdited("one\n\ntwo\n\nthree".to_string()));
    let view = state.view();
    let content = view.content.expect("content view");
    assert_eq!(content.metric, 3);
    assert_eq!(content.metric_label, "tweets");
    assert!(content.edited);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn export_emits_effect_and_records_location() {
    init_logging();
    let state = at_content_output();
    let (state, effects) = update(state, Msg::ExportRequested(ExportFormat::Markdown));
    assert!(matches!(
        effects.as_slice(),
        [Effect::Export {
            format: ExportFormat::Markdown,
            ..
        }]
    ));
    assert!(state.view().exporting);

    let (state, effects) = update(state, Msg::ExportRequested(ExportFormat::PlainText));
    assert!(effects.is_empty());

    let (state, _) = update(
        state,
        Msg::ExportFinished {
            format: ExportFormat::Markdown,
            location: "out/twitterthread.md".to_string(),
        },
    );
    let view = state.view();
    assert!(!view.exporting);
    assert_eq!(view.last_export.as_deref(), Some("out/twitterthread.md"));
}

#[test]
fn keyword_edits_outside_selection_stage_are_ignored() {
    init_logging();
    let (state, _) = update(WizardState::new(), Msg::KeywordAdded("early".to_string()));
    assert!(state.keywords().is_empty());
}

#[test]
fn new_campaign_keywords_drop_content_from_old_campaign() {
    init_logging();
    let state = at_content_output();
    let (state, effects) = apply(
        state,
        vec![
            Msg::BackClicked,
            Msg::BackClicked,
            Msg::DescriptionChanged("a different launch".to_string()),
            Msg::CampaignSubmitted,
        ],
    );
    let (request_id, action, _) = sent_request(&effects);
    assert_eq!(action, RequestAction::Keywords);

    let (state, _) = update(
        state,
        Msg::ResponseReceived {
            request_id,
            body: json!(["fresh"]),
        },
    );
    assert_eq!(state.stage(), Stage::KeywordSelection);
    assert!(state.content().is_none());
    assert!(state.generated_with().is_empty());
    assert!(!state.view().can_resume);
}
