use serde_json::Value;

use crate::{ContentType, ExportFormat, RequestId, Tone};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the campaign description.
    DescriptionChanged(String),
    /// User edited the target audience.
    AudienceChanged(String),
    ToneSelected(Tone),
    ContentTypeSelected(ContentType),
    /// User submitted the campaign form (stage 1 -> 2).
    CampaignSubmitted,
    KeywordAdded(String),
    KeywordRemoved(String),
    KeywordToggled(String),
    SelectAllKeywords,
    SelectNoKeywords,
    /// User asked for content from the current selection (stage 2 -> 3).
    GenerateClicked,
    /// User asked for a new generation from the recorded selection.
    RegenerateClicked,
    /// User replaced the body of the generated content.
    DraftEdited(String),
    BackClicked,
    /// Move forward one stage reusing data already fetched.
    ResumeClicked,
    ExportRequested(ExportFormat),
    ExportFinished { format: ExportFormat, location: String },
    ExportFailed { format: ExportFormat, message: String },
    /// Generation service answered with a 2xx JSON body.
    ResponseReceived { request_id: RequestId, body: Value },
    /// Generation request failed (status, network or decoding).
    RequestFailed { request_id: RequestId, message: String },
    ErrorDismissed,
    NoOp,
}
