use serde_json::Value;

use crate::{GeneratedContent, RequestAction, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SendRequest {
        request_id: RequestId,
        action: RequestAction,
        body: Value,
    },
    CancelRequest {
        request_id: RequestId,
    },
    Export {
        format: ExportFormat,
        content: GeneratedContent,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    PlainText,
    /// Standalone HTML handed to an external print step.
    PrintableHtml,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::PlainText => "txt",
            ExportFormat::PrintableHtml => "html",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::PlainText => "text/plain",
            ExportFormat::PrintableHtml => "text/html",
        }
    }
}
