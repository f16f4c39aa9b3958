use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use serde_json::Value;
use wizard_core::{ExportFormat, RequestId};

/// Results the engine thread hands back to the front end.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    ResponseReceived {
        request_id: RequestId,
        result: Result<Value, TransportError>,
    },
    ExportCompleted {
        format: ExportFormat,
        /// Written path, or the reason nothing was written.
        result: Result<PathBuf, String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    InvalidJson,
    Cancelled,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => f.write_str("invalid endpoint"),
            FailureKind::HttpStatus(code) => write!(f, "service answered HTTP {code}"),
            FailureKind::Timeout => f.write_str("request timed out"),
            FailureKind::TooLarge { max_bytes, .. } => {
                write!(f, "response larger than {max_bytes} bytes")
            }
            FailureKind::InvalidJson => f.write_str("response was not valid JSON"),
            FailureKind::Cancelled => f.write_str("request cancelled"),
            FailureKind::Network => f.write_str("network error"),
        }
    }
}

/// A failed generation request. `Display` is the banner text; `message`
/// keeps the underlying detail for the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub kind: FailureKind,
    pub message: String,
}

impl TransportError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            // Address or connection problems are only actionable with the detail.
            FailureKind::InvalidUrl | FailureKind::Network if !self.message.is_empty() => {
                write!(f, "{}: {}", self.kind, self.message)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}

impl Error for TransportError {}
