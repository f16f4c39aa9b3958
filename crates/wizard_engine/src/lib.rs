//! Wizard engine: generation-service transport, effect execution and exports.
mod convert;
mod engine;
mod export;
mod filename;
mod frontmatter;
mod persist;
mod transport;
mod types;

pub use convert::{Converter, RuleTableConverter, SubstitutionRule, MARKDOWN_RULES};
pub use engine::{EngineConfig, EngineError, EngineHandle};
pub use export::{
    export_artifact, html_to_plain_text, to_markdown, to_plain_text, to_printable_html,
    ExportArtifact, ExportOptions,
};
pub use filename::{export_filename, filename_stem};
pub use frontmatter::build_markdown_document;
pub use persist::{ensure_output_dir, AtomicArtifactWriter, PersistError};
pub use transport::{ReqwestTransport, Transport, TransportSettings};
pub use types::{EngineEvent, FailureKind, TransportError};
