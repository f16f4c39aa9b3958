use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use engine_logging::{engine_debug, engine_error, engine_info};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use wizard_core::{ExportFormat, GeneratedContent, RequestId};

use crate::export::{export_artifact, ExportOptions};
use crate::persist::AtomicArtifactWriter;
use crate::transport::{ReqwestTransport, Transport, TransportSettings};
use crate::{EngineEvent, FailureKind, TransportError};

type Clock = Arc<dyn Fn() -> Option<String> + Send + Sync>;

#[derive(Clone)]
pub struct EngineConfig {
    pub transport: TransportSettings,
    pub output_dir: PathBuf,
    /// Timestamp stamped into Markdown frontmatter; `None` omits it.
    pub exported_utc: Clock,
}

impl EngineConfig {
    pub fn default_with_output(output_dir: PathBuf) -> Self {
        Self {
            transport: TransportSettings::default(),
            output_dir,
            exported_utc: Arc::new(|| None),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("transport setup failed: {0}")]
    Transport(#[from] TransportError),
}

enum EngineCommand {
    Send {
        request_id: RequestId,
        body: Value,
    },
    Cancel {
        request_id: RequestId,
    },
    Export {
        format: ExportFormat,
        content: GeneratedContent,
    },
}

type InFlight = Arc<Mutex<HashMap<RequestId, CancellationToken>>>;

#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let transport = ReqwestTransport::new(config.transport.clone())?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Starts the engine thread with a caller-supplied transport.
    pub fn with_transport(
        config: EngineConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let in_flight: InFlight = Arc::new(Mutex::new(HashMap::new()));
            let writer = AtomicArtifactWriter::new(config.output_dir.clone());
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Send { request_id, body } => {
                        let token = CancellationToken::new();
                        if let Ok(mut map) = in_flight.lock() {
                            map.insert(request_id, token.clone());
                        }
                        let transport = transport.clone();
                        let event_tx = event_tx.clone();
                        let in_flight = in_flight.clone();
                        runtime.spawn(async move {
                            let result = tokio::select! {
                                _ = token.cancelled() => Err(TransportError::new(
                                    FailureKind::Cancelled,
                                    "request cancelled",
                                )),
                                result = transport.post_json(request_id, &body) => result,
                            };
                            if let Ok(mut map) = in_flight.lock() {
                                map.remove(&request_id);
                            }
                            let _ = event_tx.send(EngineEvent::ResponseReceived { request_id, result });
                        });
                    }
                    EngineCommand::Cancel { request_id } => {
                        let token = in_flight
                            .lock()
                            .ok()
                            .and_then(|mut map| map.remove(&request_id));
                        match token {
                            Some(token) => {
                                engine_info!("Cancelled request id={}", request_id);
                                token.cancel();
                            }
                            None => engine_debug!("Cancel for finished request id={}", request_id),
                        }
                    }
                    EngineCommand::Export { format, content } => {
                        let options = ExportOptions {
                            exported_utc: (config.exported_utc)(),
                            ..ExportOptions::default()
                        };
                        let artifact = export_artifact(&content, format, &options);
                        let result = writer
                            .write(&artifact)
                            .map_err(|err| {
                                engine_error!("Export of {} failed: {}", artifact.filename, err);
                                err.to_string()
                            });
                        let _ = event_tx.send(EngineEvent::ExportCompleted { format, result });
                    }
                }
            }
            engine_debug!("Engine command channel closed");
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn send(&self, request_id: RequestId, body: Value) {
        let _ = self.cmd_tx.send(EngineCommand::Send { request_id, body });
    }

    pub fn cancel(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel { request_id });
    }

    pub fn export(&self, format: ExportFormat, content: GeneratedContent) {
        let _ = self.cmd_tx.send(EngineCommand::Export { format, content });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}
