use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use chrono::Utc;
use engine_logging::{engine_info, engine_warn};
use wizard_core::{Effect, Msg};
use wizard_engine::{EngineConfig, EngineError, EngineEvent, EngineHandle};

use super::app::AppInput;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(mut config: EngineConfig, tx: mpsc::Sender<AppInput>) -> Result<Self, EngineError> {
        config.exported_utc = Arc::new(|| Some(Utc::now().to_rfc3339()));
        let engine = EngineHandle::new(config)?;
        let runner = Self { engine };
        runner.spawn_event_loop(tx);
        Ok(runner)
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendRequest {
                    request_id,
                    action,
                    body,
                } => {
                    engine_info!("SendRequest request_id={} action={:?}", request_id, action);
                    self.engine.send(request_id, body);
                }
                Effect::CancelRequest { request_id } => {
                    self.engine.cancel(request_id);
                }
                Effect::Export { format, content } => {
                    engine_info!("Export format={:?} title={}", format, content.title());
                    self.engine.export(format, content);
                }
            }
        }
    }

    fn spawn_event_loop(&self, tx: mpsc::Sender<AppInput>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                if tx.send(AppInput::Msg(event_to_msg(event))).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ResponseReceived { request_id, result } => match result {
            Ok(body) => Msg::ResponseReceived { request_id, body },
            Err(err) => {
                engine_warn!(
                    "Request {} failed: {} ({})",
                    request_id,
                    err,
                    err.message
                );
                Msg::RequestFailed {
                    request_id,
                    message: err.to_string(),
                }
            }
        },
        EngineEvent::ExportCompleted { format, result } => match result {
            Ok(path) => Msg::ExportFinished {
                format,
                location: path.display().to_string(),
            },
            Err(message) => Msg::ExportFailed { format, message },
        },
    }
}
