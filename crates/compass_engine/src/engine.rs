use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use compass_logging::{compass_debug, compass_error};
use thiserror::Error;

use crate::client::{Backend, ClientSettings, ReqwestBackend};
use crate::{ApiError, ChatPayload, EngineEvent, PredictPayload, RequestId};

enum EngineCommand {
    Predict(PredictPayload),
    Chat { request_id: RequestId, message: String },
    LoadJobs,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("backend client: {0}")]
    Client(#[from] ApiError),
}

/// Command side of the engine. Cheap to clone.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Receiving side of the engine; one per handle family.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn connect(settings: ClientSettings) -> Result<(Self, EngineEvents), EngineError> {
        let backend = ReqwestBackend::new(settings)?;
        Self::spawn(Arc::new(backend))
    }

    /// Starts the worker thread. Every command runs as its own task, so
    /// completions come back in whatever order the backend answers.
    pub fn spawn(backend: Arc<dyn Backend>) -> Result<(Self, EngineEvents), EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let backend = backend.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(backend.as_ref(), command, event_tx).await;
                });
            }
            compass_debug!("engine command channel closed");
        });

        Ok((Self { cmd_tx }, EngineEvents { event_rx }))
    }

    pub fn predict(&self, payload: PredictPayload) {
        self.send(EngineCommand::Predict(payload));
    }

    pub fn chat(&self, request_id: RequestId, message: impl Into<String>) {
        self.send(EngineCommand::Chat {
            request_id,
            message: message.into(),
        });
    }

    pub fn load_jobs(&self) {
        self.send(EngineCommand::LoadJobs);
    }

    fn send(&self, command: EngineCommand) {
        if self.cmd_tx.send(command).is_err() {
            compass_error!("engine worker is gone; command dropped");
        }
    }
}

impl EngineEvents {
    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event; `None` once the worker has shut down.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    backend: &dyn Backend,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Predict(payload) => {
            EngineEvent::PredictionCompleted(backend.predict(&payload).await)
        }
        EngineCommand::Chat {
            request_id,
            message,
        } => {
            let result = backend
                .chat(&ChatPayload { message })
                .await
                .map(|reply| reply.response);
            EngineEvent::ChatCompleted { request_id, result }
        }
        EngineCommand::LoadJobs => EngineEvent::JobsCompleted(backend.list_jobs().await),
    };
    let _ = event_tx.send(event);
}
