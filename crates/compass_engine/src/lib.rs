//! Career compass engine: HTTP access to the backend and effect execution.
mod client;
mod engine;
mod snapshot;
mod types;

pub use client::{Backend, ClientSettings, ReqwestBackend, CHAT_PATH, JOBS_PATH, PREDICT_PATH};
pub use engine::{EngineError, EngineEvents, EngineHandle};
pub use snapshot::{ensure_snapshot_dir, SnapshotError, SnapshotWriter};
pub use types::{
    ApiError, ChatPayload, ChatReply, EngineEvent, ErrorBody, FailureKind, JobRecord,
    PredictPayload, RequestId, RoleSuggestion,
};
