use crate::{ChatRequestId, PredictionRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RequestPrediction(PredictionRequest),
    SendChat {
        request_id: ChatRequestId,
        message: String,
    },
    FetchJobs,
    /// Blocking, user-visible notice.
    ShowAlert(String),
}
