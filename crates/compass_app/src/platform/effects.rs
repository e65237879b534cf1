use std::sync::mpsc;
use std::thread;

use compass_core::{
    DirectoryMsg, Effect, JobListing, PredictionMsg, PredictionRequest, Suggestion,
};
use compass_engine::{
    ClientSettings, EngineError, EngineEvent, EngineEvents, EngineHandle, JobRecord,
    PredictPayload, RoleSuggestion,
};
use compass_logging::{compass_debug, compass_error, compass_info};

use super::app::{AppMsg, PageMsg};

/// What one batch of effects left for the caller.
#[derive(Debug, Default)]
pub struct Dispatched {
    /// Requests started; each comes back as exactly one `AppMsg::Engine`.
    pub started: usize,
    pub alerts: Vec<String>,
}

/// Runs network effects on the engine and feeds completions back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, msg_tx: mpsc::Sender<AppMsg>) -> Result<Self, EngineError> {
        compass_info!("Backend at {}", settings.base_url);
        let (engine, events) = EngineHandle::connect(settings)?;
        spawn_event_loop(events, msg_tx);
        Ok(Self { engine })
    }

    /// Starts every network effect and hands back the alerts, which belong
    /// to the view.
    pub fn run(&self, effects: Vec<Effect>) -> Dispatched {
        let mut dispatched = Dispatched::default();
        for effect in effects {
            match effect {
                Effect::RequestPrediction(request) => {
                    compass_info!(
                        "RequestPrediction skills={} interest={}",
                        request.skills.len(),
                        request.interest
                    );
                    dispatched.started += 1;
                    self.engine.predict(to_payload(request));
                }
                Effect::SendChat {
                    request_id,
                    message,
                } => {
                    compass_info!("SendChat request_id={} len={}", request_id, message.len());
                    dispatched.started += 1;
                    self.engine.chat(request_id, message);
                }
                Effect::FetchJobs => {
                    compass_info!("FetchJobs");
                    dispatched.started += 1;
                    self.engine.load_jobs();
                }
                Effect::ShowAlert(message) => dispatched.alerts.push(message),
            }
        }
        dispatched
    }
}

fn spawn_event_loop(events: EngineEvents, msg_tx: mpsc::Sender<AppMsg>) {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            if msg_tx.send(AppMsg::Engine(map_event(event))).is_err() {
                break;
            }
        }
        compass_debug!("engine event loop finished");
    });
}

fn to_payload(request: PredictionRequest) -> PredictPayload {
    PredictPayload {
        skills: request.skills,
        interest: request.interest,
    }
}

fn to_suggestion(role: RoleSuggestion) -> Suggestion {
    Suggestion {
        role: role.role,
        video_links: role.video_links,
    }
}

fn to_listing(record: JobRecord) -> JobListing {
    JobListing {
        job_role: record.job_role,
        interest: record.interest,
        skills: record.skills,
    }
}

/// Turns an engine completion into a page message. Failures are logged
/// here; the pages only learn that the call failed.
fn map_event(event: EngineEvent) -> PageMsg {
    match event {
        EngineEvent::PredictionCompleted(Ok(roles)) => PageMsg::Prediction(
            PredictionMsg::PredictionSucceeded(roles.into_iter().map(to_suggestion).collect()),
        ),
        EngineEvent::PredictionCompleted(Err(err)) => {
            compass_error!("Prediction request failed: {}", err);
            PageMsg::Prediction(PredictionMsg::PredictionFailed)
        }
        EngineEvent::ChatCompleted {
            request_id,
            result: Ok(text),
        } => PageMsg::Prediction(PredictionMsg::ChatReplied { request_id, text }),
        EngineEvent::ChatCompleted {
            request_id,
            result: Err(err),
        } => {
            compass_error!("Chat request {} failed: {}", request_id, err);
            PageMsg::Prediction(PredictionMsg::ChatFailed { request_id })
        }
        EngineEvent::JobsCompleted(Ok(records)) => PageMsg::Directory(DirectoryMsg::JobsLoaded(
            records.into_iter().map(to_listing).collect(),
        )),
        EngineEvent::JobsCompleted(Err(err)) => {
            compass_error!("Error loading jobs: {}", err);
            PageMsg::Directory(DirectoryMsg::JobsLoadFailed)
        }
    }
}
