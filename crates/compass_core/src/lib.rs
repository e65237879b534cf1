//! Career compass core: pure page controllers and view-model helpers.
//!
//! Two controllers live here and share nothing: the prediction page
//! (skills form, results, chat panel) and the job directory. Each is a
//! state value plus an `update` function that returns the effects the
//! platform must run.
mod effect;
mod filter;
mod msg;
mod skills;
mod state;
mod types;
mod update;
mod view_model;

pub use effect::Effect;
pub use filter::{distinct_interests, filter_jobs, FilterCriteria};
pub use msg::{DirectoryMsg, PredictionMsg};
pub use skills::{has_skill_text, split_skills};
pub use state::{ChatPanel, JobDirectory, LoadState, PredictionPage};
pub use types::{ChatMessage, ChatRequestId, JobListing, Key, PredictionRequest, Suggestion};
pub use update::{update_directory, update_prediction};
pub use view_model::{
    ChatEntryView, ChatViewModel, DirectoryViewModel, JobCardView, ListingView,
    PredictionViewModel, VideoContainerView, VideoFrameView, CHAT_FALLBACK_REPLY,
    JOBS_LOAD_ERROR, PREDICTION_ALERT,
};
