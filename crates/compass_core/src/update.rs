use crate::skills::has_skill_text;
use crate::view_model::{CHAT_FALLBACK_REPLY, PREDICTION_ALERT};
use crate::{DirectoryMsg, Effect, JobDirectory, Key, LoadState, PredictionMsg, PredictionPage};

/// Pure update for the prediction page: applies a message and returns any effects.
pub fn update_prediction(mut state: PredictionPage, msg: PredictionMsg) -> (PredictionPage, Vec<Effect>) {
    let effects = match msg {
        PredictionMsg::SkillsChanged(raw) => {
            state.set_skills_input(raw);
            Vec::new()
        }
        PredictionMsg::InterestChanged(interest) => {
            state.set_interest(interest);
            Vec::new()
        }
        PredictionMsg::SubmitClicked => {
            if has_skill_text(state.skills_input()) {
                let request = state.begin_prediction();
                vec![Effect::RequestPrediction(request)]
            } else {
                state.show_skills_error();
                Vec::new()
            }
        }
        PredictionMsg::PredictionSucceeded(suggestions) => {
            state.show_results(suggestions);
            Vec::new()
        }
        PredictionMsg::PredictionFailed => {
            state.fail_prediction();
            vec![Effect::ShowAlert(PREDICTION_ALERT.to_string())]
        }
        PredictionMsg::ChatToggled => {
            state.toggle_chat();
            Vec::new()
        }
        PredictionMsg::ChatInputChanged(text) => {
            state.set_chat_input(text);
            Vec::new()
        }
        PredictionMsg::ChatSendClicked | PredictionMsg::ChatKeyPressed(Key::Enter) => {
            // Sends are not serialized: every one gets its own request and indicator.
            match state.take_chat_message() {
                Some((request_id, message)) => vec![Effect::SendChat {
                    request_id,
                    message,
                }],
                None => Vec::new(),
            }
        }
        PredictionMsg::ChatReplied { request_id, text } => {
            state.resolve_chat(request_id, text);
            Vec::new()
        }
        PredictionMsg::ChatFailed { request_id } => {
            state.resolve_chat(request_id, CHAT_FALLBACK_REPLY.to_string());
            Vec::new()
        }
        PredictionMsg::ChatKeyPressed(Key::Other) | PredictionMsg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Pure update for the job directory page.
pub fn update_directory(mut state: JobDirectory, msg: DirectoryMsg) -> (JobDirectory, Vec<Effect>) {
    let effects = match msg {
        DirectoryMsg::PageLoaded => {
            if state.load_state() == LoadState::NotStarted {
                state.start_loading();
                vec![Effect::FetchJobs]
            } else {
                Vec::new()
            }
        }
        DirectoryMsg::JobsLoaded(jobs) => {
            // The cache is filled exactly once.
            if state.load_state() == LoadState::Loading {
                state.populate(jobs);
            }
            Vec::new()
        }
        DirectoryMsg::JobsLoadFailed => {
            if state.load_state() == LoadState::Loading {
                state.fail_loading();
            }
            Vec::new()
        }
        DirectoryMsg::SearchChanged(term) => {
            state.set_search_term(term);
            Vec::new()
        }
        DirectoryMsg::InterestFilterChanged(interest) => {
            state.set_interest_filter(interest);
            Vec::new()
        }
        DirectoryMsg::NoOp => Vec::new(),
    };

    (state, effects)
}
