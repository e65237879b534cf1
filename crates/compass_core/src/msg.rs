use crate::{ChatRequestId, JobListing, Key, Suggestion};

/// Events of the prediction-and-chat page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictionMsg {
    /// User edited the skills text box.
    SkillsChanged(String),
    /// User picked an interest category.
    InterestChanged(String),
    /// User clicked the submit button.
    SubmitClicked,
    /// Prediction endpoint answered with suggestions.
    PredictionSucceeded(Vec<Suggestion>),
    /// Prediction request failed (transport, status or payload).
    PredictionFailed,
    /// User clicked the chat button.
    ChatToggled,
    /// User edited the chat input.
    ChatInputChanged(String),
    /// User clicked the chat send button.
    ChatSendClicked,
    /// User pressed a key inside the chat input.
    ChatKeyPressed(Key),
    /// Chat endpoint answered one send.
    ChatReplied {
        request_id: ChatRequestId,
        text: String,
    },
    /// One chat send failed.
    ChatFailed { request_id: ChatRequestId },
    NoOp,
}

/// Events of the job directory page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryMsg {
    /// Page finished loading; triggers the one listing fetch.
    PageLoaded,
    /// Listing endpoint answered.
    JobsLoaded(Vec<JobListing>),
    /// Listing fetch failed.
    JobsLoadFailed,
    /// Every keystroke in the search field.
    SearchChanged(String),
    /// Category selector changed; an empty value selects every category.
    InterestFilterChanged(String),
    NoOp,
}
