use std::sync::Arc;

use crate::filter::{distinct_interests, filter_jobs, FilterCriteria};
use crate::skills::split_skills;
use crate::view_model::{
    suggested_jobs_line, ChatEntryView, ChatViewModel, DirectoryViewModel, JobCardView,
    ListingView, PredictionViewModel, VideoContainerView, JOBS_LOAD_ERROR,
};
use crate::{ChatMessage, ChatRequestId, JobListing, PredictionRequest, Suggestion};

/// Rendered chat entries; the panel keeps nothing besides these.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ChatEntry {
    Message(ChatMessage),
    Loading(ChatRequestId),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatPanel {
    open: bool,
    input: String,
    entries: Vec<ChatEntry>,
    scroll_anchor: Option<usize>,
    next_request_id: ChatRequestId,
}

impl ChatPanel {
    fn append(&mut self, entry: ChatEntry) {
        self.entries.push(entry);
        self.scroll_anchor = Some(self.entries.len() - 1);
    }

    fn remove_loading(&mut self, request_id: ChatRequestId) {
        self.entries
            .retain(|entry| *entry != ChatEntry::Loading(request_id));
        if let Some(anchor) = self.scroll_anchor {
            if anchor >= self.entries.len() {
                self.scroll_anchor = self.entries.len().checked_sub(1);
            }
        }
    }

    /// Number of indicators still waiting for a reply.
    pub fn pending_requests(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, ChatEntry::Loading(_)))
            .count()
    }

    fn view(&self) -> ChatViewModel {
        ChatViewModel {
            open: self.open,
            input: self.input.clone(),
            entries: self
                .entries
                .iter()
                .map(|entry| match entry {
                    ChatEntry::Message(msg) if msg.is_user => ChatEntryView::User(msg.text.clone()),
                    ChatEntry::Message(msg) => ChatEntryView::Bot(msg.text.clone()),
                    ChatEntry::Loading(_) => ChatEntryView::Loading,
                })
                .collect(),
            scroll_anchor: self.scroll_anchor,
        }
    }
}

/// State of the prediction-and-chat page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PredictionPage {
    skills_input: String,
    interest: String,
    skills_error_visible: bool,
    loading: bool,
    suggestions: Vec<Suggestion>,
    results_visible: bool,
    chat_button_visible: bool,
    chat: ChatPanel,
    dirty: bool,
}

impl PredictionPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> PredictionViewModel {
        let (suggested_jobs, video_containers) = if self.results_visible {
            (
                suggested_jobs_line(&self.suggestions),
                self.suggestions
                    .iter()
                    .map(VideoContainerView::from_suggestion)
                    .collect(),
            )
        } else {
            (String::new(), Vec::new())
        };

        PredictionViewModel {
            skills_input: self.skills_input.clone(),
            interest: self.interest.clone(),
            skills_error_visible: self.skills_error_visible,
            loading_visible: self.loading,
            results_visible: self.results_visible,
            suggested_jobs,
            video_containers,
            chat_button_visible: self.chat_button_visible,
            chat: self.chat.view(),
            dirty: self.dirty,
        }
    }

    pub fn chat(&self) -> &ChatPanel {
        &self.chat
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_skills_input(&mut self, raw: String) {
        self.skills_input = raw;
    }

    pub(crate) fn set_interest(&mut self, interest: String) {
        self.interest = interest;
    }

    pub(crate) fn skills_input(&self) -> &str {
        &self.skills_input
    }

    pub(crate) fn show_skills_error(&mut self) {
        self.skills_error_visible = true;
        self.dirty = true;
    }

    /// Hides the error, shows the spinner and builds the request body.
    pub(crate) fn begin_prediction(&mut self) -> PredictionRequest {
        self.skills_error_visible = false;
        self.loading = true;
        self.dirty = true;
        PredictionRequest {
            skills: split_skills(&self.skills_input),
            interest: self.interest.clone(),
        }
    }

    pub(crate) fn show_results(&mut self, suggestions: Vec<Suggestion>) {
        self.loading = false;
        self.suggestions = suggestions;
        self.results_visible = true;
        self.chat_button_visible = true;
        self.dirty = true;
    }

    pub(crate) fn fail_prediction(&mut self) {
        self.loading = false;
        self.dirty = true;
    }

    pub(crate) fn toggle_chat(&mut self) {
        self.chat.open = !self.chat.open;
        self.dirty = true;
    }

    pub(crate) fn set_chat_input(&mut self, text: String) {
        self.chat.input = text;
    }

    /// Posts the current input as a user message and queues its indicator.
    /// Returns `None` when the trimmed input is empty.
    pub(crate) fn take_chat_message(&mut self) -> Option<(ChatRequestId, String)> {
        let message = self.chat.input.trim().to_owned();
        if message.is_empty() {
            return None;
        }

        self.chat.next_request_id += 1;
        let request_id = self.chat.next_request_id;
        self.chat.append(ChatEntry::Message(ChatMessage::user(message.clone())));
        self.chat.input.clear();
        self.chat.append(ChatEntry::Loading(request_id));
        self.dirty = true;
        Some((request_id, message))
    }

    pub(crate) fn resolve_chat(&mut self, request_id: ChatRequestId, reply: String) {
        self.chat.remove_loading(request_id);
        self.chat.append(ChatEntry::Message(ChatMessage::bot(reply)));
        self.dirty = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotStarted,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Listing {
    Cards(Vec<JobListing>),
    Error,
}

/// State of the job directory page.
///
/// `jobs` is written once when the listing arrives and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDirectory {
    load_state: LoadState,
    jobs: Arc<[JobListing]>,
    interests: Vec<String>,
    criteria: FilterCriteria,
    listing: Listing,
    dirty: bool,
}

impl Default for JobDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl JobDirectory {
    pub fn new() -> Self {
        Self {
            load_state: LoadState::NotStarted,
            jobs: Arc::from(Vec::new()),
            interests: Vec::new(),
            criteria: FilterCriteria::default(),
            listing: Listing::Cards(Vec::new()),
            dirty: false,
        }
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// The cached listing as loaded; never filtered in place.
    pub fn jobs(&self) -> &[JobListing] {
        &self.jobs
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn view(&self) -> DirectoryViewModel {
        let listing = match &self.listing {
            Listing::Cards(jobs) => {
                ListingView::Cards(jobs.iter().map(JobCardView::from_listing).collect())
            }
            Listing::Error => ListingView::Error(JOBS_LOAD_ERROR.to_string()),
        };
        DirectoryViewModel {
            loading: self.load_state == LoadState::Loading,
            listing,
            interest_options: self.interests.clone(),
            search_term: self.criteria.term.clone(),
            selected_interest: self.criteria.interest.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn start_loading(&mut self) {
        self.load_state = LoadState::Loading;
        self.dirty = true;
    }

    pub(crate) fn populate(&mut self, jobs: Vec<JobListing>) {
        self.jobs = Arc::from(jobs);
        self.interests = distinct_interests(&self.jobs);
        self.listing = Listing::Cards(self.jobs.to_vec());
        self.load_state = LoadState::Loaded;
        self.dirty = true;
    }

    pub(crate) fn fail_loading(&mut self) {
        self.listing = Listing::Error;
        self.load_state = LoadState::Failed;
        self.dirty = true;
    }

    pub(crate) fn set_search_term(&mut self, term: String) {
        self.criteria.term = term;
        self.refilter();
    }

    pub(crate) fn set_interest_filter(&mut self, interest: String) {
        self.criteria.interest = if interest.is_empty() {
            None
        } else {
            Some(interest)
        };
        self.refilter();
    }

    fn refilter(&mut self) {
        self.listing = Listing::Cards(filter_jobs(&self.jobs, &self.criteria));
        self.dirty = true;
    }
}
