use crate::{JobListing, Suggestion};

pub const PREDICTION_ALERT: &str = "An error occurred while processing your request.";
pub const CHAT_FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";
pub const JOBS_LOAD_ERROR: &str = "Error loading job listings. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PredictionViewModel {
    pub skills_input: String,
    pub interest: String,
    pub skills_error_visible: bool,
    pub loading_visible: bool,
    pub results_visible: bool,
    /// `Suggested jobs: a, b`; empty until the first result arrives.
    pub suggested_jobs: String,
    pub video_containers: Vec<VideoContainerView>,
    pub chat_button_visible: bool,
    pub chat: ChatViewModel,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoContainerView {
    pub heading: String,
    pub frames: Vec<VideoFrameView>,
}

impl VideoContainerView {
    pub(crate) fn from_suggestion(suggestion: &Suggestion) -> Self {
        Self {
            heading: format!("For {}", suggestion.role),
            frames: suggestion
                .video_links
                .iter()
                .map(|link| VideoFrameView {
                    src: link.clone(),
                    allow_fullscreen: true,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFrameView {
    pub src: String,
    pub allow_fullscreen: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatViewModel {
    pub open: bool,
    pub input: String,
    pub entries: Vec<ChatEntryView>,
    /// Index of the entry the panel is scrolled to.
    pub scroll_anchor: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEntryView {
    User(String),
    Bot(String),
    Loading,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectoryViewModel {
    pub loading: bool,
    pub listing: ListingView,
    pub interest_options: Vec<String>,
    pub search_term: String,
    pub selected_interest: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingView {
    Cards(Vec<JobCardView>),
    /// Single inline banner shown in place of the cards.
    Error(String),
}

impl Default for ListingView {
    fn default() -> Self {
        ListingView::Cards(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub title: String,
    pub category: String,
    pub skill_tags: Vec<String>,
}

impl JobCardView {
    pub(crate) fn from_listing(job: &JobListing) -> Self {
        Self {
            title: job.job_role.clone(),
            category: job.interest.clone(),
            skill_tags: job.skill_tags(),
        }
    }
}

pub(crate) fn suggested_jobs_line(suggestions: &[Suggestion]) -> String {
    let roles: Vec<&str> = suggestions.iter().map(|s| s.role.as_str()).collect();
    format!("Suggested jobs: {}", roles.join(", "))
}
