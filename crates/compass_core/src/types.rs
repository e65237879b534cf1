use crate::skills::split_skills;

/// Identifies one chat send so its loading indicator can be resolved.
pub type ChatRequestId = u64;

/// Body of a prediction request, built once per submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRequest {
    pub skills: Vec<String>,
    pub interest: String,
}

/// One suggested role with its reference videos, in backend order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub role: String,
    pub video_links: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub is_user: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
        }
    }
}

/// A job posting as served by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListing {
    pub job_role: String,
    pub interest: String,
    /// Raw comma-separated skills; see [`JobListing::skill_tags`].
    pub skills: String,
}

impl JobListing {
    pub fn new(
        job_role: impl Into<String>,
        interest: impl Into<String>,
        skills: impl Into<String>,
    ) -> Self {
        Self {
            job_role: job_role.into(),
            interest: interest.into(),
            skills: skills.into(),
        }
    }

    pub fn skill_tags(&self) -> Vec<String> {
        split_skills(&self.skills)
    }
}

/// Key pressed inside the chat input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}
