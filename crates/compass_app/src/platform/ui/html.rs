//! HTML rendering of the two pages, written as snapshot files.
//!
//! Markup keeps the ids and classes the page stylesheet expects
//! (`video-container`, `job-card`, `skill-tag`, `alert alert-danger`).
//! All text and attribute values are escaped.

use std::fmt::Write as _;

use chrono::Utc;
use compass_core::{
    ChatEntryView, DirectoryViewModel, JobCardView, ListingView, PredictionViewModel,
    VideoContainerView,
};
use compass_engine::SnapshotWriter;
use compass_logging::compass_debug;

use super::PageView;

pub const PREDICTION_PAGE: &str = "predict.html";
pub const DIRECTORY_PAGE: &str = "jobs.html";

/// Writes every render as a standalone HTML page into a snapshot directory.
pub struct HtmlSnapshotView {
    writer: SnapshotWriter,
}

impl HtmlSnapshotView {
    pub fn new(writer: SnapshotWriter) -> Self {
        Self { writer }
    }
}

impl PageView for HtmlSnapshotView {
    fn render_prediction(&mut self, view: &PredictionViewModel) -> anyhow::Result<()> {
        let html = document("Career Compass", &render_prediction_body(view));
        let path = self.writer.write(PREDICTION_PAGE, &html)?;
        compass_debug!("Wrote snapshot {:?}", path);
        Ok(())
    }

    fn render_directory(&mut self, view: &DirectoryViewModel) -> anyhow::Result<()> {
        let html = document("Job Listings", &render_directory_body(view));
        let path = self.writer.write(DIRECTORY_PAGE, &html)?;
        compass_debug!("Wrote snapshot {:?}", path);
        Ok(())
    }

    // Alerts are modal; a static page has no place for them.
    fn alert(&mut self, _message: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"generated\" content=\"{generated}\">\n<title>{title}</title>\n\
         </head>\n<body>\n{body}</body>\n</html>\n",
        generated = Utc::now().to_rfc3339(),
        title = escape(title),
    )
}

pub fn render_prediction_body(view: &PredictionViewModel) -> String {
    let mut html = String::new();
    let _ = writeln!(
        html,
        "<input id=\"skillsInput\" value=\"{}\">",
        escape(&view.skills_input)
    );
    let _ = writeln!(
        html,
        "<input id=\"interest\" value=\"{}\">",
        escape(&view.interest)
    );
    let _ = writeln!(
        html,
        "<div id=\"skillsError\" class=\"error\"{}>Please enter at least one skill.</div>",
        display(view.skills_error_visible)
    );
    let _ = writeln!(
        html,
        "<div id=\"loadingSpinner\" class=\"spinner\"{}></div>",
        display(view.loading_visible)
    );

    let _ = writeln!(html, "<div id=\"results\"{}>", display(view.results_visible));
    let _ = writeln!(
        html,
        "<p id=\"suggestedJobs\">{}</p>",
        escape(&view.suggested_jobs)
    );
    html.push_str("<div id=\"references\">\n");
    for container in &view.video_containers {
        render_video_container(&mut html, container);
    }
    html.push_str("</div>\n</div>\n");

    let _ = writeln!(
        html,
        "<button id=\"chatButton\"{}>Chat with a career counselor</button>",
        display(view.chat_button_visible)
    );

    let _ = writeln!(html, "<div id=\"chat-panel\"{}>", display(view.chat.open));
    html.push_str("<div id=\"chat-box\">\n");
    for entry in &view.chat.entries {
        match entry {
            ChatEntryView::User(text) => {
                let _ = writeln!(
                    html,
                    "<div class=\"message user-message\">{}</div>",
                    escape(text)
                );
            }
            ChatEntryView::Bot(text) => {
                let _ = writeln!(
                    html,
                    "<div class=\"message bot-message\">{}</div>",
                    escape(text)
                );
            }
            ChatEntryView::Loading => {
                html.push_str(
                    "<div class=\"message bot-message loading-message\">\
                     <span class=\"loading\"></span><span class=\"loading\"></span>\
                     <span class=\"loading\"></span></div>\n",
                );
            }
        }
    }
    html.push_str("</div>\n");
    let _ = writeln!(
        html,
        "<input id=\"message-input\" value=\"{}\">",
        escape(&view.chat.input)
    );
    html.push_str("</div>\n");
    html
}

fn render_video_container(html: &mut String, container: &VideoContainerView) {
    html.push_str("<div class=\"video-container\">\n");
    let _ = writeln!(html, "<h4>{}</h4>", escape(&container.heading));
    html.push_str("<div class=\"row\">\n");
    for frame in &container.frames {
        let _ = writeln!(
            html,
            "<div class=\"col-md-6\"><iframe src=\"{}\" frameborder=\"0\"{}></iframe></div>",
            escape(&frame.src),
            if frame.allow_fullscreen {
                " allowfullscreen"
            } else {
                ""
            }
        );
    }
    html.push_str("</div>\n</div>\n");
}

pub fn render_directory_body(view: &DirectoryViewModel) -> String {
    let mut html = String::new();
    let _ = writeln!(
        html,
        "<input id=\"searchInput\" value=\"{}\">",
        escape(&view.search_term)
    );

    html.push_str("<select id=\"interestFilter\">\n<option value=\"\">All categories</option>\n");
    for interest in &view.interest_options {
        let selected = view.selected_interest.as_deref() == Some(interest.as_str());
        let _ = writeln!(
            html,
            "<option value=\"{value}\"{selected}>{value}</option>",
            value = escape(interest),
            selected = if selected { " selected" } else { "" }
        );
    }
    html.push_str("</select>\n");

    html.push_str("<div id=\"jobListings\">\n");
    match &view.listing {
        ListingView::Cards(cards) => {
            for card in cards {
                render_job_card(&mut html, card);
            }
        }
        ListingView::Error(message) => {
            let _ = writeln!(
                html,
                "<div class=\"alert alert-danger\">{}</div>",
                escape(message)
            );
        }
    }
    html.push_str("</div>\n");
    html
}

fn render_job_card(html: &mut String, card: &JobCardView) {
    html.push_str("<div class=\"job-card\">\n");
    let _ = writeln!(html, "<h3 class=\"job-title\">{}</h3>", escape(&card.title));
    let _ = writeln!(
        html,
        "<div class=\"job-category\">{}</div>",
        escape(&card.category)
    );
    html.push_str("<div class=\"job-skills\">");
    for tag in &card.skill_tags {
        let _ = write!(html, "<span class=\"skill-tag\">{}</span>", escape(tag));
    }
    html.push_str("</div>\n</div>\n");
}

fn display(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        " style=\"display: none\""
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
