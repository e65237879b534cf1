use std::io::Write;

use compass_core::{ChatEntryView, DirectoryViewModel, ListingView, PredictionViewModel};

use super::PageView;

const SKILLS_ERROR: &str = "Please enter at least one skill.";

/// Plain-text view written to any sink, stdout in the binary.
pub struct TerminalView<W: Write> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PageView for TerminalView<W> {
    fn render_prediction(&mut self, view: &PredictionViewModel) -> anyhow::Result<()> {
        let out = &mut self.out;
        writeln!(out, "---")?;
        writeln!(out, "skills: {} | interest: {}", view.skills_input, view.interest)?;
        if view.skills_error_visible {
            writeln!(out, "! {SKILLS_ERROR}")?;
        }
        if view.loading_visible {
            writeln!(out, "… looking for matching roles")?;
        }
        if view.results_visible {
            writeln!(out, "{}", view.suggested_jobs)?;
            for container in &view.video_containers {
                writeln!(out, "  {}", container.heading)?;
                for frame in &container.frames {
                    writeln!(out, "    ▶ {}", frame.src)?;
                }
            }
        }
        if view.chat_button_visible && !view.chat.open {
            writeln!(out, "[chat] type `chat` to talk to a career counselor")?;
        }
        if view.chat.open {
            writeln!(out, "chat:")?;
            for entry in &view.chat.entries {
                match entry {
                    ChatEntryView::User(text) => writeln!(out, "  you: {text}")?,
                    ChatEntryView::Bot(text) => writeln!(out, "  bot: {text}")?,
                    ChatEntryView::Loading => writeln!(out, "  bot: ...")?,
                }
            }
        }
        out.flush()?;
        Ok(())
    }

    fn render_directory(&mut self, view: &DirectoryViewModel) -> anyhow::Result<()> {
        let out = &mut self.out;
        writeln!(out, "---")?;
        if view.loading {
            writeln!(out, "… loading job listings")?;
        }
        if !view.interest_options.is_empty() {
            let selected = view.selected_interest.as_deref().unwrap_or("all");
            writeln!(
                out,
                "categories: {} (showing {selected})",
                view.interest_options.join(", ")
            )?;
        }
        match &view.listing {
            ListingView::Cards(cards) => {
                for card in cards {
                    writeln!(
                        out,
                        "{} [{}] {}",
                        card.title,
                        card.category,
                        card.skill_tags.join(" · ")
                    )?;
                }
                if cards.is_empty() && !view.loading {
                    writeln!(out, "(no matching jobs)")?;
                }
            }
            ListingView::Error(message) => writeln!(out, "! {message}")?,
        }
        out.flush()?;
        Ok(())
    }

    fn alert(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.out, "[alert] {message}")?;
        self.out.flush()?;
        Ok(())
    }
}
