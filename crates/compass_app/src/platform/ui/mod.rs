//! Page views and the line-driven UI events.
pub mod commands;
pub mod html;
pub mod render;

use compass_core::{DirectoryViewModel, PredictionViewModel};

pub use commands::{parse_line, Page, UiEvent, HELP_DIRECTORY, HELP_PREDICTION};
pub use html::HtmlSnapshotView;
pub use render::TerminalView;

/// Where view models end up. Controllers never touch a display directly.
pub trait PageView {
    fn render_prediction(&mut self, view: &PredictionViewModel) -> anyhow::Result<()>;

    fn render_directory(&mut self, view: &DirectoryViewModel) -> anyhow::Result<()>;

    /// Blocking, user-visible notice.
    fn alert(&mut self, message: &str) -> anyhow::Result<()>;
}
