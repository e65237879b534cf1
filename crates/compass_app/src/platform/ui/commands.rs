use compass_core::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Prediction,
    Directory,
}

/// Named UI events, one per control interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SkillsInput(String),
    InterestSelected(String),
    SubmitButton,
    ChatButton,
    ChatInput(String),
    SendButton,
    ChatKey(Key),
    SearchInput(String),
    InterestFilter(String),
    Help,
    Quit,
}

pub const HELP_PREDICTION: &str = "\
commands:
  skills <a, b, c>   set the skills field
  interest <name>    select an interest
  submit             ask for job suggestions
  chat               open or close the chat panel
  type <text>        edit the chat input
  send | enter       send the chat input
  say <text>         type and press enter
  quit";

pub const HELP_DIRECTORY: &str = "\
commands:
  search [text]      search roles and skills
  filter [category]  filter by category (empty for all)
  quit";

/// Maps one input line to the events it stands for. Unknown commands and
/// commands of the other page yield `None`.
pub fn parse_line(page: Page, line: &str) -> Option<Vec<UiEvent>> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    let (command, rest) = match line.trim_start().split_once(' ') {
        Some((command, rest)) => (command, rest.to_string()),
        None => (line.trim(), String::new()),
    };

    let events = match (page, command) {
        (_, "help") => vec![UiEvent::Help],
        (_, "quit") | (_, "exit") => vec![UiEvent::Quit],
        (Page::Prediction, "skills") => vec![UiEvent::SkillsInput(rest)],
        (Page::Prediction, "interest") => vec![UiEvent::InterestSelected(rest.trim().to_string())],
        (Page::Prediction, "submit") => vec![UiEvent::SubmitButton],
        (Page::Prediction, "chat") => vec![UiEvent::ChatButton],
        (Page::Prediction, "type") => vec![UiEvent::ChatInput(rest)],
        (Page::Prediction, "send") => vec![UiEvent::SendButton],
        (Page::Prediction, "enter") => vec![UiEvent::ChatKey(Key::Enter)],
        (Page::Prediction, "say") => vec![UiEvent::ChatInput(rest), UiEvent::ChatKey(Key::Enter)],
        (Page::Directory, "search") => vec![UiEvent::SearchInput(rest)],
        (Page::Directory, "filter") => vec![UiEvent::InterestFilter(rest.trim().to_string())],
        _ => return None,
    };
    Some(events)
}
