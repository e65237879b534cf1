use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use compass_core::{
    update_directory, update_prediction, DirectoryMsg, Effect, JobDirectory, PredictionMsg,
    PredictionPage,
};
use compass_engine::SnapshotWriter;
use compass_logging::{compass_debug, compass_info, compass_warn};

use super::cli::Cli;
use super::config::load_config;
use super::effects::EffectRunner;
use super::logging;
use super::ui::{
    parse_line, HtmlSnapshotView, Page, PageView, TerminalView, UiEvent, HELP_DIRECTORY,
    HELP_PREDICTION,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageMsg {
    Prediction(PredictionMsg),
    Directory(DirectoryMsg),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Control interaction read from the input.
    Ui(PageMsg),
    /// Completion of one engine request.
    Engine(PageMsg),
    Help,
    Unknown(String),
    /// Input reached end of file.
    InputClosed,
    Quit,
}

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    logging::initialize(cli.log, cli.verbose);

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(dir) = cli.snapshot_dir {
        config.snapshot_dir = Some(dir);
    }
    let page = cli.page.page();
    compass_info!("Starting {:?} page", page);

    let (msg_tx, msg_rx) = mpsc::channel::<AppMsg>();
    let runner = EffectRunner::new(config.client_settings(), msg_tx.clone())?;

    let mut views: Vec<Box<dyn PageView>> = vec![Box::new(TerminalView::new(io::stdout()))];
    if let Some(dir) = &config.snapshot_dir {
        compass_info!("Writing HTML snapshots to {:?}", dir);
        views.push(Box::new(HtmlSnapshotView::new(SnapshotWriter::new(dir))));
    }

    let mut controller = Controller::new(page);
    println!("{}", help_text(page));
    controller.render(&mut views);

    if page == Page::Directory {
        let _ = msg_tx.send(AppMsg::Ui(PageMsg::Directory(DirectoryMsg::PageLoaded)));
    }
    spawn_input_reader(page, msg_tx);

    // Requests started but not yet answered; piped input waits for them.
    let mut pending = 0usize;
    let mut input_closed = false;
    while let Ok(msg) = msg_rx.recv() {
        match msg {
            AppMsg::Quit => break,
            AppMsg::InputClosed => input_closed = true,
            AppMsg::Help => println!("{}", help_text(page)),
            AppMsg::Unknown(line) => println!("unknown command: {line} (try `help`)"),
            AppMsg::Ui(msg) => {
                pending += step(&mut controller, &runner, &mut views, msg);
            }
            AppMsg::Engine(msg) => {
                pending = pending.saturating_sub(1);
                pending += step(&mut controller, &runner, &mut views, msg);
            }
        }
        if input_closed && pending == 0 {
            break;
        }
    }

    compass_info!("Shutting down");
    Ok(())
}

/// Applies one message, starts its effects and re-renders. Returns the
/// number of requests started.
fn step(
    controller: &mut Controller,
    runner: &EffectRunner,
    views: &mut [Box<dyn PageView>],
    msg: PageMsg,
) -> usize {
    let effects = controller.dispatch(msg);
    let dispatched = runner.run(effects);
    for alert in &dispatched.alerts {
        for view in views.iter_mut() {
            if let Err(err) = view.alert(alert) {
                compass_warn!("Failed to show alert: {}", err);
            }
        }
    }
    if controller.consume_dirty() {
        controller.render(views);
    }
    dispatched.started
}

fn help_text(page: Page) -> &'static str {
    match page {
        Page::Prediction => HELP_PREDICTION,
        Page::Directory => HELP_DIRECTORY,
    }
}

fn spawn_input_reader(page: Page, msg_tx: mpsc::Sender<AppMsg>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            let msgs = match parse_line(page, &line) {
                Some(events) => events.into_iter().map(to_app_msg).collect(),
                None if line.trim().is_empty() => continue,
                None => vec![AppMsg::Unknown(line)],
            };
            for msg in msgs {
                if msg_tx.send(msg).is_err() {
                    return;
                }
            }
        }
        let _ = msg_tx.send(AppMsg::InputClosed);
    });
}

fn to_app_msg(event: UiEvent) -> AppMsg {
    match event {
        UiEvent::SkillsInput(raw) => AppMsg::Ui(PageMsg::Prediction(PredictionMsg::SkillsChanged(raw))),
        UiEvent::InterestSelected(interest) => {
            AppMsg::Ui(PageMsg::Prediction(PredictionMsg::InterestChanged(interest)))
        }
        UiEvent::SubmitButton => AppMsg::Ui(PageMsg::Prediction(PredictionMsg::SubmitClicked)),
        UiEvent::ChatButton => AppMsg::Ui(PageMsg::Prediction(PredictionMsg::ChatToggled)),
        UiEvent::ChatInput(text) => {
            AppMsg::Ui(PageMsg::Prediction(PredictionMsg::ChatInputChanged(text)))
        }
        UiEvent::SendButton => AppMsg::Ui(PageMsg::Prediction(PredictionMsg::ChatSendClicked)),
        UiEvent::ChatKey(key) => AppMsg::Ui(PageMsg::Prediction(PredictionMsg::ChatKeyPressed(key))),
        UiEvent::SearchInput(term) => AppMsg::Ui(PageMsg::Directory(DirectoryMsg::SearchChanged(term))),
        UiEvent::InterestFilter(interest) => {
            AppMsg::Ui(PageMsg::Directory(DirectoryMsg::InterestFilterChanged(interest)))
        }
        UiEvent::Help => AppMsg::Help,
        UiEvent::Quit => AppMsg::Quit,
    }
}

/// The one page controller this process drives.
enum Controller {
    Prediction(PredictionPage),
    Directory(JobDirectory),
}

impl Controller {
    fn new(page: Page) -> Self {
        match page {
            Page::Prediction => Controller::Prediction(PredictionPage::new()),
            Page::Directory => Controller::Directory(JobDirectory::new()),
        }
    }

    fn dispatch(&mut self, msg: PageMsg) -> Vec<Effect> {
        match (self, msg) {
            (Controller::Prediction(page), PageMsg::Prediction(msg)) => {
                let state = std::mem::take(page);
                let (state, effects) = update_prediction(state, msg);
                *page = state;
                effects
            }
            (Controller::Directory(directory), PageMsg::Directory(msg)) => {
                let state = std::mem::take(directory);
                let (state, effects) = update_directory(state, msg);
                *directory = state;
                effects
            }
            (_, msg) => {
                compass_debug!("Ignoring message for another page: {:?}", msg);
                Vec::new()
            }
        }
    }

    fn consume_dirty(&mut self) -> bool {
        match self {
            Controller::Prediction(page) => page.consume_dirty(),
            Controller::Directory(directory) => directory.consume_dirty(),
        }
    }

    fn render(&self, views: &mut [Box<dyn PageView>]) {
        for view in views.iter_mut() {
            let result = match self {
                Controller::Prediction(page) => view.render_prediction(&page.view()),
                Controller::Directory(directory) => view.render_directory(&directory.view()),
            };
            if let Err(err) = result {
                compass_warn!("Render failed: {}", err);
            }
        }
    }
}
