use compass_core::{
    update_prediction, ChatEntryView, Effect, Key, PredictionMsg, PredictionPage,
    CHAT_FALLBACK_REPLY,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    compass_logging::initialize_for_tests();
}

fn type_and_send(state: PredictionPage, text: &str) -> (PredictionPage, Vec<Effect>) {
    let (state, _) = update_prediction(state, PredictionMsg::ChatInputChanged(text.to_string()));
    update_prediction(state, PredictionMsg::ChatSendClicked)
}

fn request_id(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::SendChat { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("send effect")
}

#[test]
fn blank_message_is_ignored() {
    init_logging();
    let state = PredictionPage::new();
    let before = state.view();

    let (mut next, effects) = type_and_send(state, "   ");

    assert!(effects.is_empty());
    assert!(next.view().chat.entries.is_empty());
    assert_eq!(next.view().chat.input, "   ");
    assert_eq!(next.view().chat.entries, before.chat.entries);
    assert!(!next.consume_dirty());
}

#[test]
fn send_appends_user_message_and_indicator() {
    init_logging();
    let (state, effects) = type_and_send(PredictionPage::new(), "  Hello ");
    let chat = state.view().chat;

    assert_eq!(
        effects,
        vec![Effect::SendChat {
            request_id: 1,
            message: "Hello".to_string(),
        }]
    );
    assert_eq!(
        chat.entries,
        vec![ChatEntryView::User("Hello".to_string()), ChatEntryView::Loading]
    );
    assert_eq!(chat.input, "");
    assert_eq!(chat.scroll_anchor, Some(1));
    assert_eq!(state.chat().pending_requests(), 1);
}

#[test]
fn reply_replaces_indicator_with_bot_message() {
    init_logging();
    let (state, effects) = type_and_send(PredictionPage::new(), "Hello");
    let id = request_id(&effects);

    let (state, effects) = update_prediction(
        state,
        PredictionMsg::ChatReplied {
            request_id: id,
            text: "Hi there".to_string(),
        },
    );
    let chat = state.view().chat;

    assert!(effects.is_empty());
    assert_eq!(
        chat.entries,
        vec![
            ChatEntryView::User("Hello".to_string()),
            ChatEntryView::Bot("Hi there".to_string()),
        ]
    );
    assert_eq!(chat.scroll_anchor, Some(1));
    assert_eq!(state.chat().pending_requests(), 0);
}

#[test]
fn failure_appends_fallback_reply() {
    init_logging();
    let (state, effects) = type_and_send(PredictionPage::new(), "Hello");
    let id = request_id(&effects);

    let (state, _) = update_prediction(state, PredictionMsg::ChatFailed { request_id: id });

    assert_eq!(
        state.view().chat.entries,
        vec![
            ChatEntryView::User("Hello".to_string()),
            ChatEntryView::Bot(CHAT_FALLBACK_REPLY.to_string()),
        ]
    );
}

#[test]
fn enter_key_sends_and_other_keys_do_not() {
    init_logging();
    let (state, _) = update_prediction(
        PredictionPage::new(),
        PredictionMsg::ChatInputChanged("Salary?".to_string()),
    );
    let (state, effects) = update_prediction(state, PredictionMsg::ChatKeyPressed(Key::Other));
    assert!(effects.is_empty());
    assert_eq!(state.view().chat.input, "Salary?");

    let (state, effects) = update_prediction(state, PredictionMsg::ChatKeyPressed(Key::Enter));
    assert_eq!(effects.len(), 1);
    assert_eq!(state.view().chat.entries.len(), 2);
}

#[test]
fn overlapping_sends_resolve_independently_out_of_order() {
    init_logging();
    let (state, first) = type_and_send(PredictionPage::new(), "one");
    let (state, second) = type_and_send(state, "two");
    let (first_id, second_id) = (request_id(&first), request_id(&second));
    assert_ne!(first_id, second_id);
    assert_eq!(state.chat().pending_requests(), 2);

    let (state, _) = update_prediction(
        state,
        PredictionMsg::ChatReplied {
            request_id: second_id,
            text: "reply two".to_string(),
        },
    );
    assert_eq!(
        state.view().chat.entries,
        vec![
            ChatEntryView::User("one".to_string()),
            ChatEntryView::Loading,
            ChatEntryView::User("two".to_string()),
            ChatEntryView::Bot("reply two".to_string()),
        ]
    );

    let (state, _) = update_prediction(state, PredictionMsg::ChatFailed { request_id: first_id });
    let chat = state.view().chat;
    assert_eq!(
        chat.entries,
        vec![
            ChatEntryView::User("one".to_string()),
            ChatEntryView::User("two".to_string()),
            ChatEntryView::Bot("reply two".to_string()),
            ChatEntryView::Bot(CHAT_FALLBACK_REPLY.to_string()),
        ]
    );
    assert_eq!(chat.scroll_anchor, Some(3));
}

#[test]
fn chat_button_toggles_panel() {
    init_logging();
    let (state, _) = update_prediction(PredictionPage::new(), PredictionMsg::ChatToggled);
    assert!(state.view().chat.open);
    let (state, _) = update_prediction(state, PredictionMsg::ChatToggled);
    assert!(!state.view().chat.open);
}
