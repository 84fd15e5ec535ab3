use crate::session::Session;
use crate::ui::tui_state::UiState;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;

/// What the event loop should do after an event.
#[derive(Debug, PartialEq, Eq)]
pub enum UiMsg {
    Quit,
    Redraw,
}

const PAGE: usize = 10;

/// Applies one terminal event to the state, running a chat turn on Enter.
pub fn handle_event<G: Rng>(
    state: &mut UiState,
    session: &mut Session<G>,
    evt: Event,
) -> Option<UiMsg> {
    match evt {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, session, key),
        Event::Resize(..) => Some(UiMsg::Redraw),
        _ => None,
    }
}

fn handle_key<G: Rng>(
    state: &mut UiState,
    session: &mut Session<G>,
    key: KeyEvent,
) -> Option<UiMsg> {
    if key.code == KeyCode::Esc
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
    {
        return Some(UiMsg::Quit);
    }
    match key.code {
        KeyCode::PageUp => state.scroll_back += PAGE,
        KeyCode::PageDown => state.scroll_back = state.scroll_back.saturating_sub(PAGE),
        _ if state.closed => return None,
        KeyCode::Char(c) => state.input.push(c),
        KeyCode::Backspace => {
            state.input.pop();
        }
        KeyCode::Enter => submit(state, session),
        _ => return None,
    }
    Some(UiMsg::Redraw)
}

fn submit<G: Rng>(
    state: &mut UiState,
    session: &mut Session<G>,
) {
    let text = state.take_input();
    if text.trim().is_empty() {
        return;
    }
    state.push_user(text.clone());
    if let Some(reply) = session.handle(&text) {
        state.push_bot(reply);
    }
    state.status = session.corpus().summary();
    if !session.is_open() {
        state.closed = true;
    }
}
