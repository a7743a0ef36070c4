//! Keybindings for browse mode.
//!
//! Only list-browsing keys are mapped here; when a text field has focus
//! the raw key events are routed to the field instead.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextView,
    PrevView,
    MoveUp,
    MoveDown,
    OpenDetail,
    Close,
    NewItem,
    ClearFilters,
    FocusFilters,
    Refresh,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent {
        code, modifiers, ..
    } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Tab => Some(Action::NextView),
        KeyCode::BackTab => Some(Action::PrevView),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter => Some(Action::OpenDetail),
        KeyCode::Esc => Some(Action::Close),
        KeyCode::Char('n') => Some(Action::NewItem),
        KeyCode::Char('c') => Some(Action::ClearFilters),
        KeyCode::Char('/') => Some(Action::FocusFilters),
        _ => None,
    }
}
