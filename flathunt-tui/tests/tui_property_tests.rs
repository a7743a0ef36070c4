use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use flathunt_tui::config::{ThemeConfig, TuiConfig};
use flathunt_tui::keys::{map_key, Action};
use flathunt_tui::nav::View;
use proptest::prelude::*;

fn base_config() -> TuiConfig {
    TuiConfig {
        api_base_url: "http://localhost:3000".to_string(),
        request_timeout_ms: 5_000,
        tick_interval_ms: 100,
        log_path: "tmp/flathunt.log".into(),
        state_path: "tmp/flathunt-state.json".into(),
        theme: ThemeConfig {
            name: "blueprint".to_string(),
        },
    }
}

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

#[test]
fn config_accepts_a_complete_configuration() {
    assert!(base_config().validate().is_ok());
}

#[test]
fn config_rejects_empty_base_url() {
    let mut config = base_config();
    config.api_base_url = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_zero_intervals() {
    let mut config = base_config();
    config.request_timeout_ms = 0;
    assert!(config.validate().is_err());

    let mut config = base_config();
    config.tick_interval_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn config_requires_a_known_theme() {
    let mut config = base_config();
    config.theme.name = "synthwave".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn config_requires_paths() {
    let mut config = base_config();
    config.log_path = "".into();
    assert!(config.validate().is_err());

    let mut config = base_config();
    config.state_path = "".into();
    assert!(config.validate().is_err());
}

#[test]
fn quit_and_refresh_bindings() {
    assert_eq!(
        map_key(press(KeyCode::Char('q'), KeyModifiers::NONE)),
        Some(Action::Quit)
    );
    assert_eq!(
        map_key(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Action::Quit)
    );
    assert_eq!(
        map_key(press(KeyCode::Char('r'), KeyModifiers::CONTROL)),
        Some(Action::Refresh)
    );
}

#[test]
fn movement_bindings_cover_vim_and_arrows() {
    for code in [KeyCode::Char('j'), KeyCode::Down] {
        assert_eq!(
            map_key(press(code, KeyModifiers::NONE)),
            Some(Action::MoveDown)
        );
    }
    for code in [KeyCode::Char('k'), KeyCode::Up] {
        assert_eq!(
            map_key(press(code, KeyModifiers::NONE)),
            Some(Action::MoveUp)
        );
    }
}

proptest! {
    /// View navigation cycles: stepping forward through every view
    /// returns to the start, and previous() undoes next().
    #[test]
    fn view_navigation_cycles(start_index in 0usize..2) {
        let start = View::all()[start_index];

        let mut current = start;
        for _ in 0..View::all().len() {
            current = current.next();
        }
        prop_assert_eq!(current, start);

        prop_assert_eq!(start.next().previous(), start);
    }

    /// Control chords other than c/r never map to an action.
    #[test]
    fn unmapped_control_chords_are_ignored(ch in proptest::char::range('a', 'z')) {
        prop_assume!(ch != 'c' && ch != 'r');
        let action = map_key(press(KeyCode::Char(ch), KeyModifiers::CONTROL));
        prop_assert_eq!(action, None);
    }
}
