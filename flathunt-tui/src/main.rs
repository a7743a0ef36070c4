//! flathunt TUI entry point.

use flathunt_tui::api_client::ApiClient;
use flathunt_tui::config::TuiConfig;
use flathunt_tui::error::TuiError;
use flathunt_tui::events::{ApiOutcome, AppEvent};
use flathunt_tui::fetch;
use flathunt_tui::keys::{map_key, Action};
use flathunt_tui::nav::View;
use flathunt_tui::persistence::{self, PersistedState};
use flathunt_tui::state::{App, FilterField, ListingsFocus};
use flathunt_tui::views::render_view;
use crossterm::{
    event::{self, Event as CrosstermEvent, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    init_tracing(&config)?;

    let api = ApiClient::new(&config)?;
    let mut app = App::new(config);
    if let Ok(Some(state)) = persistence::load(&app.config.state_path) {
        app.active_view = state.active_view;
        app.listings.filter_inputs.set_filter(&state.filters);
    }

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(256);
    spawn_input_reader(event_tx.clone());

    // Initial fetch with whatever filter state survived the restart.
    let ticket = app.listings.commit_now();
    fetch::spawn_listings_fetch(api.clone(), ticket.seq, ticket.query, event_tx.clone());

    let tick_rate = Duration::from_millis(app.config.tick_interval_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                let _ = event_tx.send(AppEvent::Tick).await;
            }
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, &api, &event_tx, event) {
                    break;
                }
            }
        }
    }

    let persisted = PersistedState {
        active_view: app.active_view,
        filters: app.listings.filter(),
    };
    let _ = persistence::save(&app.config.state_path, &persisted);

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<AppEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                match evt {
                    CrosstermEvent::Key(key) => {
                        let _ = sender.blocking_send(AppEvent::Input(key));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        let _ = sender.blocking_send(AppEvent::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
    });
}

fn init_tracing(config: &TuiConfig) -> Result<(), TuiError> {
    if let Some(parent) = config.log_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::File::create(&config.log_path)?;

    let filter = EnvFilter::try_from_env("FLATHUNT_LOG_LEVEL")
        .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn,rustls=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Returns true when the application should exit.
fn handle_event(
    app: &mut App,
    api: &ApiClient,
    sender: &mpsc::Sender<AppEvent>,
    event: AppEvent,
) -> bool {
    match event {
        AppEvent::Input(key) => return handle_key(app, api, sender, key),
        AppEvent::Tick => {
            if let Some(ticket) = app.listings.poll_filter_commit(Instant::now()) {
                fetch::spawn_listings_fetch(api.clone(), ticket.seq, ticket.query, sender.clone());
            }
        }
        AppEvent::Resize { .. } => {}
        AppEvent::Api(outcome) => handle_api(app, api, sender, outcome),
    }
    false
}

fn handle_api(
    app: &mut App,
    api: &ApiClient,
    sender: &mpsc::Sender<AppEvent>,
    outcome: ApiOutcome,
) {
    match outcome {
        ApiOutcome::Listings { seq, result } => app.listings.apply_listings(seq, result),
        ApiOutcome::Detail { id, result } => app.listings.apply_detail(id, result),
        ApiOutcome::Created { result } => {
            if let Some(ticket) = app.apply_create(result) {
                fetch::spawn_listings_fetch(api.clone(), ticket.seq, ticket.query, sender.clone());
            }
        }
    }
}

fn handle_key(
    app: &mut App,
    api: &ApiClient,
    sender: &mpsc::Sender<AppEvent>,
    key: crossterm::event::KeyEvent,
) -> bool {
    // A modal alert blocks everything until dismissed.
    if app.modal.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.modal = None;
        }
        return false;
    }

    match app.active_view {
        View::Listings => handle_listings_key(app, api, sender, key),
        View::NewApartment => handle_form_key(app, api, sender, key),
    }
}

fn handle_listings_key(
    app: &mut App,
    api: &ApiClient,
    sender: &mpsc::Sender<AppEvent>,
    key: crossterm::event::KeyEvent,
) -> bool {
    match app.listings.focus {
        ListingsFocus::Filter(field) => {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => app.listings.focus = ListingsFocus::List,
                KeyCode::Tab => app.listings.focus = ListingsFocus::Filter(field.next()),
                KeyCode::BackTab => app.listings.focus = ListingsFocus::Filter(field.previous()),
                _ => app.listings.handle_filter_key(field, key, Instant::now()),
            }
            false
        }
        ListingsFocus::List => {
            let Some(action) = map_key(key) else {
                return false;
            };
            match action {
                Action::Quit => return true,
                Action::NextView => app.active_view = app.active_view.next(),
                Action::PrevView => app.active_view = app.active_view.previous(),
                Action::MoveDown => app.listings.select_next(),
                Action::MoveUp => app.listings.select_previous(),
                Action::OpenDetail => {
                    if let Some(id) = app.listings.open_detail() {
                        fetch::spawn_detail_fetch(api.clone(), id, sender.clone());
                    }
                }
                Action::Close => {
                    if app.listings.selected.is_some() {
                        app.listings.close_detail();
                    }
                }
                Action::NewItem => app.active_view = View::NewApartment,
                Action::ClearFilters => app.listings.clear_filters(Instant::now()),
                Action::FocusFilters => {
                    app.listings.focus = ListingsFocus::Filter(FilterField::UnitName);
                }
                Action::Refresh => {
                    let ticket = app.listings.commit_now();
                    fetch::spawn_listings_fetch(
                        api.clone(),
                        ticket.seq,
                        ticket.query,
                        sender.clone(),
                    );
                }
            }
            false
        }
    }
}

fn handle_form_key(
    app: &mut App,
    api: &ApiClient,
    sender: &mpsc::Sender<AppEvent>,
    key: crossterm::event::KeyEvent,
) -> bool {
    use crossterm::event::KeyModifiers;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
        if let Some(request) = app.create_form.submit() {
            fetch::spawn_create(api.clone(), request, sender.clone());
        }
        return false;
    }

    match key.code {
        KeyCode::Esc => app.active_view = View::Listings,
        KeyCode::Tab => app.create_form.focus_next(),
        KeyCode::BackTab => app.create_form.focus_previous(),
        _ => app.create_form.handle_key(key),
    }
    false
}
