//! View rendering dispatch.

pub mod helpers;
pub mod listings;
pub mod new_apartment;

use crate::nav::View;
use crate::notifications::NotificationLevel;
use crate::state::{App, ListingsFocus};
use crate::views::helpers::centered_rect;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);

    match app.active_view {
        View::Listings => listings::render(f, app, layout[1]),
        View::NewApartment => new_apartment::render(f, app, layout[1]),
    }

    render_footer(f, app, layout[2]);

    if let Some(modal) = &app.modal {
        render_modal(f, app, &modal.title, &modal.message);
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let title = format!("flathunt | {}", app.active_view.title());
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        title,
        Style::default().fg(app.theme.primary),
    ));
    f.render_widget(block, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = match (app.active_view, app.listings.focus) {
        (View::Listings, ListingsFocus::Filter(_)) => {
            "type to filter • Tab next field • Esc/Enter done"
        }
        (View::Listings, ListingsFocus::List) => {
            "j/k move • Enter details • / filter • c clear • n new • Tab view • q quit"
        }
        (View::NewApartment, _) => "Tab fields • Ctrl-S submit • Esc back to listings",
    };

    let (text, style) = if let Some(note) = app.notifications.last() {
        let label = match note.level {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Error => "ERROR",
            NotificationLevel::Success => "SUCCESS",
        };
        let color = match note.level {
            NotificationLevel::Info => app.theme.info,
            NotificationLevel::Warning => app.theme.warning,
            NotificationLevel::Error => app.theme.error,
            NotificationLevel::Success => app.theme.success,
        };
        (
            format!("{}: {}", label, note.message),
            Style::default().fg(color),
        )
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };

    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}

fn render_modal(f: &mut Frame<'_>, app: &App, title: &str, message: &str) {
    let area = centered_rect(50, 30, f.size());
    f.render_widget(Clear, area);

    let body = format!("{message}\n\nPress Enter to dismiss.");
    let widget = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(app.theme.text))
        .block(
            Block::default()
                .title(Span::styled(
                    title.to_string(),
                    Style::default().fg(app.theme.error),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.error)),
        );
    f.render_widget(widget, area);
}
