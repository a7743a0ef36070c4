//! Listings view: filter row, apartment list, detail overlay.

use crate::state::{App, ListingsFocus};
use crate::views::helpers::{centered_rect, format_price};
use crate::widgets::{DetailPanel, FilterBar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_filter_bar(f, app, chunks[0]);
    render_list(f, app, chunks[1]);

    if app.listings.selected.is_some() {
        render_detail_overlay(f, app);
    }
}

fn render_filter_bar(f: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = match app.listings.focus {
        ListingsFocus::Filter(field) => Some(field.index()),
        ListingsFocus::List => None,
    };
    let bar = FilterBar {
        inputs: [
            ("Unit Name", &app.listings.filter_inputs.unit_name),
            ("Unit Number", &app.listings.filter_inputs.unit_number),
            ("Project", &app.listings.filter_inputs.project),
        ],
        focused,
        focus_style: Style::default().fg(app.theme.border_focus),
        blur_style: Style::default().fg(app.theme.border),
    };
    bar.render(f, area);
}

fn render_list(f: &mut Frame<'_>, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .listings
        .apartments
        .iter()
        .map(|apartment| {
            let line = Line::from(vec![
                Span::styled(
                    apartment.unit_name.clone(),
                    Style::default().fg(app.theme.text),
                ),
                Span::raw("  "),
                Span::styled(
                    apartment.project.clone(),
                    Style::default().fg(app.theme.text_dim),
                ),
                Span::raw("  "),
                Span::styled(
                    format_price(apartment.price),
                    Style::default().fg(app.theme.secondary),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let mut state = ListState::default();
    if let Some(highlighted) = app.listings.highlighted {
        if let Some(index) = app
            .listings
            .apartments
            .iter()
            .position(|a| a.id == highlighted)
        {
            state.select(Some(index));
        }
    }

    let title = format!("Apartments ({})", app.listings.apartments.len());
    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut state);
}

fn render_detail_overlay(f: &mut Frame<'_>, app: &App) {
    let area = centered_rect(60, 60, f.size());
    f.render_widget(Clear, area);

    let detail = &app.listings.detail;
    if detail.loading {
        let placeholder = Paragraph::new("Loading...")
            .style(Style::default().fg(app.theme.primary))
            .block(Block::default().title("Details").borders(Borders::ALL));
        f.render_widget(placeholder, area);
        return;
    }

    match &detail.record {
        Some(apartment) => {
            let mut fields = vec![
                ("Unit Number", apartment.unit_number.clone()),
                ("Project", apartment.project.clone()),
                ("Price", format_price(apartment.price)),
            ];
            if let Some(description) = &apartment.description {
                fields.push(("Description", description.clone()));
            }
            let panel = DetailPanel {
                title: &apartment.unit_name,
                label_style: Style::default()
                    .fg(app.theme.primary)
                    .add_modifier(Modifier::BOLD),
                value_style: Style::default().fg(app.theme.text),
            };
            panel.render(f, area, &fields);
        }
        None => {
            let missing = Paragraph::new("Not found")
                .style(Style::default().fg(app.theme.warning))
                .block(Block::default().title("Details").borders(Borders::ALL));
            f.render_widget(missing, area);
        }
    }
}
