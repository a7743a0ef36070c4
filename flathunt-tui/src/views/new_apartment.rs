//! Creation form view.

use crate::state::{App, FormField};
use crate::views::helpers::centered_rect;
use crate::widgets::TextInput;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let form = &app.create_form;
    let panel = centered_rect(70, 90, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // unit name
            Constraint::Length(3), // unit number
            Constraint::Length(3), // project
            Constraint::Length(6), // description
            Constraint::Length(3), // price
            Constraint::Length(1), // error line
            Constraint::Min(0),
        ])
        .split(panel);

    let focus_style = Style::default().fg(app.theme.border_focus);
    let blur_style = Style::default().fg(app.theme.border);

    let text_fields = [
        (FormField::UnitName, &form.unit_name, chunks[0]),
        (FormField::UnitNumber, &form.unit_number, chunks[1]),
        (FormField::Project, &form.project, chunks[2]),
        (FormField::Price, &form.price, chunks[4]),
    ];
    for (field, state, chunk) in text_fields {
        let input = TextInput {
            title: field.title(),
            state,
            focused: form.focus == field,
            focus_style,
            blur_style,
        };
        input.render(f, chunk);
    }

    render_description(f, app, chunks[3]);
    render_status_line(f, app, chunks[5]);
}

fn render_description(f: &mut Frame<'_>, app: &App, area: Rect) {
    let form = &app.create_form;
    let border_style = if form.focus == FormField::Description {
        Style::default().fg(app.theme.border_focus)
    } else {
        Style::default().fg(app.theme.border)
    };

    // TextArea carries its own block; restyle a copy per frame so focus
    // changes show up without mutating state during render.
    let mut editor = form.description.clone();
    editor.set_block(
        Block::default()
            .title(FormField::Description.title())
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    editor.set_cursor_line_style(Style::default());
    f.render_widget(&editor, area);
}

fn render_status_line(f: &mut Frame<'_>, app: &App, area: Rect) {
    let form = &app.create_form;
    let (text, style) = if let Some(error) = &form.error {
        (error.clone(), Style::default().fg(app.theme.error))
    } else if form.submitting {
        (
            "Submitting...".to_string(),
            Style::default().fg(app.theme.primary),
        )
    } else {
        (String::new(), Style::default())
    };
    f.render_widget(Paragraph::new(text).style(style), area);
}
