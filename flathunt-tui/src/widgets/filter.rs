//! Filter input row for the listings view.

use crate::widgets::{TextInput, TextInputState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    Frame,
};

/// Three side-by-side search inputs, one per filterable field.
pub struct FilterBar<'a> {
    pub inputs: [(&'a str, &'a TextInputState); 3],
    pub focused: Option<usize>,
    pub focus_style: Style,
    pub blur_style: Style,
}

impl<'a> FilterBar<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        for (index, (title, state)) in self.inputs.iter().copied().enumerate() {
            let input = TextInput {
                title,
                state,
                focused: self.focused == Some(index),
                focus_style: self.focus_style,
                blur_style: self.blur_style,
            };
            input.render(f, chunks[index]);
        }
    }
}
