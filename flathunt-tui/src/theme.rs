//! Blueprint theme colors.

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct BlueprintTheme {
    pub bg: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl BlueprintTheme {
    pub fn blueprint() -> Self {
        Self {
            bg: Color::Rgb(13, 22, 38),
            primary: Color::Rgb(102, 179, 255),
            primary_dim: Color::Rgb(51, 102, 153),
            secondary: Color::Rgb(255, 196, 102),
            success: Color::Rgb(128, 220, 128),
            warning: Color::Rgb(255, 210, 90),
            error: Color::Rgb(255, 105, 105),
            info: Color::Rgb(102, 179, 255),
            text: Color::Rgb(225, 232, 242),
            text_dim: Color::Rgb(130, 145, 165),
            border: Color::Rgb(60, 75, 95),
            border_focus: Color::Rgb(102, 179, 255),
        }
    }
}
