//! Rose Pine Color Palette Module
//! Based on the official Rose Pine theme: https://rosepinetheme.com/
//!
//! Chrome colors for the interface, plus conversion of palette colors into
//! terminal colors.

use crate::models::{Color as SwatchColor, TextTone};
use ratatui::style::Color;

pub struct RosePine;

impl RosePine {
    pub const BASE: Color = Color::Rgb(25, 23, 36);
    pub const SURFACE: Color = Color::Rgb(31, 29, 46);
    pub const TEXT: Color = Color::Rgb(224, 222, 244);
    pub const SUBTLE: Color = Color::Rgb(144, 140, 170);
    pub const MUTED: Color = Color::Rgb(110, 106, 134);
    pub const LOVE: Color = Color::Rgb(235, 111, 146);
    pub const GOLD: Color = Color::Rgb(246, 193, 119);
    pub const FOAM: Color = Color::Rgb(156, 207, 216);
    pub const IRIS: Color = Color::Rgb(196, 167, 231);
    pub const HIGHLIGHT_HIGH: Color = Color::Rgb(82, 79, 103);
}

/// Truecolor terminal color for a palette color.
pub fn terminal_color(color: SwatchColor) -> Color {
    Color::Rgb(color.red, color.green, color.blue)
}

/// Readable foreground for text drawn on `background`.
pub fn contrast_color(background: SwatchColor) -> Color {
    match background.contrast_text() {
        TextTone::Black => Color::Rgb(0, 0, 0),
        TextTone::White => Color::Rgb(255, 255, 255),
    }
}
