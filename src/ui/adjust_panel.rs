//! Hue / saturation / brightness sliders for the selected color.
//!
//! Each slider is drawn as a gradient of what the color would look like along
//! that channel, with a marker at the current value.

use crate::app::App;
use crate::models::color::{HUE_SCALE, sample_scale};
use crate::models::{Channel, Color, PaletteSlot};
use crate::ui::colors::{RosePine, contrast_color, terminal_color};
use crate::ui::components::centered_rect;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

const PANEL_WIDTH: u16 = 56;
const PANEL_HEIGHT: u16 = 11;

pub fn render(frame: &mut Frame, app: &App) {
    let Ok(slot) = app.palette.slot(app.selected_slot) else {
        return;
    };

    let screen = frame.area();
    let mut area = centered_rect(PANEL_WIDTH, PANEL_HEIGHT, screen);
    // Sit just above the bottom bar so the colors stay visible.
    area.y = screen.bottom().saturating_sub(PANEL_HEIGHT + 3).max(screen.y);
    Clear.render(area, frame.buffer_mut());

    let block = Block::bordered()
        .title(format!(
            " Adjust color {} · {} → {} ",
            app.selected_slot + 1,
            slot.base().hex(),
            slot.current().hex()
        ))
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::IRIS).bg(RosePine::BASE));

    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let rows = Layout::vertical([Constraint::Length(3); 3]).split(inner);
    for (channel, row) in Channel::ALL.iter().zip(rows.iter()) {
        render_slider(frame, *row, slot, *channel, *channel == app.selected_channel);
    }
}

fn render_slider(frame: &mut Frame, area: Rect, slot: &PaletteSlot, channel: Channel, selected: bool) {
    let value = slot.offsets().get(channel);
    let label_style = if selected {
        Style::default().fg(RosePine::LOVE).bold()
    } else {
        Style::default().fg(RosePine::SUBTLE)
    };

    let readout = match channel {
        Channel::Hue => format!("{:.0}°", value),
        Channel::Saturation | Channel::Lightness => format!("{:.0}%", value * 100.0),
    };

    let label = Line::from(vec![
        Span::styled(if selected { " ▶ " } else { "   " }, label_style),
        Span::styled(format!("{:<12}", channel.label()), label_style),
        Span::styled(readout, Style::default().fg(RosePine::TEXT)),
    ]);

    let width = area.width.saturating_sub(2) as usize;
    let fraction = value / channel.range().end();
    let bar: Vec<Span> = slider_cells(&slider_stops(slot.current(), channel), fraction, width)
        .into_iter()
        .map(|(color, marker)| {
            let style = Style::default().bg(terminal_color(color));
            if marker {
                Span::styled("┃", style.fg(contrast_color(color)))
            } else {
                Span::styled(" ", style)
            }
        })
        .collect();

    let mut bar_line = vec![Span::raw(" ")];
    bar_line.extend(bar);

    Paragraph::new(vec![label, Line::from(bar_line)]).render(area, frame.buffer_mut());
}

/// Gradient stops behind a channel's slider for the given color.
pub fn slider_stops(color: Color, channel: Channel) -> Vec<Color> {
    match channel {
        Channel::Hue => HUE_SCALE.to_vec(),
        Channel::Saturation => color.saturation_scale().to_vec(),
        Channel::Lightness => color.lightness_scale().to_vec(),
    }
}

/// Samples `width` cells along the gradient and flags the one under `fraction`.
pub fn slider_cells(stops: &[Color], fraction: f32, width: usize) -> Vec<(Color, bool)> {
    if width == 0 {
        return Vec::new();
    }

    let last = (width - 1).max(1) as f32;
    let marker = (fraction.clamp(0.0, 1.0) * last).round() as usize;
    (0..width)
        .map(|x| (sample_scale(stops, x as f32 / last), x == marker))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_cells_marker_position() {
        let stops = [Color::BLACK, Color::WHITE];

        let cells = slider_cells(&stops, 0.0, 11);
        assert_eq!(cells.len(), 11);
        assert!(cells[0].1);
        assert_eq!(cells[0].0, Color::BLACK);
        assert_eq!(cells[10].0, Color::WHITE);

        let cells = slider_cells(&stops, 0.5, 11);
        assert_eq!(cells.iter().position(|(_, m)| *m), Some(5));

        let cells = slider_cells(&stops, 1.0, 11);
        assert!(cells[10].1);
        assert_eq!(cells.iter().filter(|(_, m)| *m).count(), 1);
    }

    #[test]
    fn test_slider_cells_degenerate_widths() {
        assert!(slider_cells(&HUE_SCALE, 0.3, 0).is_empty());
        let single = slider_cells(&HUE_SCALE, 0.0, 1);
        assert_eq!(single, vec![(HUE_SCALE[0], true)]);
    }

    #[test]
    fn test_slider_stops_follow_color() {
        let color: Color = "#3366cc".parse().unwrap();
        assert_eq!(slider_stops(color, Channel::Hue).len(), 7);
        assert_eq!(slider_stops(color, Channel::Saturation), color.saturation_scale().to_vec());
        let lightness = slider_stops(color, Channel::Lightness);
        assert_eq!(lightness.first(), Some(&Color::BLACK));
        assert_eq!(lightness.last(), Some(&Color::WHITE));
    }
}
