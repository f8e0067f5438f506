//! Main palette screen: one full-height column per color.

use crate::app::App;
use crate::models::PaletteSlot;
use crate::ui::colors::{RosePine, contrast_color, terminal_color};
use crate::ui::components::render_bottom_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

const LOCKED_ICON: &str = "\u{f023}";
const UNLOCKED_ICON: &str = "\u{f09c}";

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Fill(1),   // Color columns
        Constraint::Length(3), // Bottom bar
    ])
    .split(frame.area());

    render_title(frame, chunks[0]);

    let columns = Layout::horizontal(vec![Constraint::Fill(1); app.palette.len()]).split(chunks[1]);
    for (index, (slot, area)) in app.palette.slots().iter().zip(columns.iter()).enumerate() {
        render_slot(frame, *area, slot, index == app.selected_slot);
    }

    render_bottom_bar(frame, chunks[2], app);
}

fn render_title(frame: &mut Frame, area: Rect) {
    Paragraph::new(" swatch · random palette generator ")
        .alignment(Alignment::Center)
        .style(Style::default().fg(RosePine::IRIS).bg(RosePine::BASE).bold())
        .render(area, frame.buffer_mut());
}

fn render_slot(frame: &mut Frame, area: Rect, slot: &PaletteSlot, selected: bool) {
    let color = slot.current();
    let background = terminal_color(color);
    let foreground = contrast_color(color);

    let mut block = Block::default().style(Style::default().bg(background));
    if selected {
        block = block
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(foreground));
    }

    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let content_area = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Fill(1),
    ])
    .split(inner)[1];

    let lock = if slot.is_locked() {
        LOCKED_ICON
    } else {
        UNLOCKED_ICON
    };

    let lines = vec![
        Line::from(Span::styled(color.hex(), Style::default().fg(foreground).bold())),
        Line::from(""),
        Line::from(Span::styled(lock, Style::default().fg(foreground))),
        Line::from(""),
        Line::from(Span::styled(
            if selected { "▲" } else { "" },
            Style::default().fg(foreground),
        )),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(background))
        .render(content_area, frame.buffer_mut());
}
