//! UI Components and Layout Module
//!
//! Reusable pieces shared by the palette screen and its overlays.
//!
//! # Components
//!
//! - **Bottom Bar**: status message on the left, context shortcuts on the right
//! - **Save Dialog**: centered name input for saving the current palette
//! - **Help Overlay**: full key reference

use crate::app::{App, InputMode};
use crate::ui::colors::RosePine;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

/// Renders the bottom bar with the latest status message and the shortcuts
/// relevant to the current input mode.
pub fn render_bottom_bar(frame: &mut Frame, area: Rect, app: &App) {
    let navbar_chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let status = if let Some(error) = &app.error_message {
        Line::from(Span::styled(
            format!(" ✗ {} ", error),
            Style::default().fg(RosePine::LOVE),
        ))
    } else if let Some(success) = &app.success_message {
        Line::from(Span::styled(
            format!(" ✓ {} ", success),
            Style::default().fg(RosePine::FOAM),
        ))
    } else {
        Line::from(Span::styled(
            format!(
                " Color {} of {} │ {} saved ",
                app.selected_slot + 1,
                app.palette.len(),
                app.library.len()
            ),
            Style::default().fg(RosePine::SUBTLE),
        ))
    };

    let left_content = Paragraph::new(status).alignment(Alignment::Left).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
    );

    let right_content = Paragraph::new(get_context_shortcuts(app))
        .alignment(Alignment::Right)
        .style(Style::default().fg(RosePine::MUTED))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        );

    left_content.render(navbar_chunks[0], frame.buffer_mut());
    right_content.render(navbar_chunks[1], frame.buffer_mut());
}

fn get_context_shortcuts(app: &App) -> &'static str {
    match app.input_mode {
        InputMode::Normal => {
            " [␣] Generate │ [←→] Select │ [x] Lock │ [a] Adjust │ [c] Copy │ [s] Save │ [o] Library │ [?] Help "
        }
        InputMode::Adjust => " [↑↓] Channel │ [←→] Change │ [⇧] ×5 │ [Esc] Close ",
        InputMode::SaveName => " [⏎] Save │ [Esc] Cancel ",
        InputMode::Library => " [↑↓] Navigate │ [⏎] Select │ [Esc] Close ",
        InputMode::HelpMenu => " [Esc] Close ",
    }
}

/// Returns a rectangle of the given size centered in `area`, clipped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Renders the palette name prompt
pub fn render_save_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(50, 7, frame.area());
    Clear.render(area, frame.buffer_mut());

    let block = Block::bordered()
        .title(" Save palette ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::IRIS).bg(RosePine::BASE));

    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(inner);

    let preview: Vec<Span> = app
        .palette
        .snapshot()
        .into_iter()
        .map(|color| {
            Span::styled(
                "    ",
                Style::default().bg(crate::ui::colors::terminal_color(color)),
            )
        })
        .collect();

    Paragraph::new(Line::from(preview))
        .alignment(Alignment::Center)
        .render(chunks[0], frame.buffer_mut());

    Paragraph::new(Line::from(vec![
        Span::styled(" Name: ", Style::default().fg(RosePine::SUBTLE)),
        Span::styled(app.input_buffer.as_str(), Style::default().fg(RosePine::TEXT)),
        Span::styled("▏", Style::default().fg(RosePine::GOLD)),
    ]))
    .render(chunks[2], frame.buffer_mut());
}

/// Renders the help overlay listing every key binding
pub fn render_help(frame: &mut Frame) {
    let bindings = [
        ("Space / g", "Generate a new palette (locked colors stay)"),
        ("← → / h l", "Select color"),
        ("1-9, 0", "Jump to color"),
        ("x", "Lock or unlock the selected color"),
        ("a / Enter", "Open the hue, saturation and brightness sliders"),
        ("c / y", "Copy the selected hex value"),
        ("s", "Save the palette to the library"),
        ("o / p", "Open the library of saved palettes"),
        ("q", "Quit"),
    ];

    let area = centered_rect(64, bindings.len() as u16 + 4, frame.area());
    Clear.render(area, frame.buffer_mut());

    let lines: Vec<Line> = bindings
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!(" {:<12}", keys), Style::default().fg(RosePine::GOLD).bold()),
                Span::styled(*action, Style::default().fg(RosePine::TEXT)),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .title(" Help ")
                .title_alignment(Alignment::Center)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::IRIS).bg(RosePine::BASE)),
        )
        .render(area, frame.buffer_mut());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(50, 10, area), Rect::new(25, 15, 50, 10));
        assert_eq!(centered_rect(200, 80, area), area);
    }
}
