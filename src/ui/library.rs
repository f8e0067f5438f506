//! Library overlay listing saved palettes with small previews.

use crate::app::App;
use crate::models::SavedPalette;
use crate::ui::colors::{RosePine, terminal_color};
use crate::ui::components::centered_rect;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, List, ListItem, ListState, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 24;
const SWATCH_WIDTH: usize = 3;

pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(72, 20, frame.area());
    Clear.render(area, frame.buffer_mut());

    let block = Block::bordered()
        .title(format!(" Library · {} saved ", app.library.len()))
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::IRIS).bg(RosePine::BASE));

    if app.library.is_empty() {
        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No saved palettes yet",
                Style::default().fg(RosePine::SUBTLE).italic(),
            )),
            Line::from(Span::styled(
                "Press [s] on the main screen to save one",
                Style::default().fg(RosePine::MUTED),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block)
        .render(area, frame.buffer_mut());
        return;
    }

    let items: Vec<ListItem> = app
        .library
        .palettes()
        .iter()
        .enumerate()
        .map(|(i, palette)| palette_item(palette, i == app.selected_saved))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(RosePine::SURFACE));

    let mut list_state = ListState::default();
    list_state.select(Some(app.selected_saved));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn palette_item(palette: &SavedPalette, selected: bool) -> ListItem<'static> {
    let name_style = if selected {
        Style::default().fg(RosePine::LOVE).bold()
    } else {
        Style::default().fg(RosePine::TEXT)
    };

    let name = fit_width(&palette.display_name(), NAME_WIDTH);
    let padding = NAME_WIDTH.saturating_sub(name.width());

    let mut spans = vec![
        Span::styled(if selected { " ▶ " } else { "   " }, name_style),
        Span::styled(format!("{}{}", name, " ".repeat(padding)), name_style),
        Span::raw(" "),
    ];

    for color in &palette.colors {
        spans.push(Span::styled(
            " ".repeat(SWATCH_WIDTH),
            Style::default().bg(terminal_color(*color)),
        ));
    }

    if selected {
        spans.push(Span::styled(" Select", Style::default().fg(RosePine::GOLD)));
    }

    ListItem::new(Line::from(spans))
}

/// Truncates `text` to at most `max` terminal columns, ending in `…` when cut.
pub fn fit_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
