//! Keyboard Input Handling Module
//!
//! Translates key presses into `Command` values for the app, and handles the
//! purely visual navigation (slot selection, panels, dialogs) directly.

use crate::app::{App, Command, InputMode};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Steps applied per key press when Shift is held in the adjustment panel.
const COARSE_STEPS: i32 = 5;

/// Main keyboard event handler and dispatcher
///
/// Returns `true` when the application should quit.
pub fn handle_key_events(key: KeyEvent, app: &mut App) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_keys(key, app),
        InputMode::Adjust => {
            handle_adjust_keys(key, app);
            false
        }
        InputMode::SaveName => {
            handle_save_keys(key, app);
            false
        }
        InputMode::Library => {
            handle_library_keys(key, app);
            false
        }
        InputMode::HelpMenu => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                app.input_mode = InputMode::Normal;
            }
            false
        }
    }
}

fn handle_normal_keys(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char(' ') | KeyCode::Char('g') => app.dispatch(Command::Generate),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.previous_slot(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.next_slot(),
        KeyCode::Char(c @ '1'..='9') => app.select_slot(c as usize - '1' as usize),
        KeyCode::Char('0') => app.select_slot(9),
        KeyCode::Char('x') => app.dispatch(Command::ToggleLock(app.selected_slot)),
        KeyCode::Char('c') | KeyCode::Char('y') => app.dispatch(Command::CopyHex(app.selected_slot)),
        KeyCode::Char('a') | KeyCode::Enter => {
            app.clear_messages();
            app.input_mode = InputMode::Adjust;
        }
        KeyCode::Char('s') => {
            app.clear_messages();
            app.input_buffer.clear();
            app.input_mode = InputMode::SaveName;
        }
        KeyCode::Char('o') | KeyCode::Char('p') => app.open_library(),
        KeyCode::Char('?') => app.input_mode = InputMode::HelpMenu,
        KeyCode::Esc => app.clear_messages(),
        _ => {}
    }
    false
}

fn handle_adjust_keys(key: KeyEvent, app: &mut App) {
    let steps = if key.modifiers.contains(KeyModifiers::SHIFT) {
        COARSE_STEPS
    } else {
        1
    };

    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('a') => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Up | KeyCode::Char('k') => app.selected_channel = app.selected_channel.previous(),
        KeyCode::Down | KeyCode::Char('j') => app.selected_channel = app.selected_channel.next(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => app.dispatch(Command::Nudge {
            slot: app.selected_slot,
            channel: app.selected_channel,
            steps: -steps,
        }),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => app.dispatch(Command::Nudge {
            slot: app.selected_slot,
            channel: app.selected_channel,
            steps,
        }),
        KeyCode::Tab => app.next_slot(),
        KeyCode::BackTab => app.previous_slot(),
        KeyCode::Char('x') => app.dispatch(Command::ToggleLock(app.selected_slot)),
        KeyCode::Char('c') => app.dispatch(Command::CopyHex(app.selected_slot)),
        _ => {}
    }
}

fn handle_save_keys(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => {
            app.input_buffer.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            let name = app.input_buffer.trim().to_string();
            app.input_buffer.clear();
            app.input_mode = InputMode::Normal;
            app.dispatch(Command::Save { name });
        }
        KeyCode::Backspace => {
            app.input_buffer.pop();
        }
        KeyCode::Char(c) => app.input_buffer.push(c),
        _ => {}
    }
}

fn handle_library_keys(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('o') | KeyCode::Char('q') => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Up | KeyCode::Char('k') => app.previous_saved(),
        KeyCode::Down | KeyCode::Char('j') => app.next_saved(),
        KeyCode::Enter => {
            if let Some(nr) = app.highlighted_saved_nr() {
                app.input_mode = InputMode::Normal;
                app.dispatch(Command::LoadSaved(nr));
            }
        }
        _ => {}
    }
}
