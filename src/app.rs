use crate::clipboard;
use crate::config::Config;
use crate::models::{Channel, PaletteLibrary, PaletteState, Result};
use crate::ui::{adjust_panel, components, library, palette_view};
use ratatui::Frame;
use tracing::warn;

/// A user action, already translated from raw input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Generate,
    ToggleLock(usize),
    Adjust {
        slot: usize,
        channel: Channel,
        value: f32,
    },
    /// Moves a channel by whole configured steps, clamped to its range.
    Nudge {
        slot: usize,
        channel: Channel,
        steps: i32,
    },
    CopyHex(usize),
    Save {
        name: String,
    },
    LoadSaved(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    Adjust,
    SaveName,
    Library,
    HelpMenu,
}

/// Session state shared by the key handlers and the renderer.
#[derive(Debug)]
pub struct App {
    pub palette: PaletteState,
    pub library: PaletteLibrary,
    pub config: Config,
    pub selected_slot: usize,
    pub selected_channel: Channel,
    pub selected_saved: usize,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    copy: fn(&str) -> Result<()>,
}

impl App {
    /// Starts a session with a freshly generated palette.
    pub fn new(config: Config, library: PaletteLibrary, warning: Option<String>) -> Self {
        let palette = PaletteState::random(config.palette_size);
        let mut app = Self::with_palette(palette, library, config);
        if let Some(warning) = warning {
            app.set_error_message(warning);
        }
        app
    }

    pub fn with_palette(palette: PaletteState, library: PaletteLibrary, config: Config) -> Self {
        Self {
            palette,
            library,
            config,
            selected_slot: 0,
            selected_channel: Channel::Hue,
            selected_saved: 0,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            error_message: None,
            success_message: None,
            copy: clipboard::copy_to_clipboard,
        }
    }

    #[cfg(test)]
    pub fn with_clipboard(mut self, copy: fn(&str) -> Result<()>) -> Self {
        self.copy = copy;
        self
    }

    /// Applies a command and reports the outcome through the status messages.
    pub fn dispatch(&mut self, command: Command) {
        match self.apply(command) {
            Ok(Some(message)) => self.set_success_message(message),
            Ok(None) => self.clear_messages(),
            Err(e) => {
                warn!(error = %e, "Command failed");
                self.set_error_message(e.to_string());
            }
        }
    }

    fn apply(&mut self, command: Command) -> Result<Option<String>> {
        match command {
            Command::Generate => {
                self.palette.generate();
                Ok(None)
            }
            Command::ToggleLock(slot) => {
                let locked = self.palette.toggle_lock(slot)?;
                let state = if locked { "locked" } else { "unlocked" };
                Ok(Some(format!("Color {} {}", slot + 1, state)))
            }
            Command::Adjust {
                slot,
                channel,
                value,
            } => {
                self.palette.adjust(slot, channel, value)?;
                Ok(None)
            }
            Command::Nudge {
                slot,
                channel,
                steps,
            } => {
                let current = self.palette.slot(slot)?.channel(channel);
                let value = self.nudged(channel, current, steps);
                self.palette.adjust(slot, channel, value)?;
                Ok(None)
            }
            Command::CopyHex(slot) => {
                let hex = self.palette.slot(slot)?.current().hex();
                (self.copy)(&hex)?;
                Ok(Some(format!("Copied {} to clipboard", hex)))
            }
            Command::Save { name } => {
                let snapshot = self.palette.snapshot();
                let saved = self.library.save(name, &snapshot)?;
                self.selected_saved = self.library.len().saturating_sub(1);
                Ok(Some(format!("Saved \"{}\"", saved.display_name())))
            }
            Command::LoadSaved(nr) => {
                let saved = self.library.select(nr)?;
                let name = saved.display_name();
                let colors = saved.colors.clone();
                self.palette.load_snapshot(&colors)?;
                Ok(Some(format!("Loaded \"{}\"", name)))
            }
        }
    }

    fn nudged(&self, channel: Channel, current: f32, steps: i32) -> f32 {
        match channel {
            Channel::Hue => (current + self.config.hue_step * steps as f32).rem_euclid(360.0),
            Channel::Saturation | Channel::Lightness => {
                channel.clamp(current + self.config.fraction_step * steps as f32)
            }
        }
    }

    pub fn next_slot(&mut self) {
        if !self.palette.is_empty() {
            self.selected_slot = (self.selected_slot + 1) % self.palette.len();
        }
    }

    pub fn previous_slot(&mut self) {
        if !self.palette.is_empty() {
            self.selected_slot = (self.selected_slot + self.palette.len() - 1) % self.palette.len();
        }
    }

    pub fn select_slot(&mut self, index: usize) {
        if index < self.palette.len() {
            self.selected_slot = index;
        }
    }

    pub fn next_saved(&mut self) {
        if !self.library.is_empty() {
            self.selected_saved = (self.selected_saved + 1) % self.library.len();
        }
    }

    pub fn previous_saved(&mut self) {
        if !self.library.is_empty() {
            self.selected_saved = (self.selected_saved + self.library.len() - 1) % self.library.len();
        }
    }

    /// Rereads the store and shows the library overlay.
    pub fn open_library(&mut self) {
        self.clear_messages();
        if let Err(e) = self.library.reload() {
            warn!(error = %e, "Could not reload saved palettes");
            self.set_error_message(e.to_string());
        }
        if self.selected_saved >= self.library.len() {
            self.selected_saved = self.library.len().saturating_sub(1);
        }
        self.input_mode = InputMode::Library;
    }

    /// Number of the palette highlighted in the library overlay.
    pub fn highlighted_saved_nr(&self) -> Option<u32> {
        self.library
            .palettes()
            .get(self.selected_saved)
            .map(|p| p.nr)
    }

    pub fn set_error_message(&mut self, message: String) {
        self.error_message = Some(message);
        self.success_message = None;
    }

    pub fn set_success_message(&mut self, message: String) {
        self.success_message = Some(message);
        self.error_message = None;
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    /// Renders the current application state to the terminal frame
    pub fn render(&mut self, frame: &mut Frame) {
        palette_view::render(frame, self);

        match self.input_mode {
            InputMode::Adjust => adjust_panel::render(frame, self),
            InputMode::SaveName => components::render_save_dialog(frame, self),
            InputMode::Library => library::render(frame, self),
            InputMode::HelpMenu => components::render_help(frame),
            InputMode::Normal => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Color, PaletteError, StorageManager};
    use std::cell::RefCell;
    use tempfile::{TempDir, tempdir};

    thread_local! {
        static COPIED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    fn fake_copy(text: &str) -> Result<()> {
        COPIED.with(|c| c.borrow_mut().push(text.to_string()));
        Ok(())
    }

    fn broken_copy(_: &str) -> Result<()> {
        Err(PaletteError::Clipboard("no tool".to_string()))
    }

    fn colors(hexes: &[&str]) -> Vec<Color> {
        hexes.iter().map(|h| h.parse().unwrap()).collect()
    }

    fn test_app() -> (App, TempDir) {
        let dir = tempdir().unwrap();
        let library = PaletteLibrary::load(StorageManager::new(dir.path()).unwrap(), 5).unwrap();
        let palette = PaletteState::from_colors(&colors(&[
            "#ff0000", "#00ff00", "#0000ff", "#ffffff", "#000000",
        ]));
        let app = App::with_palette(palette, library, Config::default()).with_clipboard(fake_copy);
        (app, dir)
    }

    #[test]
    fn test_new_app_uses_configured_size() {
        let dir = tempdir().unwrap();
        let config = Config {
            palette_size: 3,
            ..Config::default()
        };
        let library = PaletteLibrary::load(StorageManager::new(dir.path()).unwrap(), 3).unwrap();
        let app = App::new(config, library, Some("store was corrupt".to_string()));

        assert_eq!(app.palette.len(), 3);
        assert_eq!(app.error_message.as_deref(), Some("store was corrupt"));
    }

    #[test]
    fn test_generate_respects_lock() {
        let (mut app, _dir) = test_app();
        app.dispatch(Command::ToggleLock(0));
        assert_eq!(app.success_message.as_deref(), Some("Color 1 locked"));

        app.dispatch(Command::Generate);
        assert_eq!(app.palette.snapshot()[0].hex(), "#ff0000");
        assert!(app.success_message.is_none());
    }

    #[test]
    fn test_adjust_and_nudge() {
        let (mut app, _dir) = test_app();
        app.dispatch(Command::Adjust {
            slot: 0,
            channel: Channel::Hue,
            value: 120.0,
        });
        assert_eq!(app.palette.snapshot()[0].hex(), "#00ff00");

        app.dispatch(Command::Nudge {
            slot: 0,
            channel: Channel::Hue,
            steps: -25,
        });
        assert_eq!(app.palette.slot(0).unwrap().channel(Channel::Hue), 355.0);

        app.dispatch(Command::Nudge {
            slot: 0,
            channel: Channel::Lightness,
            steps: 100,
        });
        assert_eq!(app.palette.slot(0).unwrap().channel(Channel::Lightness), 1.0);
        assert_eq!(app.palette.snapshot()[0], Color::WHITE);
    }

    #[test]
    fn test_out_of_range_commands_report_errors() {
        let (mut app, _dir) = test_app();
        app.dispatch(Command::ToggleLock(7));
        assert!(app.error_message.as_deref().unwrap().contains("out of range"));

        app.dispatch(Command::Adjust {
            slot: 0,
            channel: Channel::Saturation,
            value: 4.0,
        });
        assert!(app.error_message.is_some());
        assert_eq!(app.palette.snapshot()[0].hex(), "#ff0000");
    }

    #[test]
    fn test_copy_hex() {
        let (mut app, _dir) = test_app();
        app.dispatch(Command::CopyHex(2));
        assert_eq!(
            app.success_message.as_deref(),
            Some("Copied #0000ff to clipboard")
        );
        COPIED.with(|c| assert_eq!(c.borrow().last().map(String::as_str), Some("#0000ff")));

        let (app, _dir2) = test_app();
        let mut app = app.with_clipboard(broken_copy);
        app.dispatch(Command::CopyHex(0));
        assert!(app.error_message.unwrap().contains("Clipboard"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let (mut app, _dir) = test_app();
        app.dispatch(Command::Adjust {
            slot: 3,
            channel: Channel::Lightness,
            value: 0.5,
        });
        let saved_colors = app.palette.snapshot();
        app.dispatch(Command::Save {
            name: "greys".to_string(),
        });
        assert_eq!(app.success_message.as_deref(), Some("Saved \"greys\""));

        app.dispatch(Command::ToggleLock(1));
        app.dispatch(Command::Generate);
        app.dispatch(Command::LoadSaved(0));

        assert_eq!(app.palette.snapshot(), saved_colors);
        assert!(app.palette.slots().iter().all(|s| !s.is_locked()));
        assert_eq!(app.highlighted_saved_nr(), Some(0));
    }

    #[test]
    fn test_load_unknown_palette() {
        let (mut app, _dir) = test_app();
        let before = app.palette.snapshot();
        app.dispatch(Command::LoadSaved(3));
        assert_eq!(
            app.error_message.as_deref(),
            Some("No saved palette with number 3")
        );
        assert_eq!(app.palette.snapshot(), before);
    }

    #[test]
    fn test_slot_navigation_wraps() {
        let (mut app, _dir) = test_app();
        app.previous_slot();
        assert_eq!(app.selected_slot, 4);
        app.next_slot();
        assert_eq!(app.selected_slot, 0);
        app.select_slot(9);
        assert_eq!(app.selected_slot, 0);
        app.select_slot(2);
        assert_eq!(app.selected_slot, 2);
    }
}
