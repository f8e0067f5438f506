//! swatch - Random Color Palette Generator
//!
//! A terminal user interface for generating color palettes. Built with Rust
//! and ratatui.
//!
//! swatch lets you:
//! - Generate random palettes, keeping the colors you lock
//! - Fine-tune any color through hue, saturation and brightness sliders
//! - Copy hex values to the system clipboard
//! - Save named palettes to a local library and load them back later

use crate::app::App;
use crate::config::Config;
use crate::models::{PaletteLibrary, StorageManager};
use color_eyre::Result;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use std::error::Error;
use std::io;
use std::time::Duration;
use tracing::info;

mod app;
mod cli;
mod clipboard;
mod config;
mod handlers;
mod logging;
mod models;
mod ui;

/// Application entry point and initialization
///
/// Runs a CLI command when arguments are given, otherwise the TUI. The
/// terminal is restored before any error is reported.
fn main() -> Result<(), Box<dyn Error>> {
    color_eyre::install()?;

    let config = Config::load()?;
    let _log_guard = logging::init(&config.logs_dir()?, &config.log_level)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        cli::execute_cli(&args, &config)?;
        return Ok(());
    }

    let storage = StorageManager::new(config.data_dir()?)?;
    let (library, warning) = PaletteLibrary::open(storage, config.palette_size);
    let mut app = App::new(config, library, warning);
    info!(size = app.palette.len(), "Starting swatch");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Draw / poll loop; returns when a key handler asks to quit.
fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if handlers::keys::handle_key_events(key, app) {
                    info!("Quitting swatch");
                    return Ok(());
                }
            }
        }
    }
}
