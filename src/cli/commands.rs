use crate::models::{Color, PaletteLibrary, PaletteState, Result, SavedPalette};
use colored::Colorize;

/// Prints a freshly generated palette
pub fn generate(size: usize) {
    let palette = PaletteState::random(size);
    println!("{}", swatch_row(&palette.snapshot()));
    println!("{}  {}", "┃".bright_magenta(), hex_list(&palette.snapshot()));
}

/// Lists every saved palette with a color preview
pub fn list_palettes(library: &PaletteLibrary) {
    if library.is_empty() {
        println!("{}  No saved palettes found.", "┃".bright_magenta());
        return;
    }

    for palette in library.palettes() {
        println!(
            "{}  {:>4}  {:<24} {}",
            "┃".bright_magenta(),
            palette.nr.to_string().yellow(),
            palette.display_name().bright_white(),
            preview(&palette.colors)
        );
    }
    println!(
        "{}  {}",
        "┃".bright_magenta(),
        format!("Stored in {}", library.storage().store_path().display()).bright_black()
    );
}

/// Shows one saved palette by number or name
pub fn show_palette(library: &PaletteLibrary, query: &str) {
    match library.find(query) {
        Some(palette) => display_palette(palette),
        None => {
            println!(
                "{}  No palette found matching: {}",
                "┃".bright_magenta(),
                query
            );
            if !library.is_empty() {
                println!("{}  Available palettes:", "┃".bright_magenta());
                list_palettes(library);
            }
        }
    }
}

/// Saves colors given on the command line
pub fn save_palette(library: &mut PaletteLibrary, name: &str, hexes: &[String]) -> Result<()> {
    let colors = parse_colors(hexes)?;
    let saved = library.save(name, &colors)?;
    println!(
        "{}  {} {} as #{}",
        "┃".bright_magenta(),
        "Saved".bright_green().bold(),
        saved.display_name().bold(),
        saved.nr
    );
    Ok(())
}

pub fn parse_colors(hexes: &[String]) -> Result<Vec<Color>> {
    hexes.iter().map(|hex| hex.parse()).collect()
}

fn display_palette(palette: &SavedPalette) {
    println!(
        "{}  {} {}",
        "┃".bright_magenta(),
        "PALETTE".bright_green().bold(),
        palette.display_name().bold()
    );
    println!("{}", "─".repeat(60).bright_magenta());
    println!(
        "{}  {}: {}",
        "┃".bright_magenta(),
        "Number".bright_blue(),
        palette.nr
    );
    if let Some(saved_at) = palette.saved_at {
        println!(
            "{}  {}: {}",
            "┃".bright_magenta(),
            "Saved".bright_yellow(),
            saved_at.format("%Y-%m-%d %H:%M")
        );
    }
    println!("{}", "─".repeat(60).bright_magenta());
    println!("{}", swatch_row(&palette.colors));
    println!("{}  {}", "┃".bright_magenta(), hex_list(&palette.colors));
}

/// Each color as a labelled block, text in the readable contrast tone.
fn swatch_row(colors: &[Color]) -> String {
    let blocks: Vec<String> = colors
        .iter()
        .map(|color| {
            let tone = color.contrast_text().color();
            format!(" {} ", color.hex())
                .truecolor(tone.red, tone.green, tone.blue)
                .on_truecolor(color.red, color.green, color.blue)
                .to_string()
        })
        .collect();
    format!("{}  {}", "┃".bright_magenta(), blocks.join(""))
}

fn preview(colors: &[Color]) -> String {
    colors
        .iter()
        .map(|c| "  ".on_truecolor(c.red, c.green, c.blue).to_string())
        .collect()
}

pub fn hex_list(colors: &[Color]) -> String {
    colors
        .iter()
        .map(Color::hex)
        .collect::<Vec<_>>()
        .join(" ")
}
