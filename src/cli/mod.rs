//! CLI Module for swatch
//! Lets users generate, list and save palettes straight from the shell
//! without launching the full TUI application.

pub mod commands;

use crate::config::Config;
use crate::models::{PaletteLibrary, StorageManager};
use anyhow::Result;
use colored::Colorize;

/// Executes CLI commands based on the provided arguments
pub fn execute_cli(args: &[String], config: &Config) -> Result<()> {
    if args.is_empty() {
        print_help();
        return Ok(());
    }

    match args[0].as_str() {
        "generate" | "gen" => {
            let size = match args.get(1) {
                Some(raw) => match raw.parse::<usize>() {
                    Ok(size) if (1..=crate::config::MAX_PALETTE_SIZE).contains(&size) => size,
                    _ => {
                        println!(
                            "{}  Palette size must be a number from 1 to {}",
                            "┃".bright_magenta(),
                            crate::config::MAX_PALETTE_SIZE
                        );
                        return Ok(());
                    }
                },
                None => config.palette_size,
            };
            commands::generate(size);
        }
        "list" | "ls" => {
            let library = open_library(config)?;
            commands::list_palettes(&library);
        }
        "show" | "view" => {
            if args.len() < 2 {
                println!("{}  Error: Missing palette number or name", "┃".bright_magenta());
                println!("{}  Usage: swatch show <NR_OR_NAME>", "┃".bright_magenta());
                return Ok(());
            }

            let library = open_library(config)?;
            commands::show_palette(&library, &args[1]);
        }
        "save" => {
            if args.len() < 3 {
                println!("{}  Error: Missing name or colors", "┃".bright_magenta());
                println!(
                    "{}  Usage: swatch save <NAME> <HEX> <HEX> ...",
                    "┃".bright_magenta()
                );
                return Ok(());
            }

            let mut library = open_library(config)?;
            commands::save_palette(&mut library, &args[1], &args[2..])?;
        }
        "help" | "--help" | "-h" => {
            print_help();
        }
        _ => {
            println!("{}  Unknown command: {}", "┃".bright_magenta(), args[0]);

            print_help();
        }
    }

    Ok(())
}

fn open_library(config: &Config) -> Result<PaletteLibrary> {
    let storage = StorageManager::new(config.data_dir()?)?;
    Ok(PaletteLibrary::load(storage, config.palette_size)?)
}

/// Prints the help message with available commands
fn print_help() {
    println!(
        "{}  {}",
        "┃".bright_magenta(),
        "SWATCH CLI - PALETTE GENERATOR".bold()
    );

    println!("{}  {}", "┃".bright_magenta(), "USAGE:".bright_yellow());
    println!("{}  swatch [COMMAND] [ARGS]", "┃".bright_magenta());
    println!("{}  {}", "┃".bright_magenta(), "COMMANDS:".bright_yellow());

    let commands = [
        ("generate, gen [SIZE]", "Print a new random palette"),
        ("list, ls", "List all saved palettes"),
        ("show, view <NR_OR_NAME>", "Display a saved palette (partial name works)"),
        ("save <NAME> <HEX>...", "Save the given colors to the library"),
        ("help", "Display this help message"),
    ];
    for (usage, description) in commands {
        println!(
            "{}  {:<27} {}",
            "┃".bright_magenta(),
            usage.bright_white(),
            description
        );
    }

    println!("{}  {}", "┃".bright_magenta(), "TIP:".bright_green());
    println!(
        "{}  Run with no arguments to launch the full TUI (Terminal User Interface) mode",
        "┃".bright_magenta()
    );
}
