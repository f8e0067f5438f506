use crate::models::color::Color;
use crate::models::error::{PaletteError, Result};
use crate::models::storage::StorageManager;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A named palette snapshot as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPalette {
    pub name: String,
    pub colors: Vec<Color>,
    /// Identifier used for selection. Never reused within a store.
    pub nr: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl SavedPalette {
    /// Name shown in listings; unnamed palettes fall back to their number.
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            format!("Palette #{}", self.nr)
        } else {
            self.name.clone()
        }
    }
}

/// Append-only collection of saved palettes backed by the JSON store.
#[derive(Debug)]
pub struct PaletteLibrary {
    palettes: Vec<SavedPalette>,
    storage: StorageManager,
    palette_size: usize,
}

impl PaletteLibrary {
    /// Loads the library, failing on a corrupt store.
    pub fn load(storage: StorageManager, palette_size: usize) -> Result<Self> {
        let palettes = storage.load_palettes()?;
        info!(count = palettes.len(), "Loaded saved palettes");
        Ok(Self {
            palettes,
            storage,
            palette_size,
        })
    }

    /// Loads the library, starting empty when the store cannot be read.
    ///
    /// A corrupt store file is moved aside first. The returned message
    /// describes what happened so the caller can show it.
    pub fn open(storage: StorageManager, palette_size: usize) -> (Self, Option<String>) {
        let (palettes, warning) = match storage.load_palettes() {
            Ok(palettes) => (palettes, None),
            Err(PaletteError::CorruptStore(e)) => {
                warn!(error = %e, "Palette store is corrupt, starting with an empty library");
                let warning = match storage.quarantine_store() {
                    Ok(path) => format!(
                        "Saved palettes were unreadable and moved to {}",
                        path.display()
                    ),
                    Err(e) => format!("Saved palettes are unreadable: {}", e),
                };
                (Vec::new(), Some(warning))
            }
            Err(e) => {
                warn!(error = %e, "Could not read palette store");
                (Vec::new(), Some(format!("Could not read saved palettes: {}", e)))
            }
        };

        info!(count = palettes.len(), "Opened palette library");
        let library = Self {
            palettes,
            storage,
            palette_size,
        };
        (library, warning)
    }

    pub fn storage(&self) -> &StorageManager {
        &self.storage
    }

    /// The saved palettes, oldest first.
    pub fn palettes(&self) -> &[SavedPalette] {
        &self.palettes
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Rereads the store from disk.
    pub fn reload(&mut self) -> Result<&[SavedPalette]> {
        self.palettes = self.storage.load_palettes()?;
        Ok(&self.palettes)
    }

    /// Saves a snapshot under `name`.
    ///
    /// The store is reread first so palettes saved by another process are
    /// kept. It is rewritten before the in-memory list changes, so a failed
    /// write leaves the library as it was.
    pub fn save(&mut self, name: impl Into<String>, colors: &[Color]) -> Result<SavedPalette> {
        if colors.len() != self.palette_size {
            return Err(PaletteError::ShapeMismatch {
                expected: self.palette_size,
                actual: colors.len(),
            });
        }

        let mut updated = self.storage.load_palettes()?;
        let palette = SavedPalette {
            name: name.into(),
            colors: colors.to_vec(),
            nr: next_nr(&updated)?,
            saved_at: Some(Utc::now()),
        };

        updated.push(palette.clone());
        self.storage.save_palettes(&updated)?;
        self.palettes = updated;

        info!(nr = palette.nr, name = %palette.name, "Saved palette");
        Ok(palette)
    }

    pub fn select(&self, nr: u32) -> Result<&SavedPalette> {
        self.palettes
            .iter()
            .find(|p| p.nr == nr)
            .ok_or(PaletteError::PaletteNotFound(nr))
    }

    /// Looks a palette up by number, then exact name, then partial name.
    pub fn find(&self, query: &str) -> Option<&SavedPalette> {
        if let Ok(nr) = query.trim().parse::<u32>() {
            if let Ok(palette) = self.select(nr) {
                return Some(palette);
            }
        }

        let query = query.to_lowercase();
        self.palettes
            .iter()
            .find(|p| p.name.to_lowercase() == query)
            .or_else(|| {
                self.palettes
                    .iter()
                    .find(|p| p.name.to_lowercase().contains(&query))
            })
    }
}

/// One past the largest number in use, 0 for an empty store.
fn next_nr(palettes: &[SavedPalette]) -> Result<u32> {
    match palettes.iter().map(|p| p.nr).max() {
        None => Ok(0),
        Some(nr) => nr.checked_add(1).ok_or(PaletteError::NumbersExhausted(nr)),
    }
}
