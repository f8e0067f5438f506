use crate::models::error::{PaletteError, Result};
use crate::models::library::SavedPalette;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name of the saved palette store inside the data directory.
pub const STORE_FILE: &str = "palettes.json";

/// Storage Manager for the saved palette file
#[derive(Debug, Clone)]
pub struct StorageManager {
    data_dir: PathBuf,
    store_file: PathBuf,
}

impl StorageManager {
    /// Opens storage rooted at `data_dir`, creating the directory if needed.
    pub fn new(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        debug!(data_dir = %data_dir.display(), "Palette storage initialized");

        Ok(Self {
            store_file: data_dir.join(STORE_FILE),
            data_dir,
        })
    }

    pub fn store_path(&self) -> &Path {
        &self.store_file
    }

    /// Reads every saved palette. A missing or blank store is empty.
    pub fn load_palettes(&self) -> Result<Vec<SavedPalette>> {
        if !self.store_file.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read(&self.store_file)?;
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let palettes: Option<Vec<SavedPalette>> =
            serde_json::from_slice(&content).map_err(PaletteError::CorruptStore)?;
        Ok(palettes.unwrap_or_default())
    }

    /// Rewrites the whole store with `palettes`.
    pub fn save_palettes(&self, palettes: &[SavedPalette]) -> Result<()> {
        let content = serde_json::to_string_pretty(palettes)?;

        let tmp_file = self.store_file.with_extension("json.tmp");
        fs::write(&tmp_file, content)?;
        fs::rename(&tmp_file, &self.store_file)?;

        debug!(count = palettes.len(), path = %self.store_file.display(), "Wrote palette store");
        Ok(())
    }

    /// Moves an unreadable store aside so the next save starts fresh.
    pub fn quarantine_store(&self) -> Result<PathBuf> {
        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
        let target = self
            .data_dir
            .join(format!("{}.corrupt-{}", STORE_FILE, timestamp));

        fs::rename(&self.store_file, &target)?;
        warn!(path = %target.display(), "Moved corrupt palette store aside");
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn palette(nr: u32) -> SavedPalette {
        SavedPalette {
            name: format!("palette {nr}"),
            colors: vec!["#ff0000".parse().unwrap(), "#00ff00".parse().unwrap()],
            nr,
            saved_at: None,
        }
    }

    #[test]
    fn test_missing_store_is_empty() {
        let dir = tempdir().unwrap();
        let storage = StorageManager::new(dir.path().join("nested")).unwrap();
        assert!(dir.path().join("nested").is_dir());
        assert!(storage.load_palettes().unwrap().is_empty());
    }

    #[test]
    fn test_blank_and_null_store_are_empty() {
        let dir = tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();

        fs::write(storage.store_path(), "  \n").unwrap();
        assert!(storage.load_palettes().unwrap().is_empty());

        fs::write(storage.store_path(), "null").unwrap();
        assert!(storage.load_palettes().unwrap().is_empty());
    }

    #[test]
    fn test_save_overwrites_whole_list() {
        let dir = tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();

        storage.save_palettes(&[palette(0), palette(1)]).unwrap();
        storage.save_palettes(&[palette(7)]).unwrap();

        let loaded = storage.load_palettes().unwrap();
        assert_eq!(loaded, vec![palette(7)]);
        assert!(!storage.store_path().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_reads_legacy_records() {
        let dir = tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();
        fs::write(
            storage.store_path(),
            r##"[{"name":"sunset","colors":["#FF8800","#aa0000"],"nr":0}]"##,
        )
        .unwrap();

        let loaded = storage.load_palettes().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "sunset");
        assert_eq!(loaded[0].colors[0].hex(), "#ff8800");
        assert_eq!(loaded[0].saved_at, None);
    }

    #[test]
    fn test_corrupt_store() {
        let dir = tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();

        for content in [
            "{not json",
            r#"{"name":"x"}"#,
            r##"[{"name":"x","colors":["#zzzzzz"],"nr":0}]"##,
            r##"[{"name":"x","colors":["#000000"]}]"##,
        ] {
            fs::write(storage.store_path(), content).unwrap();
            assert!(
                matches!(storage.load_palettes(), Err(PaletteError::CorruptStore(_))),
                "{content} should be reported as corrupt"
            );
        }
    }

    #[test]
    fn test_invalid_utf8_store_is_corrupt() {
        let dir = tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();
        fs::write(storage.store_path(), [0xff, 0xfe, b'[', b']']).unwrap();

        assert!(matches!(
            storage.load_palettes(),
            Err(PaletteError::CorruptStore(_))
        ));
    }

    #[test]
    fn test_quarantine_moves_store() {
        let dir = tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();
        fs::write(storage.store_path(), "garbage").unwrap();

        let moved = storage.quarantine_store().unwrap();
        assert!(!storage.store_path().exists());
        assert_eq!(fs::read_to_string(moved).unwrap(), "garbage");
    }
}
