//! Configuration loading and path resolution.
//!
//! Settings come from `<config_dir>/swatch/config.toml` (or the file named by
//! `SWATCH_CONFIG`). Every key is optional. The data directory resolves in
//! this order:
//!
//! 1. `SWATCH_DATA_DIR`
//! 2. `data_dir` in the config file
//! 3. the platform data directory joined with `swatch`

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application name used for config and data directories.
pub const APP_NAME: &str = "swatch";
pub const CONFIG_FILE: &str = "config.toml";
pub const LOGS_DIR: &str = "logs";

pub const MAX_PALETTE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of slots in every palette.
    pub palette_size: usize,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Hue change per nudge, in degrees.
    pub hue_step: f32,
    /// Saturation and lightness change per nudge.
    pub fraction_step: f32,
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            palette_size: 5,
            log_level: String::from("info"),
            hue_step: 5.0,
            fraction_step: 0.05,
            data_dir: None,
        }
    }
}

impl Config {
    /// Loads the config file if one exists, otherwise the defaults.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.palette_size == 0 || self.palette_size > MAX_PALETTE_SIZE {
            bail!(
                "palette_size must be between 1 and {}, got {}",
                MAX_PALETTE_SIZE,
                self.palette_size
            );
        }
        if !(self.hue_step > 0.0 && self.hue_step <= 360.0) {
            bail!("hue_step must be in (0, 360], got {}", self.hue_step);
        }
        if !(self.fraction_step > 0.0 && self.fraction_step <= 1.0) {
            bail!("fraction_step must be in (0, 1], got {}", self.fraction_step);
        }
        Ok(())
    }

    /// Resolves the directory holding the palette store and logs.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Ok(val) = std::env::var("SWATCH_DATA_DIR") {
            if !val.is_empty() {
                return Ok(PathBuf::from(val));
            }
        }

        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        let base = dirs::data_dir().context("Failed to get data directory")?;
        Ok(base.join(APP_NAME))
    }

    pub fn logs_dir(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(LOGS_DIR))
    }
}

fn config_path() -> Option<PathBuf> {
    if let Ok(val) = std::env::var("SWATCH_CONFIG") {
        if !val.is_empty() {
            return Some(PathBuf::from(val));
        }
    }
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str("palette_size = 7\nhue_step = 1.5\n").unwrap();
        assert_eq!(config.palette_size, 7);
        assert_eq!(config.hue_step, 1.5);
        assert_eq!(config.fraction_step, 0.05);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Config::from_toml_str("palette_size = 0").is_err());
        assert!(Config::from_toml_str("palette_size = 11").is_err());
        assert!(Config::from_toml_str("hue_step = -1.0").is_err());
        assert!(Config::from_toml_str("fraction_step = 2.0").is_err());
        assert!(Config::from_toml_str("palette_size = \"five\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "data_dir = \"/tmp/swatch-test\"\nlog_level = \"debug\"").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/swatch-test")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
    }
}
