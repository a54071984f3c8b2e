use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::QuestResult;

pub const DATA_DIR_ENV: &str = "COLOUR_QUEST_DATA_DIR";
const DEFAULT_DATA_DIR: &str = ".colour_quest";
const SETTINGS_FILE: &str = "settings.json";
const CURRENT_VERSION: u32 = 2;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default = "default_rounds_wanted")]
    pub rounds_wanted: usize,

    #[serde(default = "default_true")]
    pub show_comment_highlight: bool,
}

// Helper functions for default values
fn default_version() -> u32 {
    CURRENT_VERSION
}
fn default_rounds_wanted() -> usize {
    5
}
fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: CURRENT_VERSION,
            rounds_wanted: default_rounds_wanted(),
            show_comment_highlight: true,
        }
    }
}

impl Settings {
    /// Loads from the data directory, writing defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        Self::load_from(&Self::settings_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            match serde_json::from_str::<Settings>(&contents) {
                Ok(mut settings) => {
                    settings.migrate();
                    return settings;
                }
                Err(err) => {
                    warn!(target: "settings", "Ignoring unreadable settings at {}: {}", path.display(), err)
                }
            }
        }
        let default = Settings::default();
        if let Err(err) = default.save_to(path) {
            warn!(target: "settings", "Could not write default settings: {}", err);
        }
        default
    }

    pub fn save_to(&self, path: &Path) -> QuestResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        debug!(target: "settings", "Saved settings to {}", path.display());
        Ok(())
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn data_dir() -> PathBuf {
        std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    fn settings_path() -> PathBuf {
        Self::data_dir().join(SETTINGS_FILE)
    }

    fn migrate(&mut self) {
        // version 1 allowed a zero round count
        if self.version < 2 {
            if self.rounds_wanted == 0 {
                self.rounds_wanted = default_rounds_wanted();
            }
            self.version = 2;
        }
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(SETTINGS_FILE);
        let settings = Settings::load_from(&path);
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        let settings = Settings {
            rounds_wanted: 8,
            show_comment_highlight: false,
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, r#"{"version": 2, "rounds_wanted": 3}"#).unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.rounds_wanted, 3);
        assert!(settings.show_comment_highlight);
    }

    #[test]
    fn test_migrates_zero_rounds_from_v1() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, r#"{"version": 1, "rounds_wanted": 0}"#).unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.rounds_wanted, 5);
        assert_eq!(settings.version(), CURRENT_VERSION);
    }

    #[test]
    fn test_garbage_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "not json").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    #[serial]
    fn test_data_dir_from_env() {
        let dir = tempdir().unwrap();
        std::env::set_var(DATA_DIR_ENV, dir.path());
        assert_eq!(Settings::data_dir(), dir.path());
        let settings = Settings::load();
        std::env::remove_var(DATA_DIR_ENV);
        assert_eq!(settings, Settings::default());
        assert!(dir.path().join(SETTINGS_FILE).exists());
    }

    #[test]
    #[serial]
    fn test_debug_mode_from_env() {
        std::env::set_var("DEBUG", "1");
        assert!(Settings::is_debug_mode());
        std::env::set_var("DEBUG", "0");
        assert!(!Settings::is_debug_mode());
        std::env::remove_var("DEBUG");
    }
}
