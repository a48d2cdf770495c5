//! Application settings persistence for My Diary.
//!
//! Stores user preferences (currently the diary database location) in a JSON
//! file at an OS-appropriate location.

use mydiary_core::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the diary database when no other location is configured.
pub const DEFAULT_DATABASE_NAME: &str = "demoapp.db";

/// Persisted application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// SQLite file holding the diary entries.
    pub database_path: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            database_path: default_database_path().to_string_lossy().to_string(),
        }
    }
}

/// Returns the path to the settings JSON file.
///
/// - macOS / Linux: `~/.config/mydiary/settings.json`
/// - Windows: `%APPDATA%/MyDiary/settings.json`
pub fn settings_file_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("MyDiary").join("settings.json")
    }
    #[cfg(not(target_os = "windows"))]
    {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config").join("mydiary").join("settings.json")
    }
}

/// Returns the default database location: `~/Documents/MyDiary/demoapp.db`.
pub fn default_database_path() -> PathBuf {
    dirs::document_dir()
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Documents")
        })
        .join("MyDiary")
        .join(DEFAULT_DATABASE_NAME)
}

/// Loads settings from disk; returns defaults if the file is missing or corrupt.
pub fn load_settings() -> AppSettings {
    load_settings_from(&settings_file_path())
}

pub fn load_settings_from(path: &Path) -> AppSettings {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("ignoring unreadable settings at {}: {e}", path.display());
            AppSettings::default()
        }),
        Err(_) => AppSettings::default(),
    }
}

/// Saves settings to disk, creating parent directories as needed.
pub fn save_settings(settings: &AppSettings) -> Result<()> {
    save_settings_to(&settings_file_path(), settings)
}

pub fn save_settings_to(path: &Path, settings: &AppSettings) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}
