pub mod settings;
pub mod tasks;
pub mod ui;

// Re-export core library
pub use mydiary_core::{DiaryError, DiarySession, Entry, EntryDraft, Journal, Storage};

use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop the application before or while the window runs.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Could not open diary: {0}")]
    Diary(#[from] DiaryError),

    #[error("Could not prepare diary directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("UI error: {0}")]
    Ui(#[from] iced::Error),
}

/// Loads settings, opens the diary database and runs the window until it closes.
///
/// The schema is not created here; the window does that on mount and keeps
/// running if it fails.
pub fn run() -> std::result::Result<(), LaunchError> {
    let settings_path = settings::settings_file_path();
    let app_settings = settings::load_settings();
    if !settings_path.exists() {
        if let Err(e) = settings::save_settings(&app_settings) {
            log::warn!("could not write default settings: {e}");
        }
    }

    let db_path = PathBuf::from(&app_settings.database_path);
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    log::info!("opening diary at {}", db_path.display());
    let journal = Journal::from_storage(Storage::open(&db_path)?);
    ui::app::run(journal)?;
    Ok(())
}
