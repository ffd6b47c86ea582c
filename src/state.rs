//! First-launch state, persisted as a small key-value file next to the
//! database. The seeding flag lives outside SQLite on purpose: dropping and
//! recreating the tables must not clear it, only an explicit reset does.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub seeded: bool,
}

impl AppState {
    /// State file sits beside the database it describes, so every store
    /// (including test databases opened with `--db`) carries its own flag.
    pub fn file_for(db_path: &str) -> PathBuf {
        PathBuf::from(format!("{}.state", db_path))
    }

    /// Load the recorded state for a database; a missing or unreadable file
    /// means "never seeded".
    pub fn load(db_path: &str) -> Self {
        let path = Self::file_for(db_path);
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, db_path: &str) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::State(e.to_string()))?;
        fs::write(Self::file_for(db_path), yaml)?;
        Ok(())
    }

    pub fn mark_seeded(db_path: &str) -> AppResult<()> {
        AppState { seeded: true }.save(db_path)
    }
}
