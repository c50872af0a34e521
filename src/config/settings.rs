//! User settings for the budget planner
//!
//! Stored as JSON in `config.json`. Every field has a default, so a missing
//! or partial file is fine.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::PlannerPaths;
use crate::error::PlannerError;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// File used when the save/load prompt is left blank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_file: Option<PathBuf>,

    /// Whether to print the welcome banner on start
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_show_banner() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_file: None,
            show_banner: default_show_banner(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &PlannerPaths) -> Result<Self, PlannerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Defaults are never written back to disk.
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PlannerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| PlannerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// The file to use when no filename is given
    pub fn data_file(&self, paths: &PlannerPaths) -> PathBuf {
        self.default_file
            .clone()
            .unwrap_or_else(|| paths.default_data_file())
    }
}
