use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::log_warn;

const ENABLE_LOGS: bool = true;

/// Environment variable pointing at the settings file.
pub const SETTINGS_ENV: &str = "FOOD_DIARY_SETTINGS";
const DEFAULT_SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiarySettings {
    /// Read-only food catalog.
    pub catalog_path: PathBuf,
    /// Append-only consumption log.
    pub records_path: PathBuf,
    /// Maximum number of name suggestions offered while typing.
    pub completion_limit: usize,
}

impl Default for DiarySettings {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("SourceDB.csv"),
            records_path: PathBuf::from("RecordDB.csv"),
            completion_limit: 10,
        }
    }
}

pub struct SettingsStore {
    path: PathBuf,
    data: DiarySettings,
}

impl SettingsStore {
    /// Settings file named by `FOOD_DIARY_SETTINGS`, else `settings.json`.
    pub fn default_path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    /// Missing file means defaults; a file that does not parse is reported
    /// and replaced by defaults.
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log_warn!("Ignoring malformed settings in {}: {err}", path.display());
                DiarySettings::default()
            })
        } else {
            DiarySettings::default()
        };

        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &DiarySettings {
        &self.data
    }

    pub fn update(&mut self, settings: DiarySettings) -> Result<()> {
        self.persist(&settings)?;
        self.data = settings;
        Ok(())
    }

    fn persist(&self, data: &DiarySettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}
