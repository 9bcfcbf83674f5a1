use crate::partitioner::GroupSize;
use crate::roster::{AppState, Roster, RosterError, DEFAULT_STUDENTS};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const APP_NAME: &str = "group-generator";
pub const CONFIG_FILE: &str = "config.json";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid roster: {0}")]
    Roster(#[from] RosterError),
}

/// Starting roster and group size for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Student identifiers, in display order. Must be unique.
    pub students: Vec<String>,
    pub group_size: GroupSize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            students: DEFAULT_STUDENTS.iter().map(|s| s.to_string()).collect(),
            group_size: GroupSize::default(),
        }
    }
}

impl Settings {
    /// Resolve settings for this run.
    ///
    /// An explicit path must exist and parse. Without one, the per-user config
    /// file is used when present and anything wrong with it falls back to the
    /// built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_from(explicit, default_config_path())
    }

    /// [`Settings::load`] with the per-user path supplied by the caller.
    pub fn load_from(explicit: Option<&Path>, implicit: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let Some(path) = implicit else {
            tracing::debug!("no user config directory, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        match Self::from_file(&path) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!(path = %path.display(), "failed to load config, using defaults: {e:#}");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let settings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Fresh session state with everyone present.
    pub fn into_state(self) -> Result<AppState, ConfigError> {
        let roster = Roster::new(self.students)?;
        Ok(AppState::new(roster, self.group_size))
    }
}

/// `<config dir>/group-generator/config.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
}
