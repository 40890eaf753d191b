use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Role;

/// File name of the screen configuration, looked up next to the executable
pub const DEFAULT_CONFIG_FILE: &str = "screen.json";

/// Error type for loading the screen configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse screen configuration")]
    Parse(#[from] serde_json::Error),
}

type Result<T = ()> = std::result::Result<T, ConfigError>;

/// One screen of the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Device identifier of the display
    #[serde(rename = "DisplayName")]
    pub display_name: String,
    /// Role label of the display
    #[serde(rename = "NickName")]
    pub nick_name: String,
}

impl ConfigEntry {
    pub fn new(display_name: impl Into<String>, nick_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            nick_name: nick_name.into(),
        }
    }

    /// The role this entry assigns, `Unknown` if the label is not valid
    pub fn role(&self) -> Role {
        Role::from_label(&self.nick_name)
    }

    pub fn has_valid_role(&self) -> bool {
        self.role().is_assignable()
    }
}

/// The saved screen configuration.
///
/// Entries are kept in file order; lookups that can match several entries
/// return the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenConfig {
    screens: Vec<ConfigEntry>,
}

impl ScreenConfig {
    pub fn new(screens: Vec<ConfigEntry>) -> Self {
        Self { screens }
    }

    /// Reads and parses the configuration file at `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading screen configuration from {}", path.display());

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parses a configuration document
    pub fn from_json(text: &str) -> Result<Self> {
        let config: ScreenConfig = serde_json::from_str(text)?;
        log::debug!("Parsed {} configured screens", config.screens.len());
        Ok(config)
    }

    pub fn screens(&self) -> &[ConfigEntry] {
        &self.screens
    }

    /// Iterates over the entries carrying `role`, in file order
    pub fn entries_for(&self, role: Role) -> impl Iterator<Item = &ConfigEntry> {
        let label = role.label();
        self.screens
            .iter()
            .filter(move |entry| label.is_some_and(|label| entry.nick_name == label))
    }

    /// Returns the device identifier configured for `role`.
    ///
    /// Later entries override earlier ones, so the last entry carrying the role wins.
    pub fn assigned_device(&self, role: Role) -> Option<&str> {
        self.entries_for(role)
            .last()
            .map(|entry| entry.display_name.as_str())
    }

    /// Returns the role configured for the device `name`.
    ///
    /// `Some(Role::Unknown)` means the device is listed, but never with a valid label.
    pub fn role_of(&self, name: &str) -> Option<Role> {
        let mut entries = self.screens.iter().filter(|e| e.display_name == name);
        let first = entries.next()?;
        if first.has_valid_role() {
            return Some(first.role());
        }
        Some(
            entries
                .map(ConfigEntry::role)
                .find(Role::is_assignable)
                .unwrap_or(Role::Unknown),
        )
    }
}

/// Returns `screen.json` located next to the running executable
pub fn default_config_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_CONFIG_FILE)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}
