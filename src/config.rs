//! Configuration management for pastefix.
//!
//! Stored as TOML at `$PASTEFIX_CONFIG`, or `<config dir>/pastefix/config.toml`.
//! A missing file or missing fields fall back to defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::fixer::IndentStyle;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "PASTEFIX_CONFIG";

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub indent: IndentConfig,
    pub paste: PasteConfig,
}

/// Indentation defaults for the paste target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndentConfig {
    /// Indent with spaces (`true`) or tabs (`false`)
    pub insert_spaces: bool,
    /// Spaces per indentation level
    pub tab_size: usize,
}

impl Default for IndentConfig {
    fn default() -> Self {
        Self {
            insert_spaces: true,
            tab_size: 4,
        }
    }
}

/// How the final paste is triggered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasteConfig {
    /// Command that sends the native paste keystroke, e.g.
    /// `xdotool key --clearmodifiers ctrl+v`. Unset when the host pastes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

impl Config {
    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("pastefix").join("config.toml"))
    }

    /// Load config from the default location, or defaults if it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Save config to the default location, creating parent directories.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Serialize as pretty TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Indentation style described by `[indent]`.
    pub fn indent_style(&self) -> IndentStyle {
        IndentStyle::new(self.indent.insert_spaces, self.indent.tab_size)
    }
}
