//! Configuration management

use crate::domain::EntryColor;
use crate::error::{JotbookError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the per-journal metadata directory
pub const JOTBOOK_DIR: &str = ".jotbook";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub editor: String,
    /// Color given to entries created from the CLI
    #[serde(default)]
    pub default_color: EntryColor,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            editor: Self::detect_default_editor(),
            default_color: EntryColor::default(),
            created: Utc::now(),
        }
    }

    /// Load config from .jotbook/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(JOTBOOK_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                JotbookError::NotJotbookDirectory(path.to_path_buf())
            } else {
                JotbookError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| JotbookError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .jotbook/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let jotbook_dir = path.join(JOTBOOK_DIR);
        let config_path = jotbook_dir.join("config.toml");

        if !jotbook_dir.exists() {
            fs::create_dir(&jotbook_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| JotbookError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Detect default editor from environment or system
    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
