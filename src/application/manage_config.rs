//! Config management use case

use crate::domain::EntryColor;
use crate::error::{JotbookError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::str::FromStr;

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "editor" => Ok(config.editor.clone()),
            "default_color" => Ok(config.default_color.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(JotbookError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: editor, default_color, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "editor" => {
                config.editor = value.to_string();
            }
            "default_color" => {
                config.default_color =
                    EntryColor::from_str(value).map_err(|_| JotbookError::InvalidColor(value.to_string()))?;
            }
            "created" => {
                return Err(JotbookError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(JotbookError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: editor, default_color",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
