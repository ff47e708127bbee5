//! File system repository

use crate::error::{JotbookError, Result};
use crate::infrastructure::config::JOTBOOK_DIR;
use crate::infrastructure::{Config, FileBlobStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a journal root
pub const JOTBOOK_ROOT_ENV: &str = "JOTBOOK_ROOT";

/// Abstract repository for journal directory operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .jotbook/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .jotbook/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .jotbook directory exists
    fn is_initialized(&self) -> bool;

    /// Create .jotbook directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks JOTBOOK_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(JOTBOOK_ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_jotbook_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(JotbookError::Config(format!(
                    "JOTBOOK_ROOT is set to '{}' but no .jotbook directory found. \
                    Run 'jotbook init' in that directory or unset JOTBOOK_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_jotbook_dir(dir))
            .map(|dir| FileSystemRepository::new(dir.to_path_buf()))
            .ok_or_else(|| JotbookError::NotJotbookDirectory(start.to_path_buf()))
    }

    /// Blob store holding this journal's entry and folder collections
    pub fn blob_store(&self) -> FileBlobStore {
        FileBlobStore::new(self.root.join(JOTBOOK_DIR))
    }

    fn has_jotbook_dir(path: &Path) -> bool {
        path.join(JOTBOOK_DIR).is_dir()
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_jotbook_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let jotbook_dir = self.root.join(JOTBOOK_DIR);

        if jotbook_dir.exists() {
            return Err(JotbookError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&jotbook_dir)?;
        Ok(())
    }
}
