//! Error types for jotbook

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for jotbook application
#[derive(Debug, Error)]
pub enum JotbookError {
    #[error("Not a jotbook directory: {0}")]
    NotJotbookDirectory(PathBuf),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),
}

impl JotbookError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JotbookError::NotJotbookDirectory(_) => 2,
            JotbookError::EntryNotFound(_) | JotbookError::FolderNotFound(_) => 3,
            JotbookError::InvalidColor(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JotbookError::NotJotbookDirectory(path) => {
                format!(
                    "Not a jotbook directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'jotbook init' in this directory to create a new journal\n\
                    • Navigate to an existing jotbook directory\n\
                    • Set JOTBOOK_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            JotbookError::EntryNotFound(id) => {
                format!(
                    "No entry with id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'jotbook list' to see entry ids\n\
                    • The entry may already have been deleted",
                    id
                )
            }
            JotbookError::FolderNotFound(id) => {
                format!(
                    "No folder with id '{}'\n\n\
                    Suggestions:\n\
                    • Use 'jotbook folder list' to see folder ids\n\
                    • The folder may already have been deleted",
                    id
                )
            }
            JotbookError::InvalidColor(color) => {
                format!(
                    "Invalid color: '{}'\n\n\
                    Valid colors: default, red, orange, yellow, green, blue, purple, pink\n\
                    Example: jotbook color <ID> blue",
                    color
                )
            }
            JotbookError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: jotbook config editor 'vim'\n\
                    • Pass the text directly with --content",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JotbookError
pub type Result<T> = std::result::Result<T, JotbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_jotbook_directory_suggestion() {
        let err = JotbookError::NotJotbookDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("jotbook init"));
        assert!(msg.contains("JOTBOOK_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_entry_not_found_suggestions() {
        let err = JotbookError::EntryNotFound("abc".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'abc'"));
        assert!(msg.contains("jotbook list"));
        assert!(msg.contains("already have been deleted"));
    }

    #[test]
    fn test_folder_not_found_suggestions() {
        let err = JotbookError::FolderNotFound("f1".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("jotbook folder list"));
    }

    #[test]
    fn test_invalid_color_lists_palette() {
        let err = JotbookError::InvalidColor("teal".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'teal'"));
        assert!(msg.contains("default, red, orange"));
    }

    #[test]
    fn test_editor_error_suggestions() {
        let err = JotbookError::Editor("Editor not found".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("EDITOR environment variable"));
        assert!(msg.contains("jotbook config editor"));
        assert!(msg.contains("--content"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            JotbookError::NotJotbookDirectory(PathBuf::from(".")).exit_code(),
            2
        );
        assert_eq!(JotbookError::EntryNotFound("x".into()).exit_code(), 3);
        assert_eq!(JotbookError::FolderNotFound("x".into()).exit_code(), 3);
        assert_eq!(JotbookError::InvalidColor("x".into()).exit_code(), 4);
        assert_eq!(JotbookError::Config("x".into()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = JotbookError::Config("bad key".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Configuration error: bad key");
    }
}
