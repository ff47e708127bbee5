//! Editor integration for composing entry text

use crate::error::{JotbookError, Result};
use std::fs;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Session for editing text in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Open `initial` in the editor, wait for it to exit and return the
    /// edited text.
    pub fn edit(&self, initial: &str) -> Result<String> {
        let file = tempfile::Builder::new()
            .prefix("jotbook-")
            .suffix(".md")
            .tempfile()?;
        fs::write(file.path(), initial)?;

        self.run(file.path())?;

        let edited = fs::read_to_string(file.path())?;
        Ok(edited)
    }

    /// Run the editor on a file and block until it exits
    fn run(&self, file_path: &Path) -> Result<()> {
        let (program, args) = self.parse_command();

        let mut all_args = args;
        all_args.push(file_path.to_string_lossy().to_string());

        debug!("Launching editor '{}' with {:?}", program, all_args);

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        #[cfg(windows)]
        let status = Command::new("cmd")
            .arg("/C")
            .arg(&program)
            .args(&all_args)
            .status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&all_args).status();

        let status = status.map_err(|e| {
            JotbookError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(JotbookError::Editor(format!(
                "Editor '{}' exited with {}",
                program, status
            )));
        }

        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let mut parts = self.command.split_whitespace().map(str::to_string);

        match parts.next() {
            Some(program) => (program, parts.collect()),
            None if cfg!(windows) => ("notepad".to_string(), vec![]),
            None => ("nano".to_string(), vec![]),
        }
    }
}
