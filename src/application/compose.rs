//! Compose entry text use case

use crate::error::Result;
use crate::infrastructure::EditorSession;

/// Supplies entry content, either given directly or written in an editor
pub struct ComposeService {
    editor: EditorSession,
}

impl ComposeService {
    pub fn new(editor_command: String) -> Self {
        ComposeService {
            editor: EditorSession::new(editor_command),
        }
    }

    /// Use `provided` when present, otherwise open the editor on `initial`.
    ///
    /// A single trailing newline added by the editor is dropped.
    pub fn content(&self, provided: Option<String>, initial: &str) -> Result<String> {
        if let Some(text) = provided {
            return Ok(text);
        }

        let edited = self.editor.edit(initial)?;
        Ok(strip_trailing_newline(edited))
    }
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
