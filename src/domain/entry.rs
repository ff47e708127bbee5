//! Journal entry model

use super::EntryColor;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// A single journal entry as persisted in the entry collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub content: String,
    /// `None` means the entry lives only in "All Entries"
    pub folder_id: Option<String>,
    /// Palette tag name, kept as an opaque string
    pub color: String,
    /// Milliseconds since the Unix epoch
    pub created_at: i64,
    pub updated_at: i64,
    /// Fields this version does not model, written back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entry {
    pub fn new(
        id: String,
        title: String,
        content: String,
        folder_id: Option<String>,
        now: i64,
    ) -> Self {
        Entry {
            id,
            title,
            content,
            folder_id,
            color: EntryColor::default().as_str().to_string(),
            created_at: now,
            updated_at: now,
            extra: Map::new(),
        }
    }

    /// The palette color for this entry, if its tag is one we know
    pub fn palette_color(&self) -> Option<EntryColor> {
        EntryColor::from_str(&self.color).ok()
    }

    /// Title for display, falling back when the entry has none
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }

    /// Whether this entry belongs to the given folder
    pub fn is_in_folder(&self, folder_id: &str) -> bool {
        self.folder_id.as_deref() == Some(folder_id)
    }
}
