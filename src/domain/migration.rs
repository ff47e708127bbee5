//! Schema migration for persisted collections.
//!
//! This module is I/O-free: it turns blob text into normalized collections.
//! Older blobs may lack `color` and `folderId` on entries; both are filled in
//! on every load so mixed-version data heals without a one-off upgrade step.

use super::{Entry, EntryColor, Folder};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Entry shape accepted on read; newer fields are optional
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEntry {
    id: String,
    title: String,
    content: String,
    #[serde(default)]
    folder_id: Option<String>,
    #[serde(default)]
    color: Option<String>,
    created_at: i64,
    updated_at: i64,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl StoredEntry {
    fn migrate(self) -> Entry {
        let color = match self.color {
            Some(color) if !color.trim().is_empty() => color,
            _ => EntryColor::default().as_str().to_string(),
        };

        Entry {
            id: self.id,
            title: self.title,
            content: self.content,
            folder_id: self.folder_id,
            color,
            created_at: self.created_at,
            updated_at: self.updated_at,
            extra: self.extra,
        }
    }
}

/// Parse and normalize an entry collection blob.
///
/// Returns `None` if the blob is not a valid entry array; callers treat that
/// as an empty collection.
pub fn parse_entries(blob: &str) -> Option<Vec<Entry>> {
    let stored: Vec<StoredEntry> = serde_json::from_str(blob).ok()?;
    Some(stored.into_iter().map(StoredEntry::migrate).collect())
}

/// Parse a folder collection blob.
pub fn parse_folders(blob: &str) -> Option<Vec<Folder>> {
    serde_json::from_str(blob).ok()
}
