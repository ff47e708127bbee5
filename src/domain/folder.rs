//! Folder model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A named group of entries. Folders never own their entries' lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub created_at: i64,
    /// Fields this version does not model, written back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Folder {
    pub fn new(id: String, name: String, now: i64) -> Self {
        Folder {
            id,
            name,
            created_at: now,
            extra: Map::new(),
        }
    }
}

/// Which slice of the entry collection a listing should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderFilter {
    /// Every entry regardless of folder
    All,
    /// Entries not assigned to any folder
    Unfiled,
    /// Entries assigned to the folder with this id
    Folder(String),
}

impl FolderFilter {
    pub fn matches(&self, folder_id: Option<&str>) -> bool {
        match self {
            FolderFilter::All => true,
            FolderFilter::Unfiled => folder_id.is_none(),
            FolderFilter::Folder(id) => folder_id == Some(id.as_str()),
        }
    }
}
