//! Entry and folder store
//!
//! The store is the only writer of the two persisted collections. Every
//! mutating call loads the current collection, applies the change and writes
//! the whole collection back, so callers only ever hold snapshots.

use crate::domain::migration::{parse_entries, parse_folders};
use crate::domain::{Clock, Entry, EntryColor, Folder, FolderFilter, SystemClock};
use crate::error::Result;
use crate::infrastructure::BlobStore;
use tracing::{debug, warn};
use uuid::Uuid;

/// Blob key of the entry collection
pub const ENTRIES_KEY: &str = "journal-entries";
/// Blob key of the folder collection
pub const FOLDERS_KEY: &str = "journal-folders";

/// CRUD over entries and folders on top of a [`BlobStore`].
///
/// Lookups that miss return `None` (or `false`); only a failed write to the
/// backing store is an error.
pub struct JournalStore<B: BlobStore, C: Clock = SystemClock> {
    blobs: B,
    clock: C,
}

impl<B: BlobStore> JournalStore<B, SystemClock> {
    pub fn new(blobs: B) -> Self {
        Self::with_clock(blobs, SystemClock)
    }
}

impl<B: BlobStore, C: Clock> JournalStore<B, C> {
    pub fn with_clock(blobs: B, clock: C) -> Self {
        JournalStore { blobs, clock }
    }

    /// The backing blob store
    pub fn blobs(&self) -> &B {
        &self.blobs
    }

    /// All entries, newest created first, with schema migration applied
    pub fn list_entries(&self) -> Vec<Entry> {
        let Some(blob) = self.blobs.get(ENTRIES_KEY) else {
            return Vec::new();
        };
        parse_entries(&blob).unwrap_or_else(|| {
            warn!("Stored entry collection is malformed; treating it as empty");
            Vec::new()
        })
    }

    /// All folders in creation order
    pub fn list_folders(&self) -> Vec<Folder> {
        let Some(blob) = self.blobs.get(FOLDERS_KEY) else {
            return Vec::new();
        };
        parse_folders(&blob).unwrap_or_else(|| {
            warn!("Stored folder collection is malformed; treating it as empty");
            Vec::new()
        })
    }

    /// Create an entry and put it at the front of the collection.
    ///
    /// `folder_id` is not checked against the folder collection.
    pub fn create_entry(
        &mut self,
        title: &str,
        content: &str,
        folder_id: Option<&str>,
    ) -> Result<Entry> {
        self.create_entry_with_color(title, content, folder_id, EntryColor::default())
    }

    /// Like [`create_entry`](Self::create_entry), but with an initial color tag
    pub fn create_entry_with_color(
        &mut self,
        title: &str,
        content: &str,
        folder_id: Option<&str>,
        color: EntryColor,
    ) -> Result<Entry> {
        let mut entries = self.list_entries();
        let mut entry = Entry::new(
            Uuid::new_v4().to_string(),
            title.to_string(),
            content.to_string(),
            folder_id.map(str::to_string),
            self.clock.now_millis(),
        );
        entry.color = color.as_str().to_string();

        entries.insert(0, entry.clone());
        self.save_entries(&entries)?;

        debug!("Created entry {}", entry.id);
        Ok(entry)
    }

    /// Replace an entry's title and content
    pub fn update_entry(&mut self, id: &str, title: &str, content: &str) -> Result<Option<Entry>> {
        self.modify_entry(id, |entry| {
            entry.title = title.to_string();
            entry.content = content.to_string();
        })
    }

    /// Replace an entry's color tag
    pub fn update_entry_color(&mut self, id: &str, color: EntryColor) -> Result<Option<Entry>> {
        self.modify_entry(id, |entry| {
            entry.color = color.as_str().to_string();
        })
    }

    /// Assign an entry to a folder, or to no folder with `None`.
    ///
    /// Returns `false` without writing if the entry does not exist. The
    /// folder id is not checked against the folder collection.
    pub fn move_entry_to_folder(&mut self, id: &str, folder_id: Option<&str>) -> Result<bool> {
        let moved = self.modify_entry(id, |entry| {
            entry.folder_id = folder_id.map(str::to_string);
        })?;
        Ok(moved.is_some())
    }

    /// Remove an entry; missing ids are ignored
    pub fn delete_entry(&mut self, id: &str) -> Result<()> {
        let mut entries = self.list_entries();
        let before = entries.len();
        entries.retain(|e| e.id != id);

        if entries.len() != before {
            self.save_entries(&entries)?;
            debug!("Deleted entry {}", id);
        }
        Ok(())
    }

    pub fn get_entry(&self, id: &str) -> Option<Entry> {
        self.list_entries().into_iter().find(|e| e.id == id)
    }

    /// Create a folder at the end of the collection
    pub fn create_folder(&mut self, name: &str) -> Result<Folder> {
        let mut folders = self.list_folders();
        let folder = Folder::new(
            Uuid::new_v4().to_string(),
            name.to_string(),
            self.clock.now_millis(),
        );

        folders.push(folder.clone());
        self.save_folders(&folders)?;

        debug!("Created folder {} ({})", folder.id, folder.name);
        Ok(folder)
    }

    /// Rename a folder in place
    pub fn update_folder(&mut self, id: &str, name: &str) -> Result<Option<Folder>> {
        let mut folders = self.list_folders();
        let Some(folder) = folders.iter_mut().find(|f| f.id == id) else {
            return Ok(None);
        };

        folder.name = name.to_string();
        let updated = folder.clone();
        self.save_folders(&folders)?;

        debug!("Renamed folder {} to {}", id, name);
        Ok(Some(updated))
    }

    /// Remove a folder, then detach every entry that referenced it.
    ///
    /// Entries are never deleted with their folder. The detach pass runs even
    /// when the folder itself is already gone, which clears any dangling
    /// references to that id.
    pub fn delete_folder(&mut self, id: &str) -> Result<()> {
        let mut folders = self.list_folders();
        let before = folders.len();
        folders.retain(|f| f.id != id);
        if folders.len() != before {
            self.save_folders(&folders)?;
            debug!("Deleted folder {}", id);
        }

        let mut entries = self.list_entries();
        let mut detached = 0usize;
        for entry in entries.iter_mut().filter(|e| e.is_in_folder(id)) {
            entry.folder_id = None;
            detached += 1;
        }
        if detached > 0 {
            self.save_entries(&entries)?;
            debug!("Detached {} entries from folder {}", detached, id);
        }

        Ok(())
    }

    pub fn get_folder(&self, id: &str) -> Option<Folder> {
        self.list_folders().into_iter().find(|f| f.id == id)
    }

    /// Entries matching `filter`, in storage order
    pub fn entries_in_folder(&self, filter: &FolderFilter) -> Vec<Entry> {
        self.list_entries()
            .into_iter()
            .filter(|e| filter.matches(e.folder_id.as_deref()))
            .collect()
    }

    /// Each folder with the number of entries assigned to it
    pub fn folder_entry_counts(&self) -> Vec<(Folder, usize)> {
        let entries = self.list_entries();
        self.list_folders()
            .into_iter()
            .map(|folder| {
                let count = entries.iter().filter(|e| e.is_in_folder(&folder.id)).count();
                (folder, count)
            })
            .collect()
    }

    /// Apply `change` to one entry, refresh `updated_at` and persist.
    fn modify_entry<F>(&mut self, id: &str, change: F) -> Result<Option<Entry>>
    where
        F: FnOnce(&mut Entry),
    {
        let mut entries = self.list_entries();
        let Some(entry) = entries.iter_mut().find(|e| e.id == id) else {
            debug!("Entry {} not found; nothing to update", id);
            return Ok(None);
        };

        change(entry);
        entry.updated_at = self.clock.now_millis();
        let updated = entry.clone();

        self.save_entries(&entries)?;
        debug!("Updated entry {}", id);
        Ok(Some(updated))
    }

    fn save_entries(&mut self, entries: &[Entry]) -> Result<()> {
        let blob = serde_json::to_string(entries)?;
        self.blobs.set(ENTRIES_KEY, &blob)
    }

    fn save_folders(&mut self, folders: &[Folder]) -> Result<()> {
        let blob = serde_json::to_string(folders)?;
        self.blobs.set(FOLDERS_KEY, &blob)
    }
}
