//! Infrastructure layer - External I/O and persistence

pub mod blob_store;
pub mod config;
pub mod editor;
pub mod repository;

pub use blob_store::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use config::Config;
pub use editor::EditorSession;
pub use repository::{FileSystemRepository, JournalRepository};
