//! Application layer - Use cases and orchestration

pub mod compose;
pub mod init;
pub mod journal_store;
pub mod manage_config;
pub mod preview;

pub use compose::ComposeService;
pub use journal_store::{JournalStore, ENTRIES_KEY, FOLDERS_KEY};
pub use manage_config::ConfigService;
pub use preview::{preview_document, preview_fragment};
