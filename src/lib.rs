//! jotbook - Terminal journal application
//!
//! Entries and folders are kept in a small key-value blob store inside the
//! journal's `.jotbook` directory. Entries can be filed into folders, tagged
//! with a palette color and previewed as HTML through a lightweight markdown
//! renderer.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JotbookError;
