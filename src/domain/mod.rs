//! Domain layer - Journal models and pure transformations

pub mod clock;
pub mod color;
pub mod entry;
pub mod excerpt;
pub mod folder;
pub mod markdown;
pub mod migration;

pub use clock::{Clock, SystemClock};
pub use color::EntryColor;
pub use entry::Entry;
pub use folder::{Folder, FolderFilter};
pub use markdown::{render_markdown, render_markdown_with, RenderOptions};
