//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jotbook")]
#[command(about = "Terminal journal with folders, color tags and markdown preview", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Create a new entry
    New {
        /// Entry title
        #[arg(short, long, default_value = "")]
        title: String,

        /// Entry text; opens the editor when omitted
        #[arg(short, long)]
        content: Option<String>,

        /// Folder id to file the entry under
        #[arg(short, long)]
        folder: Option<String>,
    },

    /// Edit an entry's title and text
    Edit {
        /// Entry id
        id: String,

        /// New title (keeps the current title when omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// New text; opens the editor when omitted
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Show an entry
    Show {
        /// Entry id
        id: String,
    },

    /// List entries
    List {
        /// Only entries in this folder
        #[arg(short, long, conflicts_with = "unfiled")]
        folder: Option<String>,

        /// Only entries not in any folder
        #[arg(short, long)]
        unfiled: bool,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Set an entry's color tag
    Color {
        /// Entry id
        id: String,

        /// Palette color (default, red, orange, yellow, green, blue, purple, pink)
        color: String,
    },

    /// Move an entry into a folder, or out of all folders when none is given
    Move {
        /// Entry id
        id: String,

        /// Target folder id
        folder: Option<String>,
    },

    /// Render an entry's text to HTML
    Preview {
        /// Entry id
        id: String,

        /// Escape HTML in the entry text before rendering
        #[arg(short, long)]
        escape: bool,

        /// Write a standalone HTML page to this file instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage folders
    Folder {
        #[command(subcommand)]
        command: FolderCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum FolderCommands {
    /// List folders with their entry counts
    List,

    /// Create a folder
    New {
        /// Folder name
        name: String,
    },

    /// Rename a folder
    Rename {
        /// Folder id
        id: String,

        /// New name
        name: String,
    },

    /// Delete a folder; its entries move to "All Entries"
    Delete {
        /// Folder id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
