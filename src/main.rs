use chrono::Local;
use clap::Parser;
use jotbook::application::{
    init::init, preview_document, preview_fragment, ComposeService, ConfigService, JournalStore,
};
use jotbook::cli::{
    format_entry_detail, format_entry_list, format_folder_list, Cli, Commands, FolderCommands,
};
use jotbook::domain::{EntryColor, FolderFilter, RenderOptions};
use jotbook::error::{JotbookError, Result};
use jotbook::infrastructure::{FileBlobStore, FileSystemRepository, JournalRepository};
use std::fs;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_env("JOTBOOK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized jotbook journal at {}", path.display());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemRepository::discover()?);

            if list {
                let config = service.list()?;
                println!("editor = {}", config.editor);
                println!("default_color = {}", config.default_color);
                println!("created = {}", config.created.to_rfc3339());
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: jotbook config [--list | <key> [<value>]]");
                println!("Valid keys: editor, default_color, created");
            }
            Ok(())
        }
        Commands::New {
            title,
            content,
            folder,
        } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let mut store = JournalStore::new(repo.blob_store());

            if let Some(folder_id) = folder.as_deref() {
                require_folder(&store, folder_id)?;
            }

            let content = ComposeService::new(config.get_editor()).content(content, "")?;
            if title.trim().is_empty() && content.trim().is_empty() {
                println!("Nothing to save: title and content are both empty");
                return Ok(());
            }

            let entry = store.create_entry_with_color(
                &title,
                &content,
                folder.as_deref(),
                config.default_color,
            )?;
            println!("{}", entry.id);
            Ok(())
        }
        Commands::Edit { id, title, content } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let mut store = JournalStore::new(repo.blob_store());

            let entry = store
                .get_entry(&id)
                .ok_or_else(|| JotbookError::EntryNotFound(id.clone()))?;
            let title = title.unwrap_or(entry.title);
            let content =
                ComposeService::new(config.get_editor()).content(content, &entry.content)?;

            store
                .update_entry(&id, &title, &content)?
                .ok_or(JotbookError::EntryNotFound(id))?;
            println!("Saved");
            Ok(())
        }
        Commands::Show { id } => {
            let store = open_store()?;
            let entry = store
                .get_entry(&id)
                .ok_or_else(|| JotbookError::EntryNotFound(id.clone()))?;
            let folder = entry
                .folder_id
                .as_deref()
                .and_then(|folder_id| store.get_folder(folder_id));

            print!("{}", format_entry_detail(&entry, folder.as_ref(), &Local::now()));
            Ok(())
        }
        Commands::List { folder, unfiled } => {
            let store = open_store()?;
            let filter = match (folder, unfiled) {
                (Some(folder_id), _) => {
                    require_folder(&store, &folder_id)?;
                    FolderFilter::Folder(folder_id)
                }
                (None, true) => FolderFilter::Unfiled,
                (None, false) => FolderFilter::All,
            };

            let entries = store.entries_in_folder(&filter);
            let folders = store.list_folders();
            println!(
                "{}",
                format_entry_list(&entries, &folders, &Local::now()).trim_end()
            );
            Ok(())
        }
        Commands::Delete { id, yes } => {
            let mut store = open_store()?;
            let entry = store
                .get_entry(&id)
                .ok_or_else(|| JotbookError::EntryNotFound(id.clone()))?;

            let prompt = format!("Delete entry '{}'?", entry.display_title());
            if !yes && !confirm(&prompt)? {
                println!("Cancelled");
                return Ok(());
            }

            store.delete_entry(&id)?;
            println!("Deleted entry {}", id);
            Ok(())
        }
        Commands::Color { id, color } => {
            let color =
                EntryColor::from_str(&color).map_err(|_| JotbookError::InvalidColor(color))?;
            let mut store = open_store()?;

            store
                .update_entry_color(&id, color)?
                .ok_or_else(|| JotbookError::EntryNotFound(id.clone()))?;
            println!("Set color of {} to {}", id, color);
            Ok(())
        }
        Commands::Move { id, folder } => {
            let mut store = open_store()?;
            let name = match folder.as_deref() {
                Some(folder_id) => require_folder(&store, folder_id)?,
                None => "All Entries".to_string(),
            };

            if !store.move_entry_to_folder(&id, folder.as_deref())? {
                return Err(JotbookError::EntryNotFound(id));
            }
            println!("Moved {} to {}", id, name);
            Ok(())
        }
        Commands::Preview { id, escape, output } => {
            let store = open_store()?;
            let entry = store
                .get_entry(&id)
                .ok_or_else(|| JotbookError::EntryNotFound(id.clone()))?;
            let options = RenderOptions {
                escape_html: escape,
            };

            match output {
                Some(path) => {
                    fs::write(&path, preview_document(&entry, options))?;
                    println!("Wrote {}", path.display());
                }
                None => println!("{}", preview_fragment(&entry, options)),
            }
            Ok(())
        }
        Commands::Folder { command } => run_folder(command),
    }
}

fn run_folder(command: FolderCommands) -> Result<()> {
    let mut store = open_store()?;

    match command {
        FolderCommands::List => {
            println!("{}", format_folder_list(&store.folder_entry_counts()).trim_end());
        }
        FolderCommands::New { name } => {
            let folder = store.create_folder(&name)?;
            println!("{}", folder.id);
        }
        FolderCommands::Rename { id, name } => {
            store
                .update_folder(&id, &name)?
                .ok_or_else(|| JotbookError::FolderNotFound(id.clone()))?;
            println!("Renamed folder {} to {}", id, name);
        }
        FolderCommands::Delete { id, yes } => {
            let name = require_folder(&store, &id)?;

            let prompt = format!(
                "Delete folder '{}'? Its entries will move to All Entries.",
                name
            );
            if !yes && !confirm(&prompt)? {
                println!("Cancelled");
                return Ok(());
            }

            store.delete_folder(&id)?;
            println!("Deleted folder {}", id);
        }
    }
    Ok(())
}

fn open_store() -> Result<JournalStore<FileBlobStore>> {
    let repo = FileSystemRepository::discover()?;
    Ok(JournalStore::new(repo.blob_store()))
}

/// Look up a folder's name, failing if it does not exist
fn require_folder(store: &JournalStore<FileBlobStore>, id: &str) -> Result<String> {
    store
        .get_folder(id)
        .map(|f| f.name)
        .ok_or_else(|| JotbookError::FolderNotFound(id.to_string()))
}

/// Ask a yes/no question on stdin; anything but "y"/"yes" is a no
fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
