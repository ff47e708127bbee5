//! Output formatting utilities

use crate::domain::excerpt::excerpt;
use crate::domain::{Entry, Folder};
use chrono::{DateTime, Datelike, Duration, TimeZone};
use std::fmt::Display;

const EXCERPT_CHARS: usize = 60;

/// Format an epoch-millisecond timestamp relative to `now`:
/// "Today, 3:04 PM", "Yesterday, 3:04 PM", "Jan 5" or "Jan 5, 2024".
pub fn format_timestamp<Tz>(millis: i64, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(time) = now.timezone().timestamp_millis_opt(millis).single() else {
        return "-".to_string();
    };

    let today = now.date_naive();
    let day = time.date_naive();

    if day == today {
        format!("Today, {}", time.format("%-I:%M %p"))
    } else if today - Duration::days(1) == day {
        format!("Yesterday, {}", time.format("%-I:%M %p"))
    } else if day.year() == today.year() {
        time.format("%b %-d").to_string()
    } else {
        time.format("%b %-d, %Y").to_string()
    }
}

/// Format a list of entries for display
pub fn format_entry_list<Tz>(entries: &[Entry], folders: &[Folder], now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let folder = entry
            .folder_id
            .as_deref()
            .and_then(|id| folders.iter().find(|f| f.id == id))
            .map(|f| format!("  [{}]", f.name))
            .unwrap_or_default();

        output.push_str(&format!(
            "{}  {:<7} {:<20} {}{}\n",
            entry.id,
            entry.color,
            format_timestamp(entry.updated_at, now),
            entry.display_title(),
            folder
        ));

        let summary = excerpt(&entry.content, EXCERPT_CHARS);
        if !summary.is_empty() {
            output.push_str(&format!("    {}\n", summary));
        }
    }
    output
}

/// Format a single entry with its metadata and raw content
pub fn format_entry_detail<Tz>(entry: &Entry, folder: Option<&Folder>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let folder = folder.map(|f| f.name.as_str()).unwrap_or("All Entries");
    format!(
        "{}\n\nid:      {}\nfolder:  {}\ncolor:   {}\ncreated: {}\nupdated: {}\n\n{}\n",
        entry.display_title(),
        entry.id,
        folder,
        entry.color,
        format_timestamp(entry.created_at, now),
        format_timestamp(entry.updated_at, now),
        entry.content
    )
}

/// Format folders with their entry counts
pub fn format_folder_list(folders: &[(Folder, usize)]) -> String {
    if folders.is_empty() {
        return "No folders found".to_string();
    }

    let mut output = String::new();
    for (folder, count) in folders {
        let noun = if *count == 1 { "entry" } else { "entries" };
        output.push_str(&format!(
            "{}  {} ({} {})\n",
            folder.id, folder.name, count, noun
        ));
    }
    output
}
