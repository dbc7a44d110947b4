use std::cmp::Ordering;

use chrono::{Local, TimeZone};

use crate::shell::filesystem::EntryInfo;

const NAME_WIDTH: usize = 32;
const TYPE_WIDTH: usize = 6;
const SIZE_WIDTH: usize = 14;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Largest first; zero-sized entries always trail the non-zero ones
pub fn sort_by_size(entries: &mut [EntryInfo]) {
    entries.sort_by(|a, b| match (a.size == 0, b.size == 0) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => b.size.cmp(&a.size),
    });
}

/// Newest modification first
pub fn sort_by_time(entries: &mut [EntryInfo]) {
    entries.sort_by(|a, b| b.modify_time.cmp(&a.modify_time));
}

/// Format a timestamp from seconds since epoch; 0 renders as `-`
pub fn format_timestamp(timestamp: i64) -> String {
    if timestamp == 0 {
        return "-".to_string();
    }
    match Local.timestamp_opt(timestamp, 0) {
        chrono::LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        chrono::LocalResult::Ambiguous(dt, _) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        chrono::LocalResult::None => "-".to_string(),
    }
}

/// Whole MB, KB or B, truncating
pub fn format_size_auto(size: u64) -> String {
    if size >= MIB {
        format!("{} MB", size / MIB)
    } else if size >= KIB {
        format!("{} KB", size / KIB)
    } else {
        format!("{} B", size)
    }
}

pub fn type_label(entry: &EntryInfo) -> &'static str {
    if entry.is_directory { "Dir" } else { "File" }
}

/// Left-align `text` in a column of `width`, always keeping one trailing space
fn column(text: &str, width: usize) -> String {
    format!("{:<pad$} ", text, pad = width.saturating_sub(1))
}

/// Render entries as a table. Directory sizes are shown only when
/// `dir_sizes` says they were aggregated.
pub fn render_table(entries: &[EntryInfo], dir_sizes: bool) -> String {
    let mut result = format!(
        "{}{}{}{}\n",
        column("Name", NAME_WIDTH),
        column("Type", TYPE_WIDTH),
        column("Size", SIZE_WIDTH),
        "Modified"
    );

    for entry in entries {
        let name = if entry.is_directory {
            format!("{}/", entry.name)
        } else {
            entry.name.clone()
        };
        let size = if entry.is_directory && !dir_sizes {
            "-".to_string()
        } else {
            entry.size.to_string()
        };

        result.push_str(&format!(
            "{}{}{}{}\n",
            column(&name, NAME_WIDTH),
            column(type_label(entry), TYPE_WIDTH),
            column(&size, SIZE_WIDTH),
            format_timestamp(entry.modify_time)
        ));
    }

    result
}
