//! Directory listings: entry classification, sorting, and label
//! formatting.
//!
//! Listings enumerate immediate children only. Children whose metadata
//! cannot be read are skipped rather than failing the whole listing, so
//! a single unreadable entry never hides the rest of the directory.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::error::RequestError;

/// One row of a directory listing, or the synthetic `..` parent link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Display name; directories carry a trailing `/`.
    pub name: String,

    /// Request path for the entry, relative to the served root.
    /// Directories carry a trailing `/`.
    pub href: String,

    /// Human-readable size label; empty for directories and the parent link.
    pub size: String,

    /// `YYYY-MM-DD HH:MM` local time; empty for the parent link.
    pub modified: String,

    pub is_dir: bool,
}

impl ListingEntry {
    /// The synthetic `..` entry linking to `url_path`'s parent.
    fn parent_link(url_path: &str) -> Self {
        Self {
            name: "..".to_string(),
            href: parent_path(url_path),
            size: String::new(),
            modified: String::new(),
            is_dir: true,
        }
    }

    fn is_parent_link(&self) -> bool {
        self.name == ".."
    }
}

/// A complete listing for one directory request. Built fresh per request
/// and handed straight to the view renderer.
#[derive(Debug, Clone)]
pub struct ListingResult {
    /// Normalized request path of the listed directory.
    pub path: String,

    /// Theme name forwarded to the renderer.
    pub theme: String,

    /// Entries in display order: parent link first (when present), then
    /// directories, then files, each group case-insensitively by name.
    pub entries: Vec<ListingEntry>,
}

/// Read `dir` and build its listing for the request path `url_path`.
///
/// `url_path` must be normalized (no trailing separator except `/`).
pub fn list_directory(
    dir: &Path,
    url_path: &str,
    theme: &str,
) -> Result<ListingResult, RequestError> {
    let read_dir = fs::read_dir(dir)
        .map_err(|e| RequestError::Internal(format!("reading directory: {e}")))?;

    let mut entries = Vec::new();

    if url_path != "/" {
        entries.push(ListingEntry::parent_link(url_path));
    }

    for child in read_dir {
        let Ok(child) = child else { continue };
        let Ok(meta) = child.metadata() else { continue };

        let mut name = child.file_name().to_string_lossy().into_owned();
        let mut href = join_path(url_path, &name);
        let is_dir = meta.is_dir();

        let size = if is_dir {
            name.push('/');
            href.push('/');
            String::new()
        } else {
            format_size(meta.len())
        };

        let modified = meta
            .modified()
            .map(format_modified)
            .unwrap_or_default();

        entries.push(ListingEntry {
            name,
            href,
            size,
            modified,
            is_dir,
        });
    }

    sort_entries(&mut entries);

    Ok(ListingResult {
        path: url_path.to_string(),
        theme: theme.to_string(),
        entries,
    })
}

/// Sort listing entries in display order: parent link first, directories
/// before files, then case-insensitive by name. Total and idempotent.
pub fn sort_entries(entries: &mut [ListingEntry]) {
    entries.sort_by(|a, b| {
        b.is_parent_link()
            .cmp(&a.is_parent_link())
            .then(b.is_dir.cmp(&a.is_dir))
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
}

/// Format a byte count with binary-prefix units and one decimal place.
/// Counts below 1024 render as integer bytes.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    match bytes {
        b if b >= GB => format!("{:.1} GB", b as f64 / GB as f64),
        b if b >= MB => format!("{:.1} MB", b as f64 / MB as f64),
        b if b >= KB => format!("{:.1} KB", b as f64 / KB as f64),
        b => format!("{b} B"),
    }
}

/// Render a modification timestamp as `YYYY-MM-DD HH:MM` in local time.
pub fn format_modified(time: SystemTime) -> String {
    let local: DateTime<Local> = time.into();
    local.format("%Y-%m-%d %H:%M").to_string()
}

/// Parent of a normalized request path; `/a/b` becomes `/a`, `/a`
/// becomes `/`.
fn parent_path(url_path: &str) -> String {
    let trimmed = url_path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => trimmed[..idx].to_string(),
    }
}

/// Join a child name onto a normalized request path.
fn join_path(url_path: &str, name: &str) -> String {
    if url_path == "/" {
        format!("/{name}")
    } else {
        format!("{url_path}/{name}")
    }
}
