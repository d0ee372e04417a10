use std::path::PathBuf;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use super::category::Category;

pub const KB: u64 = 1024;
pub const MB: u64 = 1024 * KB;

pub const MODIFIED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One regular file seen during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: CompactString,
    pub path: PathBuf,
    pub size: u64,
    pub modified: Option<SystemTime>,
}

impl FileRecord {
    pub fn new(
        name: impl Into<CompactString>,
        path: PathBuf,
        size: u64,
        modified: Option<SystemTime>,
    ) -> Self {
        Self {
            name: name.into(),
            path,
            size,
            modified,
        }
    }

    pub fn category(&self) -> Category {
        Category::classify(&self.name)
    }

    /// Size in KiB with two decimals, e.g. `"1.50"`.
    pub fn size_kb(&self) -> String {
        format_kb(self.size)
    }

    /// Local modification time as `YYYY-MM-DD HH:MM:SS`.
    pub fn modified_display(&self) -> Option<String> {
        self.modified.map(format_modified)
    }
}

pub fn format_kb(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / KB as f64)
}

pub fn format_mb(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / MB as f64)
}

pub fn format_modified(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format(MODIFIED_FORMAT).to_string()
}

pub fn human_readable_size(bytes: u64) -> String {
    const GB: u64 = 1024 * MB;
    const TB: u64 = 1024 * GB;

    if bytes >= TB {
        format!("{:.2} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
