use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::Category;
use super::file_record::FileRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub scanned_path: PathBuf,
    pub total_files: usize,
    pub total_size: u64,
    /// Every collected file, largest first.
    pub files: Vec<FileRecord>,
    /// One entry per category, in `Category::ALL` order.
    pub overview: Vec<CategorySummary>,
    /// Per-category file lists, in `Category::ALL` order, largest first.
    pub categorized_files: Vec<CategoryFiles>,
    pub limit_reached: bool,
}

impl ScanReport {
    pub fn summary(&self, category: Category) -> &CategorySummary {
        &self.overview[category.index()]
    }

    pub fn files_in(&self, category: Category) -> &[FileRecord] {
        &self.categorized_files[category.index()].files
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: Category,
    pub count: usize,
    pub total_size: u64,
    /// Share of the scan's total bytes, 0..=100.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryFiles {
    pub category: Category,
    pub files: Vec<FileRecord>,
}

/// The only failure a scan reports. Trouble below the root is absorbed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ScanError {
    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),
}

/// Why an entry was left out of a scan. Used for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    AccessDenied,
    Vanished,
    Other,
}

impl SkipReason {
    pub fn from_io(err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => SkipReason::AccessDenied,
            std::io::ErrorKind::NotFound => SkipReason::Vanished,
            _ => SkipReason::Other,
        }
    }
}
