use serde::{Deserialize, Serialize};

use crate::core::paths::PathStyle;

use super::category::Category;
use super::file_record::{format_mb, FileRecord, MB};
use super::scan_result::{CategorySummary, ScanError, ScanReport};

/// Display-ready form of a [`ScanReport`]: sizes as two-decimal strings or
/// rounded numbers, times formatted, paths in the caller's convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportView {
    pub total_files: usize,
    pub total_size_bytes: u64,
    pub total_size_mb: String,
    pub scanned_path: String,
    pub files: Vec<FileView>,
    pub overview: Vec<OverviewRow>,
    pub limit_reached: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileView {
    pub name: String,
    pub path: String,
    pub size_kb: String,
    pub modified: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewRow {
    pub category: Category,
    pub count: usize,
    pub size_mb: f64,
    pub percent: f64,
}

/// What a caller gets back from a scan request. The failure arm serializes
/// as `{"error": "..."}`, so consumers branch on the presence of `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScanResponse {
    Report(ReportView),
    Failed { error: String },
}

impl ReportView {
    pub fn new(report: &ScanReport, style: PathStyle) -> Self {
        Self {
            total_files: report.total_files,
            total_size_bytes: report.total_size,
            total_size_mb: format_mb(report.total_size),
            scanned_path: style.render(&report.scanned_path),
            files: report
                .files
                .iter()
                .map(|f| FileView::new(f, style))
                .collect(),
            overview: report.overview.iter().map(OverviewRow::from).collect(),
            limit_reached: report.limit_reached,
        }
    }
}

impl FileView {
    pub fn new(record: &FileRecord, style: PathStyle) -> Self {
        Self {
            name: record.name.to_string(),
            path: style.render(&record.path),
            size_kb: record.size_kb(),
            modified: record.modified_display().unwrap_or_else(|| "-".to_string()),
        }
    }
}

impl From<&CategorySummary> for OverviewRow {
    fn from(summary: &CategorySummary) -> Self {
        Self {
            category: summary.category,
            count: summary.count,
            size_mb: round2(summary.total_size as f64 / MB as f64),
            percent: round2(summary.percent),
        }
    }
}

impl ScanResponse {
    pub fn from_result(result: Result<ScanReport, ScanError>, style: PathStyle) -> Self {
        match result {
            Ok(report) => ScanResponse::Report(ReportView::new(&report, style)),
            Err(e) => ScanResponse::Failed {
                error: e.to_string(),
            },
        }
    }

    pub fn report(&self) -> Option<&ReportView> {
        match self {
            ScanResponse::Report(view) => Some(view),
            ScanResponse::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ScanResponse::Report(_) => None,
            ScanResponse::Failed { error } => Some(error),
        }
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
