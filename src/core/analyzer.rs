use std::path::PathBuf;

use crate::models::category::Category;
use crate::models::file_record::FileRecord;
use crate::models::scan_result::{CategoryFiles, CategorySummary, ScanReport};

pub struct Analyzer;

impl Analyzer {
    /// Largest first. Stable, so equal sizes keep discovery order.
    pub fn sort_by_size(files: &mut [FileRecord]) {
        files.sort_by(|a, b| b.size.cmp(&a.size));
    }

    pub fn percentage(part: u64, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        (part as f64 / total as f64) * 100.0
    }

    /// One summary per bucket, preserving bucket order.
    pub fn summarize(buckets: &[CategoryFiles], total_size: u64) -> Vec<CategorySummary> {
        buckets
            .iter()
            .map(|bucket| {
                let size: u64 = bucket.files.iter().map(|f| f.size).sum();
                CategorySummary {
                    category: bucket.category,
                    count: bucket.files.len(),
                    total_size: size,
                    percent: Self::percentage(size, total_size),
                }
            })
            .collect()
    }
}

/// Running state of one scan: the flat list plus one bucket per category.
#[derive(Debug, Default)]
pub(crate) struct ScanAccumulator {
    files: Vec<FileRecord>,
    buckets: [Vec<FileRecord>; Category::COUNT],
    total_size: u64,
}

impl ScanAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    pub fn push(&mut self, record: FileRecord) -> Category {
        let category = record.category();
        self.total_size += record.size;
        self.buckets[category.index()].push(record.clone());
        self.files.push(record);
        category
    }

    /// Sort everything and package the report. `limit` is the cap the walk
    /// ran under.
    pub fn finish(self, scanned_path: PathBuf, limit: usize) -> ScanReport {
        let ScanAccumulator {
            mut files,
            buckets,
            total_size,
        } = self;

        Analyzer::sort_by_size(&mut files);

        let categorized_files: Vec<CategoryFiles> = Category::ALL
            .into_iter()
            .zip(buckets)
            .map(|(category, mut files)| {
                Analyzer::sort_by_size(&mut files);
                CategoryFiles { category, files }
            })
            .collect();

        let overview = Analyzer::summarize(&categorized_files, total_size);

        ScanReport {
            scanned_path,
            total_files: files.len(),
            total_size,
            limit_reached: files.len() >= limit,
            files,
            overview,
            categorized_files,
        }
    }
}
