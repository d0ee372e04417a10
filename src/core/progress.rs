use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Live counters for one scan. A fresh tracker is created by every
/// [`Scanner::scan`](super::scanner::Scanner::scan) call; other threads may
/// read it while the walk runs.
#[derive(Debug)]
pub struct ProgressTracker {
    files: AtomicUsize,
    dirs: AtomicUsize,
    bytes: AtomicU64,
    skipped: AtomicUsize,
    started: Instant,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self {
            files: AtomicUsize::new(0),
            dirs: AtomicUsize::new(0),
            bytes: AtomicU64::new(0),
            skipped: AtomicUsize::new(0),
            started: Instant::now(),
        }
    }

    pub fn increment_files(&self) {
        self.files.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_dirs(&self) {
        self.dirs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_size(&self, size: u64) {
        self.bytes.fetch_add(size, Ordering::Relaxed);
    }

    /// An entry or directory left out because it could not be read.
    pub fn increment_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        let files_scanned = self.files.load(Ordering::Relaxed);
        let elapsed = self.started.elapsed();
        let secs = elapsed.as_secs_f64();
        ProgressSnapshot {
            files_scanned,
            dirs_scanned: self.dirs.load(Ordering::Relaxed),
            total_size: self.bytes.load(Ordering::Relaxed),
            skipped: self.skipped.load(Ordering::Relaxed),
            elapsed,
            files_per_second: if secs < f64::EPSILON {
                0.0
            } else {
                files_scanned as f64 / secs
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProgressSnapshot {
    pub files_scanned: usize,
    pub dirs_scanned: usize,
    pub total_size: u64,
    pub skipped: usize,
    /// Time since the scan began.
    pub elapsed: Duration,
    pub files_per_second: f64,
}
