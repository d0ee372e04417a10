use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::config::settings::Settings;
use crate::models::file_record::FileRecord;
use crate::models::scan_result::{ScanError, ScanReport, SkipReason};

use super::analyzer::ScanAccumulator;
use super::events::{Event, EventSender};
use super::progress::ProgressTracker;

const PROGRESS_INTERVAL: Duration = Duration::from_millis(100);

pub struct Scanner {
    settings: Settings,
    event_tx: Option<EventSender>,
    /// Counters of the current (or most recent) scan. Replaced on every call.
    progress: Mutex<Arc<ProgressTracker>>,
}

/// A directory waiting to be listed, with the depth its entries sit at.
struct PendingDir {
    path: PathBuf,
    depth: usize,
}

impl Scanner {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            event_tx: None,
            progress: Mutex::new(Arc::new(ProgressTracker::new())),
        }
    }

    pub fn with_events(mut self, event_tx: EventSender) -> Self {
        self.event_tx = Some(event_tx);
        self
    }

    /// Counters of the scan in flight, or of the last one once it returns.
    pub fn progress(&self) -> Arc<ProgressTracker> {
        self.progress
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Walk `root` and build a report.
    ///
    /// Only a missing root is an error. Unreadable directories, entries that
    /// vanish mid-walk and non-regular files are left out and the walk moves
    /// on to their siblings. Symbolic links are never followed.
    ///
    /// A relative `root` is resolved against the working directory, so the
    /// report's paths are always absolute.
    pub fn scan(&self, root: impl AsRef<Path>) -> Result<ScanReport, ScanError> {
        let requested = root.as_ref();
        let root = match std::path::absolute(requested) {
            Ok(abs) if fs::metadata(&abs).is_ok() => abs,
            _ => {
                tracing::warn!(path = %requested.display(), "scan root not found");
                return Err(ScanError::PathNotFound(requested.to_path_buf()));
            }
        };
        let root = root.as_path();

        let progress = Arc::new(ProgressTracker::new());
        *self.progress.lock().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&progress);

        tracing::info!(
            path = %root.display(),
            max_depth = self.settings.max_depth,
            limit = self.settings.limit,
            "scan started"
        );
        self.emit(Event::ScanStarted {
            path: root.to_path_buf(),
        });

        let mut acc = ScanAccumulator::new();
        let mut stack = vec![PendingDir {
            path: root.to_path_buf(),
            depth: 0,
        }];
        let mut last_progress = Instant::now();

        while let Some(dir) = stack.pop() {
            if acc.len() >= self.settings.limit {
                break;
            }
            self.scan_directory(&progress, &dir, &mut acc, &mut stack);

            if last_progress.elapsed() >= PROGRESS_INTERVAL {
                last_progress = Instant::now();
                self.emit(Event::Progress {
                    scanned: acc.len(),
                    total_size: acc.total_size(),
                    current_path: dir.path,
                });
            }
        }

        let report = acc.finish(root.to_path_buf(), self.settings.limit);
        let snapshot = progress.snapshot();

        tracing::info!(
            files = report.total_files,
            bytes = report.total_size,
            limit_reached = report.limit_reached,
            skipped = snapshot.skipped,
            elapsed_ms = snapshot.elapsed.as_millis() as u64,
            "scan completed"
        );
        self.emit(Event::ScanCompleted {
            total_files: report.total_files,
            total_size: report.total_size,
            limit_reached: report.limit_reached,
            skipped: snapshot.skipped,
            duration_ms: snapshot.elapsed.as_millis() as u64,
        });

        Ok(report)
    }

    /// List one directory. Files go into `acc`; subdirectories within the
    /// depth bound go onto `stack`.
    fn scan_directory(
        &self,
        progress: &ProgressTracker,
        dir: &PendingDir,
        acc: &mut ScanAccumulator,
        stack: &mut Vec<PendingDir>,
    ) {
        progress.increment_dirs();

        let entries = match fs::read_dir(&dir.path) {
            Ok(entries) => entries,
            Err(e) => {
                self.skip(progress, &dir.path, &e);
                return;
            }
        };

        for entry in entries {
            if acc.len() >= self.settings.limit {
                return;
            }

            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    self.skip(progress, &dir.path, &e);
                    continue;
                }
            };

            // DirEntry::file_type does not follow symlinks.
            let file_type = match entry.file_type() {
                Ok(ft) => ft,
                Err(e) => {
                    self.skip(progress, &entry.path(), &e);
                    continue;
                }
            };

            if file_type.is_file() {
                let metadata = match entry.metadata() {
                    Ok(meta) => meta,
                    Err(e) => {
                        self.skip(progress, &entry.path(), &e);
                        continue;
                    }
                };
                let size = metadata.len();
                let record = FileRecord::new(
                    entry.file_name().to_string_lossy().as_ref(),
                    entry.path(),
                    size,
                    metadata.modified().ok(),
                );
                progress.increment_files();
                progress.add_size(size);
                acc.push(record);
            } else if file_type.is_dir() && dir.depth < self.settings.max_depth {
                stack.push(PendingDir {
                    path: entry.path(),
                    depth: dir.depth + 1,
                });
            }
            // Symlinks, devices, sockets and fifos are ignored.
        }
    }

    fn skip(&self, progress: &ProgressTracker, path: &Path, err: &std::io::Error) {
        let reason = SkipReason::from_io(err);
        tracing::debug!(path = %path.display(), ?reason, error = %err, "entry skipped");
        progress.increment_skipped();
        self.emit(Event::EntrySkipped {
            path: path.to_path_buf(),
            reason,
        });
    }

    fn emit(&self, event: Event) {
        if let Some(tx) = &self.event_tx {
            let _ = tx.send(event);
        }
    }
}
