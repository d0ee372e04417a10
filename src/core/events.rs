use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::models::scan_result::SkipReason;

#[derive(Debug, Clone)]
pub enum Event {
    // Scan progress
    Progress { scanned: usize, total_size: u64, current_path: PathBuf },
    EntrySkipped { path: PathBuf, reason: SkipReason },

    // Scan state
    ScanStarted { path: PathBuf },
    ScanCompleted {
        total_files: usize,
        total_size: u64,
        limit_reached: bool,
        skipped: usize,
        duration_ms: u64,
    },
}

pub type EventSender = mpsc::UnboundedSender<Event>;
pub type EventReceiver = mpsc::UnboundedReceiver<Event>;

pub fn create_event_channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
