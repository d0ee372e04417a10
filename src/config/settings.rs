use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_DEPTH: usize = 2;
pub const DEFAULT_LIMIT: usize = 5000;

/// Per-scan configuration, handed to the scanner by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Deepest directory level visited. The root's own entries sit at depth 0.
    pub max_depth: usize,
    /// Maximum number of files collected before the walk stops.
    pub limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Settings {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}
