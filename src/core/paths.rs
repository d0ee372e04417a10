//! Translation between Windows drive paths and their WSL mount paths.
//!
//! The scanner only ever sees host-native paths. These helpers sit at the
//! edges: one turns user input such as `C:\Users\me` into something the host
//! can open, the other turns scanned paths back into the user's convention.

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Convention used when presenting paths to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum PathStyle {
    #[default]
    Native,
    Windows,
}

impl PathStyle {
    pub fn render(self, path: &Path) -> String {
        let raw = path.to_string_lossy();
        match self {
            PathStyle::Native => raw.into_owned(),
            PathStyle::Windows => wsl_to_windows(&raw),
        }
    }
}

/// `C:\Users\me` -> `/mnt/c/Users/me`.
pub fn windows_to_wsl(win_path: &str) -> String {
    let normalized = win_path.trim().replace('\\', "/");
    if normalized.is_empty() {
        return String::new();
    }
    match normalized.split_once(':') {
        Some((drive, rest)) => format!(
            "/mnt/{}/{}",
            drive.to_lowercase(),
            rest.trim_start_matches('/')
        ),
        None => normalized,
    }
}

/// `/mnt/c/Users/me` -> `C:\Users\me`. Anything else just has its separators
/// flipped.
pub fn wsl_to_windows(wsl_path: &str) -> String {
    if wsl_path.starts_with("/mnt/") {
        let parts: Vec<&str> = wsl_path.split('/').collect();
        // ["", "mnt", drive, rest...]
        if parts.len() > 3 {
            let drive = parts[2].to_uppercase();
            let rest = parts[3..].join("\\");
            return format!("{drive}:\\{rest}");
        }
    }
    wsl_path.replace('/', "\\")
}
