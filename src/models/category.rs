use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Fixed file taxonomy. Declaration order is the order used in every
/// overview and bucket list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Images,
    Videos,
    Documents,
    Audio,
    Archives,
    Others,
}

/// Classification rules, evaluated top to bottom. The first rule listing the
/// extension wins; anything unmatched falls through to `Others`.
const RULES: &[(Category, &[&str])] = &[
    (Category::Images, &["jpg", "jpeg", "png", "gif", "bmp", "webp"]),
    (Category::Videos, &["mp4", "mkv", "avi", "mov", "wmv", "flv"]),
    (Category::Documents, &["pdf", "docx", "txt", "pptx", "xls", "xlsx"]),
    (Category::Audio, &["mp3", "wav", "flac", "aac", "ogg"]),
    (Category::Archives, &["zip", "rar", "7z", "tar", "gz"]),
];

impl Category {
    pub const COUNT: usize = 6;

    pub const ALL: [Category; Self::COUNT] = [
        Category::Images,
        Category::Videos,
        Category::Documents,
        Category::Audio,
        Category::Archives,
        Category::Others,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Images => "Images",
            Self::Videos => "Videos",
            Self::Documents => "Documents",
            Self::Audio => "Audio",
            Self::Archives => "Archives",
            Self::Others => "Others",
        }
    }

    /// Position of this category in [`Category::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase extensions owned by this category. Empty for `Others`.
    pub fn extensions(self) -> &'static [&'static str] {
        RULES
            .iter()
            .find(|(cat, _)| *cat == self)
            .map(|(_, exts)| *exts)
            .unwrap_or(&[])
    }

    /// Classify a bare extension (no leading dot), ignoring ASCII case.
    pub fn from_extension(ext: &str) -> Category {
        if ext.is_empty() {
            return Category::Others;
        }
        let lower = ext.to_ascii_lowercase();
        RULES
            .iter()
            .find(|(_, exts)| exts.contains(&lower.as_str()))
            .map(|(cat, _)| *cat)
            .unwrap_or(Category::Others)
    }

    /// Classify a file by name. `.bashrc` style names have no extension.
    pub fn classify(file_name: &str) -> Category {
        let ext = extension_of(file_name);
        Self::from_extension(ext)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Text after the final `.` of a file name, or `""` when there is none.
pub fn extension_of(file_name: &str) -> &str {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
}
