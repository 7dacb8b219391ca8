use std::path::PathBuf;

/// One matched file and its line count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub line_count: usize,
}

impl FileRecord {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, line_count: usize) -> Self {
        Self {
            path: path.into(),
            line_count,
        }
    }

    /// Whether the path contains `marker` anywhere.
    #[must_use]
    pub fn is_test(&self, marker: &str) -> bool {
        self.path.to_string_lossy().contains(marker)
    }
}
