mod filter;

pub use filter::{FileFilter, SuffixFilter};

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{LineTallyError, Result};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths in discovery order.
    ///
    /// # Errors
    /// Returns an error if the root or any directory below it cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Every non-directory entry is a candidate. Symlinks are not followed,
    /// and one is skipped only when it resolves to a directory, so a dangling
    /// link reaches the reader and fails there.
    fn is_candidate(entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        !(file_type.is_dir() || (file_type.is_symlink() && entry.path().is_dir()))
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|source| LineTallyError::Traversal {
                path: source
                    .path()
                    .map_or_else(|| root.to_path_buf(), Path::to_path_buf),
                source,
            })?;

            if Self::is_candidate(&entry) && self.filter.should_include(entry.path()) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
