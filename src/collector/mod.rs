mod reader;
mod record;

pub use reader::{FileReader, RealFileReader};
pub use record::FileRecord;

use std::path::{Path, PathBuf};

use crate::config::TallyConfig;
use crate::counter::count_lines;
use crate::error::{LineTallyError, Result};
use crate::scanner::{DirectoryScanner, FileScanner, SuffixFilter};

/// Walks a tree and counts the lines of every matched file.
///
/// The first failure aborts the whole collection; no partial result is
/// returned.
pub struct Collector<S: FileScanner, R: FileReader> {
    scanner: S,
    reader: R,
    verbose: u8,
}

impl Collector<DirectoryScanner<SuffixFilter>, RealFileReader> {
    /// Collector over the real filesystem, filtering by the configured suffix.
    #[must_use]
    pub fn from_config(config: &TallyConfig) -> Self {
        let filter = SuffixFilter::new(config.suffix.clone());
        Self::new(DirectoryScanner::new(filter), RealFileReader)
    }
}

impl<S: FileScanner, R: FileReader> Collector<S, R> {
    #[must_use]
    pub const fn new(scanner: S, reader: R) -> Self {
        Self {
            scanner,
            reader,
            verbose: 0,
        }
    }

    /// At level 2 and above, each file is reported on stderr once counted.
    #[must_use]
    pub const fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    /// Collect one record per matched file, in discovery order.
    ///
    /// # Errors
    /// Returns `Traversal` if the walk fails and `FileRead` if a matched
    /// file cannot be read as text.
    pub fn collect(&self, root: &Path) -> Result<Vec<FileRecord>> {
        self.scanner
            .scan(root)?
            .into_iter()
            .map(|path| self.count_file(path))
            .collect()
    }

    fn count_file(&self, path: PathBuf) -> Result<FileRecord> {
        let content = self
            .reader
            .read_to_string(&path)
            .map_err(|source| LineTallyError::FileRead {
                path: path.clone(),
                source,
            })?;

        let record = FileRecord::new(path, count_lines(&content));
        if self.verbose >= 2 {
            eprintln!("  {} ({} lines)", record.path.display(), record.line_count);
        }

        Ok(record)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
