use std::fs;
use std::io;
use std::path::Path;

/// Source of file contents for the collector.
pub trait FileReader {
    /// Read a file as UTF-8 text.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened, read, or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Real filesystem implementation of `FileReader`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileReader;

impl FileReader for RealFileReader {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}
