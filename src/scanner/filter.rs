use std::path::Path;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts files whose name ends with a fixed suffix.
///
/// Matching is case-sensitive and looks at the file name only, so a
/// directory called `foo.rs` never makes its children match.
pub struct SuffixFilter {
    suffix: String,
}

impl SuffixFilter {
    #[must_use]
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl FileFilter for SuffixFilter {
    fn should_include(&self, path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(&self.suffix))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
