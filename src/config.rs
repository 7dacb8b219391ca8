use std::path::{MAIN_SEPARATOR, PathBuf};

use crate::error::{LineTallyError, Result};

pub const DEFAULT_ROOT: &str = "src";
pub const DEFAULT_SUFFIX: &str = ".rs";
pub const TEST_DIR_NAME: &str = "tests";

/// The default test marker: a path separator followed by `tests`.
#[must_use]
pub fn default_test_marker() -> String {
    format!("{MAIN_SEPARATOR}{TEST_DIR_NAME}")
}

/// Everything a single tally run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyConfig {
    /// Directory to walk.
    pub root: PathBuf,
    /// File names must end with this (case-sensitive).
    pub suffix: String,
    /// Paths containing this substring are counted as test code.
    pub test_marker: String,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            suffix: DEFAULT_SUFFIX.to_string(),
            test_marker: default_test_marker(),
        }
    }
}

impl TallyConfig {
    #[must_use]
    pub fn new(
        root: impl Into<PathBuf>,
        suffix: impl Into<String>,
        test_marker: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            suffix: suffix.into(),
            test_marker: test_marker.into(),
        }
    }

    /// Checks option values before any filesystem work happens.
    ///
    /// # Errors
    /// Returns an error if the suffix or the test marker is empty.
    pub fn validate(&self) -> Result<()> {
        if self.suffix.is_empty() {
            return Err(LineTallyError::Config(
                "suffix must not be empty".to_string(),
            ));
        }

        // An empty marker is contained in every path.
        if self.test_marker.is_empty() {
            return Err(LineTallyError::Config(
                "test marker must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
