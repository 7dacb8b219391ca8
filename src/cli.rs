use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{DEFAULT_ROOT, DEFAULT_SUFFIX, TallyConfig, default_test_marker};
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "line-tally")]
#[command(author, version, about = "Count lines per source file, split into test and non-test totals")]
#[command(long_about = "Walks a directory, counts the lines of every file whose name ends with \
    the suffix, and prints them sorted by line count followed by the non-test and test totals.\n\n\
    Exit codes:\n  \
    0 - Report printed\n  \
    1 - Traversal, read, output or configuration error")]
pub struct Cli {
    /// Directory to scan
    #[arg(env = "LINE_TALLY_ROOT", default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Count only files whose name ends with this suffix (case-sensitive)
    #[arg(long, short = 's', env = "LINE_TALLY_SUFFIX", default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Paths containing this substring are totalled as test code [default: <separator>tests]
    #[arg(long, short = 't', env = "LINE_TALLY_TEST_MARKER")]
    pub test_marker: Option<String>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Print progress diagnostics to stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Control color of error output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

impl Cli {
    #[must_use]
    pub fn to_config(&self) -> TallyConfig {
        TallyConfig::new(
            self.root.clone(),
            self.suffix.clone(),
            self.test_marker.clone().unwrap_or_else(default_test_marker),
        )
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
