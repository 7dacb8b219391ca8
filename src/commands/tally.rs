use std::io::Write;

use crate::cli::Cli;
use crate::collector::{Collector, FileReader};
use crate::config::TallyConfig;
use crate::error::{LineTallyError, Result};
use crate::output::{ErrorOutput, OutputFormat};
use crate::report::Report;
use crate::scanner::FileScanner;
use crate::{EXIT_ERROR, EXIT_SUCCESS};

#[must_use]
pub fn run_tally(cli: &Cli) -> i32 {
    match run_tally_impl(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print(&e);
            EXIT_ERROR
        }
    }
}

/// Runs a full tally and writes the report to stdout.
///
/// # Errors
/// Returns an error if the configuration is invalid, the walk or a read
/// fails, or stdout cannot be written.
pub fn run_tally_impl(cli: &Cli) -> Result<()> {
    let config = cli.to_config();
    config.validate()?;

    let collector = Collector::from_config(&config).with_verbose(cli.verbose);
    let output = tally(&config, &collector, cli.format, cli.verbose)?;

    write_output(&mut std::io::stdout().lock(), &output)
}

/// Collects, sorts and formats. Nothing is printed to stdout here, so a
/// failure part-way through leaves no partial report behind.
///
/// # Errors
/// Returns the first traversal or read error, or a formatting error.
pub fn tally<S: FileScanner, R: FileReader>(
    config: &TallyConfig,
    collector: &Collector<S, R>,
    format: OutputFormat,
    verbose: u8,
) -> Result<String> {
    if verbose >= 1 {
        eprintln!(
            "Scanning {} for files ending in \"{}\"",
            config.root.display(),
            config.suffix
        );
    }

    let records = collector.collect(&config.root)?;

    if verbose >= 1 {
        eprintln!("Collected {} file(s)", records.len());
    }

    let report = Report::build(records, &config.test_marker);

    if verbose >= 1 {
        eprintln!(
            "{} of {} file(s) matched test marker \"{}\"",
            report.test_file_count(),
            report.file_count(),
            config.test_marker
        );
    }

    format.formatter().format(&report)
}

/// Writes the formatted report and flushes.
///
/// # Errors
/// Returns `Output` if the writer fails.
pub fn write_output<W: Write>(w: &mut W, content: &str) -> Result<()> {
    w.write_all(content.as_bytes())
        .and_then(|()| w.flush())
        .map_err(LineTallyError::Output)
}

#[cfg(test)]
#[path = "tally_tests.rs"]
mod tests;
