use std::fmt::Write;

use crate::error::Result;
use crate::report::Report;

use super::OutputFormatter;

/// Plain report: `<path> <lines>` per file, then the two totals.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        for entry in &report.entries {
            let _ = writeln!(
                output,
                "{} {}",
                entry.record.path.display(),
                entry.record.line_count
            );
        }

        let _ = writeln!(output, "total: {}", report.totals.non_test);
        let _ = writeln!(output, "total test: {}", report.totals.test);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
