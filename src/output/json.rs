use serde::Serialize;

use crate::error::Result;
use crate::report::{Report, ReportEntry};

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    files: Vec<FileEntry>,
    total: usize,
    total_test: usize,
}

#[derive(Serialize)]
struct FileEntry {
    path: String,
    lines: usize,
    test: bool,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let output = JsonOutput {
            files: report.entries.iter().map(convert_entry).collect(),
            total: report.totals.non_test,
            total_test: report.totals.test,
        };

        let mut json = serde_json::to_string_pretty(&output)?;
        json.push('\n');
        Ok(json)
    }
}

fn convert_entry(entry: &ReportEntry) -> FileEntry {
    FileEntry {
        path: entry.record.path.display().to_string(),
        lines: entry.record.line_count,
        test: entry.is_test,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
