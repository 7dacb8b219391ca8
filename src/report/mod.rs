use crate::collector::FileRecord;

/// Line sums split by classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub non_test: usize,
    pub test: usize,
}

impl Totals {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.non_test + self.test
    }

    const fn add(&mut self, line_count: usize, is_test: bool) {
        if is_test {
            self.test += line_count;
        } else {
            self.non_test += line_count;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub record: FileRecord,
    pub is_test: bool,
}

/// Records sorted by line count, plus the test/non-test totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
    pub totals: Totals,
}

impl Report {
    /// Sort `records` ascending by line count and classify each against
    /// `test_marker`.
    ///
    /// The sort is stable: records with equal counts keep the order they
    /// were collected in.
    #[must_use]
    pub fn build(mut records: Vec<FileRecord>, test_marker: &str) -> Self {
        records.sort_by_key(|r| r.line_count);

        let mut totals = Totals::default();
        let entries = records
            .into_iter()
            .map(|record| {
                let is_test = record.is_test(test_marker);
                totals.add(record.line_count, is_test);
                ReportEntry { record, is_test }
            })
            .collect();

        Self { entries, totals }
    }

    #[must_use]
    pub fn file_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn test_file_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_test).count()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
