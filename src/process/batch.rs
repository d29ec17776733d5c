//! Sequential processing of a list of files.
//!
//! Every failure is contained to the file that caused it; the batch always
//! runs to the end.

use std::fmt;
use std::path::{Path, PathBuf};

use super::file::{process_file, FileOutcome, WriteMode};

/// Per-file status as reported to the user
#[derive(Debug)]
pub enum FileStatus {
    /// File was read and formatted (or checked)
    Done(FileOutcome),
    /// Explicitly named file does not exist; it was not attempted
    NotFound,
    /// Reading or writing failed
    Failed(anyhow::Error),
}

/// Outcome for one file in a batch
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
}

impl FileReport {
    /// Whether this file counts toward the changed total
    #[must_use]
    pub fn is_changed(&self) -> bool {
        matches!(self.status, FileStatus::Done(outcome) if outcome.is_changed())
    }

    /// Whether this report belongs on stderr
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.status, FileStatus::NotFound | FileStatus::Failed(_))
    }

    /// Status line for this report
    #[must_use]
    pub fn status_line(&self, mode: WriteMode) -> String {
        let path = self.path.display();
        match (&self.status, mode) {
            (FileStatus::Done(FileOutcome::Formatted), WriteMode::InPlace) => {
                format!("✓ Formatted: {path}")
            }
            (FileStatus::Done(FileOutcome::Formatted), WriteMode::Check) => {
                format!("✗ Needs formatting: {path}")
            }
            (FileStatus::Done(FileOutcome::Unchanged), _) => {
                format!("- No changes needed: {path}")
            }
            (FileStatus::NotFound, _) => format!("✗ File not found: {path}"),
            (FileStatus::Failed(e), _) => format!("✗ Error processing {path}: {e:#}"),
        }
    }
}

/// Options shared by every file in a batch
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    pub mode: WriteMode,
    /// Report missing files as `NotFound` instead of attempting them
    pub check_exists: bool,
}

/// Totals for a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub changed: usize,
    pub unchanged: usize,
    pub failed: usize,
    pub not_found: usize,
}

impl BatchSummary {
    fn record(&mut self, report: &FileReport) {
        match &report.status {
            FileStatus::Done(FileOutcome::Formatted) => self.changed += 1,
            FileStatus::Done(FileOutcome::Unchanged) => self.unchanged += 1,
            FileStatus::NotFound => self.not_found += 1,
            FileStatus::Failed(_) => self.failed += 1,
        }
    }

    /// Closing summary line
    #[must_use]
    pub fn summary_line(&self, mode: WriteMode) -> String {
        match mode {
            WriteMode::InPlace => {
                format!("Completed! {} file(s) were formatted.", self.changed)
            }
            WriteMode::Check => {
                format!("Completed! {} file(s) would be formatted.", self.changed)
            }
        }
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} changed, {} unchanged, {} failed, {} not found",
            self.changed, self.unchanged, self.failed, self.not_found
        )
    }
}

/// Process one file, turning every failure into a status
#[must_use]
pub fn process_one(path: &Path, options: BatchOptions) -> FileReport {
    let status = if options.check_exists && !path.exists() {
        FileStatus::NotFound
    } else {
        match process_file(path, options.mode) {
            Ok(outcome) => FileStatus::Done(outcome),
            Err(e) => FileStatus::Failed(e),
        }
    };

    FileReport {
        path: path.to_path_buf(),
        status,
    }
}

/// Process files in order, handing each report to `on_report` as soon as it
/// is available.
pub fn process_files<P, F>(files: &[P], options: BatchOptions, mut on_report: F) -> BatchSummary
where
    P: AsRef<Path>,
    F: FnMut(&FileReport),
{
    let mut summary = BatchSummary::default();
    for path in files {
        let report = process_one(path.as_ref(), options);
        summary.record(&report);
        on_report(&report);
    }
    summary
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_batch_continues_after_error() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("bad.md");
        let good = dir.path().join("good.md");
        fs::write(&bad, [0xff, 0xfe]).unwrap();
        fs::write(&good, "# Title\ntext").unwrap();

        let mut seen = Vec::new();
        let summary = process_files(&[&bad, &good], BatchOptions::default(), |report| {
            seen.push((report.path.clone(), report.is_error()));
        });

        assert_eq!(seen, vec![(bad, true), (good.clone(), false)]);
        assert_eq!(summary.changed, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(fs::read_to_string(&good).unwrap(), "# Title\n\ntext");
    }

    #[test]
    fn test_not_found_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.md");
        let options = BatchOptions {
            check_exists: true,
            ..Default::default()
        };

        let report = process_one(&missing, options);
        assert!(matches!(report.status, FileStatus::NotFound));
        assert!(!report.is_changed());
        assert_eq!(
            report.status_line(WriteMode::InPlace),
            format!("✗ File not found: {}", missing.display())
        );
    }

    #[test]
    fn test_missing_without_exists_check_is_failure() {
        let dir = tempfile::tempdir().unwrap();
        let report = process_one(&dir.path().join("gone.md"), BatchOptions::default());
        assert!(matches!(report.status, FileStatus::Failed(_)));
        assert!(report
            .status_line(WriteMode::InPlace)
            .starts_with("✗ Error processing"));
    }

    #[test]
    fn test_status_lines() {
        let report = FileReport {
            path: PathBuf::from("a.md"),
            status: FileStatus::Done(FileOutcome::Formatted),
        };
        assert_eq!(report.status_line(WriteMode::InPlace), "✓ Formatted: a.md");
        assert_eq!(
            report.status_line(WriteMode::Check),
            "✗ Needs formatting: a.md"
        );

        let report = FileReport {
            path: PathBuf::from("b.md"),
            status: FileStatus::Done(FileOutcome::Unchanged),
        };
        assert_eq!(
            report.status_line(WriteMode::InPlace),
            "- No changes needed: b.md"
        );
    }

    #[test]
    fn test_summary_lines() {
        let summary = BatchSummary {
            changed: 2,
            unchanged: 1,
            failed: 0,
            not_found: 1,
        };
        assert_eq!(
            summary.summary_line(WriteMode::InPlace),
            "Completed! 2 file(s) were formatted."
        );
        assert_eq!(
            summary.summary_line(WriteMode::Check),
            "Completed! 2 file(s) would be formatted."
        );
        assert_eq!(
            summary.to_string(),
            "2 changed, 1 unchanged, 0 failed, 1 not found"
        );
    }
}
