//! Batch driver: runs the rewriter over an ordered list of files.
//!
//! A missing file is reported and skipped. Every other error aborts the run;
//! files rewritten before the failure stay rewritten.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::rewriter::{RewriteOutcome, Rewriter};

/// Progress hooks called while a batch runs.
pub trait BatchObserver {
    fn on_processing(&mut self, _path: &Path) {}
    fn on_outcome(&mut self, _path: &Path, _outcome: RewriteOutcome) {}
    fn on_missing(&mut self, _path: &Path) {}
}

/// Observer that ignores all progress.
pub struct SilentObserver;

impl BatchObserver for SilentObserver {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Updated { replacements: usize },
    Unchanged,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Tally of one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Per-file results in processing order.
    pub files: Vec<FileReport>,
    pub updated: usize,
    pub unchanged: usize,
    pub missing: usize,
    /// Total literal replacements across updated files.
    pub replacements: usize,
}

impl BatchSummary {
    /// Files that existed and were rewritten or left alone.
    pub fn processed(&self) -> usize {
        self.updated + self.unchanged
    }

    /// Every listed file, including missing ones.
    pub fn total(&self) -> usize {
        self.files.len()
    }

    fn record(&mut self, path: &Path, status: FileStatus) {
        match status {
            FileStatus::Updated { replacements } => {
                self.updated += 1;
                self.replacements += replacements;
            }
            FileStatus::Unchanged => self.unchanged += 1,
            FileStatus::Missing => self.missing += 1,
        }
        self.files.push(FileReport {
            path: path.to_path_buf(),
            status,
        });
    }
}

impl From<RewriteOutcome> for FileStatus {
    fn from(outcome: RewriteOutcome) -> Self {
        match outcome {
            RewriteOutcome::Updated { replacements } => FileStatus::Updated { replacements },
            RewriteOutcome::Unchanged => FileStatus::Unchanged,
        }
    }
}

/// Rewrite each path in order and tally the outcomes.
pub fn run_batch<P: AsRef<Path>>(
    rewriter: &Rewriter,
    paths: &[P],
    observer: &mut dyn BatchObserver,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for path in paths {
        let path = path.as_ref();

        if !path.exists() {
            observer.on_missing(path);
            summary.record(path, FileStatus::Missing);
            continue;
        }

        observer.on_processing(path);
        let outcome = rewriter.rewrite_file(path)?;
        observer.on_outcome(path, outcome);
        summary.record(path, outcome.into());
    }

    Ok(summary)
}
