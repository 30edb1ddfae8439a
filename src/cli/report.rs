//! Report formatting and printing utilities.
//!
//! Every printer has a `*_to` variant taking a writer so output can be
//! captured in tests. Colors follow the `colored` crate, which honours
//! `NO_COLOR`.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::{
    driver::{BatchObserver, BatchSummary},
    rewriter::RewriteOutcome,
    table::{ReplacementTable, RuleConflict},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Prints batch progress as it happens.
pub struct ConsoleObserver<W: Write> {
    writer: W,
    dry_run: bool,
}

impl ConsoleObserver<io::Stdout> {
    pub fn stdout(dry_run: bool) -> Self {
        Self::new(io::stdout(), dry_run)
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(writer: W, dry_run: bool) -> Self {
        Self { writer, dry_run }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> BatchObserver for ConsoleObserver<W> {
    fn on_processing(&mut self, path: &Path) {
        print_processing_to(path, &mut self.writer);
    }

    fn on_outcome(&mut self, _path: &Path, outcome: RewriteOutcome) {
        print_outcome_to(outcome, self.dry_run, &mut self.writer);
    }

    fn on_missing(&mut self, path: &Path) {
        print_missing_to(path, &mut self.writer);
    }
}

pub fn print_processing_to<W: Write>(path: &Path, writer: &mut W) {
    let _ = writeln!(writer, "Processing {}", path.display());
}

pub fn print_outcome_to<W: Write>(outcome: RewriteOutcome, dry_run: bool, writer: &mut W) {
    match outcome {
        RewriteOutcome::Updated { replacements } => {
            let verb = if dry_run { "would update" } else { "updated" };
            let _ = writeln!(
                writer,
                "  {} {} ({} replacement(s))",
                SUCCESS_MARK.green(),
                verb.green(),
                replacements
            );
        }
        RewriteOutcome::Unchanged => {
            let _ = writeln!(writer, "  {} {}", "-".dimmed(), "no change".dimmed());
        }
    }
}

pub fn print_missing_to<W: Write>(path: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} File not found: {}",
        FAILURE_MARK.red(),
        path.display()
    );
}

/// Print the end-of-run summary.
pub fn print_summary(summary: &BatchSummary, dry_run: bool) {
    print_summary_to(summary, dry_run, &mut io::stdout().lock());
}

pub fn print_summary_to<W: Write>(summary: &BatchSummary, dry_run: bool, writer: &mut W) {
    if summary.total() == 0 {
        let _ = writeln!(writer, "{}", "No files to process.".yellow());
        return;
    }

    let _ = writeln!(writer);
    if dry_run {
        let _ = writeln!(
            writer,
            "{} Would update {} of {} file(s) ({} replacement(s)).",
            "Done.".yellow().bold(),
            summary.updated,
            summary.total(),
            summary.replacements
        );
        if summary.updated > 0 {
            let _ = writeln!(
                writer,
                "Run with {} to write these changes.",
                "--apply".cyan()
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} Updated {} of {} file(s) ({} replacement(s)).",
            SUCCESS_MARK.green(),
            "Done.".green().bold(),
            summary.updated,
            summary.total(),
            summary.replacements
        );
    }

    if summary.missing > 0 {
        let _ = writeln!(writer, "Note: {} file(s) not found.", summary.missing);
    }
}

/// Print the replacement table in application order.
pub fn print_rules(table: &ReplacementTable) {
    print_rules_to(table, &mut io::stdout().lock());
}

pub fn print_rules_to<W: Write>(table: &ReplacementTable, writer: &mut W) {
    let max_width = table
        .iter()
        .map(|rule| UnicodeWidthStr::width(rule.quoted_source().as_str()))
        .max()
        .unwrap_or(0);

    for rule in table.iter() {
        let source = rule.quoted_source();
        let padding = max_width - UnicodeWidthStr::width(source.as_str());
        let _ = writeln!(
            writer,
            "{}{} {} {}",
            source,
            " ".repeat(padding),
            "->".blue(),
            rule.quoted_target().cyan()
        );
    }

    let _ = writeln!(writer, "{} rule(s)", table.len());
}

/// Print order-dependent rule pairs as warnings on stderr.
pub fn print_conflicts(conflicts: &[RuleConflict]) {
    print_conflicts_to(conflicts, &mut io::stderr().lock());
}

pub fn print_conflicts_to<W: Write>(conflicts: &[RuleConflict], writer: &mut W) {
    for conflict in conflicts {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), conflict);
    }
}
