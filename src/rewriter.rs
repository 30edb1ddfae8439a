//! File rewriter: applies a replacement table to a text file.
//!
//! Substitution is purely textual. A quoted literal is replaced wherever it
//! appears, including comments and strings that are not UI labels, so callers
//! should only point the rewriter at files known to hold UI code.

use std::{fs, io::Write, ops::Range, path::Path};

use anyhow::{Context, Result, bail};
use regex::Regex;
use tempfile::NamedTempFile;

use crate::table::ReplacementTable;

/// Result of rewriting one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// Content changed (or would change, in dry-run mode).
    Updated { replacements: usize },
    /// No rule matched; the file was not written.
    Unchanged,
}

impl RewriteOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, RewriteOutcome::Updated { .. })
    }
}

/// In-memory result of applying every rule to a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub text: String,
    pub replacements: usize,
}

struct CompiledRule {
    pattern: Regex,
    replacement: String,
}

/// Applies compiled rules, in table order, to files or strings.
pub struct Rewriter {
    rules: Vec<CompiledRule>,
    dry_run: bool,
}

impl Rewriter {
    pub fn new(table: &ReplacementTable) -> Result<Self> {
        // Identity rules never change a file, so they are not compiled.
        let rules = table
            .iter()
            .filter(|rule| rule.source != rule.target)
            .map(|rule| {
                let pattern = Regex::new(&format!("\"{}\"", regex::escape(&rule.source)))
                    .with_context(|| format!("Failed to compile rule for \"{}\"", rule.source))?;
                Ok(CompiledRule {
                    pattern,
                    replacement: rule.quoted_target(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rules,
            dry_run: false,
        })
    }

    /// In dry-run mode outcomes are computed but files are never written.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Apply every rule to `content`, each as a global non-overlapping replace.
    ///
    /// `replacements` counts literals of the input that were rewritten. A
    /// later rule matching text an earlier rule produced continues that
    /// rewrite and is not counted again.
    pub fn rewrite_str(&self, content: &str) -> Rewritten {
        let mut text = content.to_string();
        // Byte ranges of `text` written by earlier rules.
        let mut produced: Vec<Range<usize>> = Vec::new();
        let mut replacements = 0;

        for rule in &self.rules {
            let matches: Vec<Range<usize>> =
                rule.pattern.find_iter(&text).map(|m| m.range()).collect();
            if matches.is_empty() {
                continue;
            }

            let mut next = String::with_capacity(text.len());
            let mut next_produced = Vec::with_capacity(produced.len() + matches.len());
            let mut last = 0;
            for m in &matches {
                if !produced.iter().any(|span| overlaps(span, m)) {
                    replacements += 1;
                }
                next.push_str(&text[last..m.start]);
                let start = next.len();
                next.push_str(&rule.replacement);
                next_produced.push(start..next.len());
                last = m.end;
            }
            next.push_str(&text[last..]);

            for span in &produced {
                if matches.iter().any(|m| overlaps(span, m)) {
                    continue;
                }
                let before = matches.iter().filter(|m| m.end <= span.start);
                let removed: usize = before.clone().map(|m| m.len()).sum();
                let added = before.count() * rule.replacement.len();
                let start = span.start - removed + added;
                next_produced.push(start..start + span.len());
            }

            text = next;
            produced = next_produced;
        }

        Rewritten { text, replacements }
    }

    /// Rewrite the file at `path` in place.
    ///
    /// The file is only written when its content changes, and then atomically
    /// through a temporary sibling file.
    pub fn rewrite_file(&self, path: &Path) -> Result<RewriteOutcome> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
        let content = String::from_utf8(bytes)
            .with_context(|| format!("File is not valid UTF-8: {}", path.display()))?;

        let rewritten = self.rewrite_str(&content);
        if rewritten.text == content {
            return Ok(RewriteOutcome::Unchanged);
        }

        if !self.dry_run {
            write_atomic(path, &rewritten.text)?;
        }

        Ok(RewriteOutcome::Updated {
            replacements: rewritten.replacements,
        })
    }
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

/// Replace `path` with `content` via a temporary file in the same directory.
///
/// Symlinks are resolved first so the link itself survives and its target
/// is updated. The original permissions are carried over, and read-only
/// files are refused. If anything fails before the rename, the original
/// file is untouched.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let target = fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve path: {}", path.display()))?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));

    let permissions = fs::metadata(&target)
        .with_context(|| format!("Failed to read metadata: {}", path.display()))?
        .permissions();
    if permissions.readonly() {
        bail!("File is read-only: {}", path.display());
    }

    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in: {}", dir.display()))?;
    temp.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write temporary file for: {}", path.display()))?;
    temp.as_file()
        .sync_all()
        .with_context(|| format!("Failed to flush temporary file for: {}", path.display()))?;
    temp.as_file()
        .set_permissions(permissions)
        .with_context(|| format!("Failed to set permissions for: {}", path.display()))?;

    temp.persist(&target)
        .with_context(|| format!("Failed to replace file: {}", path.display()))?;

    Ok(())
}
