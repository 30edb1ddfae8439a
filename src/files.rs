use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of resolving the files to rewrite.
pub struct ResolveResult {
    /// Paths in processing order, without duplicates.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

struct Ignores {
    root: PathBuf,
    literal_paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl Ignores {
    fn new(root: &Path, ignore_patterns: &[String], verbose: bool) -> Self {
        let mut literal_paths = Vec::new();
        let mut patterns = Vec::new();

        for p in ignore_patterns {
            if is_glob_pattern(p) {
                match Pattern::new(p) {
                    Ok(pattern) => patterns.push(pattern),
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid ignore pattern '{}': {}",
                                "warning:".bold().yellow(),
                                p,
                                e
                            );
                        }
                    }
                }
            } else {
                literal_paths.push(root.join(p));
            }
        }

        Self {
            root: root.to_path_buf(),
            literal_paths,
            patterns,
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.literal_paths.iter().any(|ignore| path.starts_with(ignore)) {
            return true;
        }
        // Glob ignores match the path as given or relative to the root
        let path_str = path.to_string_lossy();
        let relative = path
            .strip_prefix(&self.root)
            .ok()
            .map(|rel| rel.to_string_lossy());
        self.patterns.iter().any(|p| {
            p.matches(&path_str) || relative.as_deref().is_some_and(|rel| p.matches(rel))
        })
    }
}

/// Resolve the ordered list of files for a batch run.
///
/// An explicit `files` list wins: relative entries are joined to `root`, and
/// entries are kept even when missing so the batch can report them. Otherwise `includes` are
/// expanded (glob patterns or literal paths, directories walked and filtered
/// by `extensions`). Ignored paths are dropped in both modes.
pub fn resolve_files(
    root: &Path,
    files: &[PathBuf],
    includes: &[String],
    ignore_patterns: &[String],
    extensions: &[String],
    verbose: bool,
) -> ResolveResult {
    let ignores = Ignores::new(root, ignore_patterns, verbose);
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut resolved: Vec<PathBuf> = Vec::new();
    let mut skipped_count = 0;

    let mut push = |path: PathBuf, resolved: &mut Vec<PathBuf>| {
        if !ignores.is_ignored(&path) && seen.insert(path.clone()) {
            resolved.push(path);
        }
    };

    if !files.is_empty() {
        for file in files {
            push(root.join(file), &mut resolved);
        }
        return ResolveResult {
            files: resolved,
            skipped_count,
        };
    }

    for inc in includes {
        let mut expanded: Vec<PathBuf> = Vec::new();

        let targets: Vec<PathBuf> = if is_glob_pattern(inc) {
            let full_pattern = root.join(inc);
            let pattern_str = full_pattern.to_string_lossy();
            match glob(&pattern_str) {
                Ok(entries) => entries.flatten().collect(),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid glob pattern '{}': {}",
                            "warning:".bold().yellow(),
                            inc,
                            e
                        );
                    }
                    Vec::new()
                }
            }
        } else {
            let path = root.join(inc);
            if path.exists() {
                vec![path]
            } else {
                if verbose {
                    eprintln!(
                        "{} Include path does not exist: {}",
                        "warning:".bold().yellow(),
                        path.display()
                    );
                }
                Vec::new()
            }
        };

        for target in targets {
            if target.is_file() {
                expanded.push(target);
                continue;
            }
            for entry in WalkDir::new(&target) {
                let entry = match entry {
                    Ok(e) => e,
                    Err(e) => {
                        skipped_count += 1;
                        if verbose {
                            eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                        }
                        continue;
                    }
                };
                let path = entry.path();
                if path.is_file() && has_extension(path, extensions) {
                    expanded.push(path.to_path_buf());
                }
            }
        }

        expanded.sort();
        for path in expanded {
            push(path, &mut resolved);
        }
    }

    ResolveResult {
        files: resolved,
        skipped_count,
    }
}

/// An empty extension list accepts every file.
fn has_extension(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
