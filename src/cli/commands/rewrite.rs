//! Rewrite command - replace quoted UI strings with localization keys.
//!
//! Files come from positional arguments (relative to the working directory
//! or `--root`), or from the config's `files` or `includes`. Each listed file is rewritten in order; a missing file is
//! reported and skipped, any other error aborts the run.
//!
//! Use `--apply` to actually write files (default is dry-run mode).

use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{
    args::RewriteCommand,
    exit_status::ExitStatus,
    report::{self, ConsoleObserver},
};
use super::RunContext;
use crate::{driver::run_batch, files::resolve_files, rewriter::Rewriter};

pub fn rewrite(cmd: RewriteCommand) -> Result<ExitStatus> {
    let args = &cmd.args;
    let verbose = args.common.verbose;
    let dry_run = !args.apply;
    let ctx = RunContext::new(&args.common)?;
    let config = &ctx.loaded.config;

    if verbose {
        report::print_conflicts(&ctx.table.conflicts());
    }

    let root = match &args.root {
        Some(root) => root.clone(),
        None => ctx.loaded.root(),
    };
    // Positional files are typed from the shell, so they resolve against
    // `--root` when given and the working directory otherwise.
    let files: Vec<PathBuf> = if args.files.is_empty() {
        config.files.iter().map(PathBuf::from).collect()
    } else {
        let base = match &args.root {
            Some(root) => root.clone(),
            None => env::current_dir().context("Failed to get current directory")?,
        };
        args.files.iter().map(|file| base.join(file)).collect()
    };

    let resolved = resolve_files(
        &root,
        &files,
        &config.includes,
        &config.ignores,
        &config.extensions,
        verbose,
    );
    if verbose && resolved.skipped_count > 0 {
        eprintln!(
            "{} {} path(s) could not be accessed",
            "warning:".bold().yellow(),
            resolved.skipped_count
        );
    }

    let rewriter = Rewriter::new(&ctx.table)?.dry_run(dry_run);
    let mut observer = ConsoleObserver::stdout(dry_run);
    let summary = run_batch(&rewriter, &resolved.files, &mut observer)?;

    report::print_summary(&summary, dry_run);

    Ok(ExitStatus::from_batch(&summary, dry_run))
}
