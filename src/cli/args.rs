//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `rewrite`: Replace quoted UI literals with localization keys
//! - `rules`: List the effective replacement rules
//! - `init`: Initialize relabel configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Rewrite(cmd)) => cmd.args.common.verbose,
            Some(Command::Rules(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that use the replacement table.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Replacement rules JSON file (overrides config file)
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Apply longer source literals first
    #[arg(long)]
    pub sort_by_length: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct RewriteArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Base directory for files (overrides config file)
    #[arg(long, env = "RELABEL_ROOT")]
    pub root: Option<PathBuf>,

    /// Actually write files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Files to rewrite, relative to the working directory or --root
    /// (overrides config file)
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RewriteCommand {
    #[command(flatten)]
    pub args: RewriteArgs,
}

#[derive(Debug, Parser)]
pub struct RulesArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RulesCommand {
    #[command(flatten)]
    pub args: RulesArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Replace quoted UI strings with localization keys
    Rewrite(RewriteCommand),
    /// List replacement rules in the order they are applied
    Rules(RulesCommand),
    /// Initialize a new .relabelrc.json configuration file
    Init,
}
