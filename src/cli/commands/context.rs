use std::env;

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::args::CommonArgs;
use crate::{
    config::{CONFIG_FILE_NAME, ConfigLoadResult, load_config},
    table::ReplacementTable,
};

/// Configuration and replacement table shared by commands.
pub struct RunContext {
    pub loaded: ConfigLoadResult,
    /// Effective table: `--rules` file or config rules, ordered for application.
    pub table: ReplacementTable,
}

impl RunContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to get current directory")?;
        let loaded = load_config(&cwd)?;

        let table = match &common.rules {
            Some(path) => ReplacementTable::load(path)?,
            None => loaded.config.rules.clone(),
        };
        table.validate()?;

        let table = if common.sort_by_length || loaded.config.sort_by_length {
            table.sorted_by_length()
        } else {
            table
        };

        if common.verbose {
            let source = if loaded.from_file {
                loaded.base_dir.join(CONFIG_FILE_NAME).display().to_string()
            } else {
                "defaults".to_string()
            };
            eprintln!(
                "{} config: {}, {} rule(s)",
                "info:".bold().cyan(),
                source,
                table.len()
            );
        }

        Ok(Self { loaded, table })
    }
}
