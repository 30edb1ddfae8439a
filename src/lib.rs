//! Relabel - replace hardcoded UI strings with localization keys
//!
//! Relabel is a CLI tool and library that rewrites quoted UI string literals
//! (for example `"Cancel"`) into localization-key literals (`"actions.cancel"`)
//! across a list of source files, using an ordered replacement table.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit status)
//! - `config`: Configuration file loading and parsing
//! - `driver`: Batch run over a file list with per-file outcomes
//! - `files`: File list resolution from explicit lists or include patterns
//! - `rewriter`: Quoted-literal substitution and atomic file replacement
//! - `table`: Replacement rules and the built-in table

pub mod cli;
pub mod config;
pub mod driver;
pub mod files;
pub mod rewriter;
pub mod table;
