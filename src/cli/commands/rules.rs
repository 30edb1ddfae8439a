//! Rules command - list the effective replacement table.
//!
//! Rules print in the order they are applied. Rule pairs whose result
//! depends on that order are reported as warnings.

use anyhow::Result;

use super::super::{args::RulesCommand, exit_status::ExitStatus, report};
use super::RunContext;

pub fn rules(cmd: RulesCommand) -> Result<ExitStatus> {
    let ctx = RunContext::new(&cmd.args.common)?;

    report::print_rules(&ctx.table);
    report::print_conflicts(&ctx.table.conflicts());

    Ok(ExitStatus::Success)
}
