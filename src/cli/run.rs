use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{init::init, rewrite::rewrite, rules::rules},
    exit_status::ExitStatus,
};

/// Dispatch to the handler of the parsed command.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Rewrite(cmd)) => rewrite(cmd),
        Some(Command::Rules(cmd)) => rules(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
