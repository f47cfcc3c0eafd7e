//! Dispatches parsed arguments to the matching command handler.

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{get::get, init::init, languages::languages, show::show},
    exit_status::ExitStatus,
};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Get(cmd)) => get(cmd),
        Some(Command::Languages(cmd)) => languages(cmd),
        Some(Command::Show(cmd)) => show(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
