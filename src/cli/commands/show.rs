use anyhow::{Context, Result};

use super::super::args::ShowCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::print_document;
use crate::core::load_document;

pub fn show(cmd: ShowCommand) -> Result<ExitStatus> {
    let doc = load_document(&cmd.file)
        .with_context(|| format!("Failed to read {}", cmd.file.display()))?;

    print_document(&doc);
    Ok(ExitStatus::Success)
}
