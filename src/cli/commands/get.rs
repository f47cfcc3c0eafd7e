use anyhow::Result;
use colored::Colorize;

use super::super::args::GetCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::FAILURE_MARK;
use super::context::CommandContext;

pub fn get(cmd: GetCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let translator = ctx.load_translator()?;
    let lang = cmd.lang.as_deref().unwrap_or(&ctx.base_language);

    let text = translator.t(&cmd.id, lang);
    if text.is_empty() {
        eprintln!(
            "{} {}",
            FAILURE_MARK.red(),
            format!("No translation for '{}' ({})", cmd.id, lang).red()
        );
        return Ok(ExitStatus::Failure);
    }

    println!("{}", text);
    Ok(ExitStatus::Success)
}
