use anyhow::Result;

use super::super::args::LanguagesCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{LanguageRow, print_languages};
use super::context::CommandContext;

pub fn languages(cmd: LanguagesCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let translator = ctx.load_translator()?;

    let rows: Vec<LanguageRow> = translator
        .languages()
        .into_iter()
        .map(|language| LanguageRow {
            entries: translator
                .dictionary(&language)
                .map(|dict| dict.len())
                .unwrap_or_default(),
            is_base: language == ctx.base_language,
            language,
        })
        .collect();

    print_languages(&rows, &ctx.translations_dir.display().to_string());

    if rows.is_empty() {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
