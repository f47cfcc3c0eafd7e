use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_languages_lists_entries() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test.command().arg("languages").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "  en  4 entries (base)\n  fr  3 entries\n✓ Loaded 2 languages from ./translations\n"
    );
    Ok(())
}

#[test]
fn test_languages_marks_configured_base() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test
        .command()
        .args(["languages", "--base-language", "fr"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("  fr  3 entries (base)\n"));
    Ok(())
}

#[test]
fn test_languages_empty_directory() -> Result<()> {
    let test = CliTest::new()?;
    std::fs::create_dir(test.root().join("translations"))?;

    let output = test.command().arg("languages").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("No translation files found in ./translations"));
    Ok(())
}
