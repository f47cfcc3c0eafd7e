use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_get_translated_value() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test.get_command("CFBundleName").args(["--lang", "fr"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Air Matters - Environs\n");
    Ok(())
}

#[test]
fn test_get_defaults_to_base_language() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test.get_command("C").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "this is c\n");
    Ok(())
}

#[test]
fn test_get_unsupported_language_falls_back() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test.get_command("CFBundleName").args(["--lang", "ch"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Air Matters\n");
    assert!(stderr(&output).contains("language ch is not supported"));
    Ok(())
}

#[test]
fn test_get_missing_id_exits_with_failure() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test.get_command("Missing").args(["--lang", "fr"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("No translation for 'Missing' (fr)"));
    Ok(())
}

#[test]
fn test_get_with_dir_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("locales/en.xliff", crate::EN_XLIFF)?;

    let output = test
        .get_command("A")
        .args(["--dir", "locales"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "this is a\n");
    Ok(())
}

#[test]
fn test_get_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/fr.xliff", crate::FR_XLIFF)?;
    test.write_file(
        ".xltrc.json",
        r#"{ "translationsDir": "./i18n", "baseLanguage": "fr" }"#,
    )?;

    // fr is the base language, so its source text is used.
    let output = test.get_command("CFBundleName").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Air Matters\n");
    Ok(())
}

#[test]
fn test_get_missing_directory_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.get_command("A").output()?;

    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("Failed to load translations from ./translations"));
    Ok(())
}

#[test]
fn test_get_dir_is_a_file() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test
        .get_command("A")
        .args(["--dir", "translations/en.xliff"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("is not a directory"));
    Ok(())
}

#[test]
fn test_get_invalid_file_name_is_error() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file("translations/fr.old.xliff", crate::FR_XLIFF)?;

    let output = test.get_command("A").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid file name"));
    assert!(stderr(&output).contains("fr.old.xliff"));
    Ok(())
}

#[test]
fn test_get_malformed_document_is_error() -> Result<()> {
    let test = CliTest::with_translations()?;
    test.write_file("translations/de.xliff", "<xliff><file>")?;

    let output = test.get_command("A").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to decode XLIFF document"));
    Ok(())
}
