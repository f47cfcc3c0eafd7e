use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Created .xltrc.json"));
    assert!(test.root().join(".xltrc.json").exists());

    let content = test.read_file(".xltrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["translationsDir"], "./translations");
    assert_eq!(parsed["baseLanguage"], "en");
    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".xltrc.json", "{}")?;

    let output = test.command().arg("init").output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains(".xltrc.json already exists"));
    assert_eq!(test.read_file(".xltrc.json")?, "{}");
    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::with_translations()?;

    test.command().arg("init").output()?;

    let output = test.get_command("CFBundleName").args(["--lang", "fr"]).output()?;
    assert!(
        output.status.success(),
        "get should work with initialized config. stderr: {}",
        stderr(&output)
    );
    assert_eq!(stdout(&output), "Air Matters - Environs\n");
    Ok(())
}
