use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_show_document() -> Result<()> {
    let test = CliTest::with_translations()?;

    let output = test
        .command()
        .args(["show", "translations/fr.xliff"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "xliff 1.2 urn:oasis:names:tc:xliff:document:1.2\n\
         file: AirMatters/en.lproj/InfoPlist.strings (en -> fr, plaintext)\n  \
         tool: Xcode 9.2 (build 9C40b)\n  \
         ✓ CFBundleName  Air Matters => Air Matters - Environs\n\
         file: AirMatters/en.lproj/Localizable.strings (en -> fr, plaintext)\n  \
         tool: Xcode 9.2 (build 9C40b)\n    \
         A  this is a => voici a\n    \
         B  this is b => voici b\n\
         ✓ 2 files, 3 translation units\n"
    );
    Ok(())
}

#[test]
fn test_show_accepts_any_file_name() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("export/Localizable.strings.xliff", crate::EN_XLIFF)?;

    let output = test
        .command()
        .args(["show", "export/Localizable.strings.xliff"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("2 files, 4 translation units"));
    Ok(())
}

#[test]
fn test_show_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().args(["show", "missing.xliff"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read missing.xliff"));
    Ok(())
}
