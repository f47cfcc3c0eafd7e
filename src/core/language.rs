use std::path::Path;

use super::error::{Result, XliffError};

/// Extension every translation document must carry.
pub const XLIFF_EXTENSION: &str = "xliff";

/// Extracts the language code from a translation file path.
///
/// The text after the last separator must be exactly `<language>.xliff`:
/// names with no dot, more than one dot or another extension are rejected,
/// and so is a path ending in a separator. The language part may be empty.
///
/// Examples:
/// - "fr.xliff" -> Ok("fr")
/// - "./data/zh-Hans.xliff" -> Ok("zh-Hans")
/// - ".xliff" -> Ok("")
/// - "a.b.xliff" -> Err(InvalidFileName)
/// - "data/fr.xliff/" -> Err(InvalidFileName)
pub fn extract_language(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let invalid = || XliffError::InvalidFileName(path.to_path_buf());

    // `Path::file_name` would skip a trailing separator, so split the raw text.
    let name = path
        .to_str()
        .ok_or_else(invalid)?
        .rsplit(['/', std::path::MAIN_SEPARATOR])
        .next()
        .unwrap_or_default();

    let parts: Vec<&str> = name.split('.').collect();
    match parts.as_slice() {
        [language, XLIFF_EXTENSION] => Ok(language.to_string()),
        _ => Err(invalid()),
    }
}
