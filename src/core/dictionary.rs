//! Per-language dictionaries built from translation documents.

use std::{collections::HashMap, path::Path};

use super::{
    document::{Document, load_document},
    error::Result,
    language::extract_language,
};

/// Language whose dictionary is read from source text and used as fallback.
pub const BASE_LANGUAGE: &str = "en";

/// Identifier to localized text for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten every unit of every file in document order.
    ///
    /// Takes the source text when `use_source` is set and the target text
    /// otherwise. A repeated identifier overwrites the earlier entry.
    pub fn from_document(doc: &Document, use_source: bool) -> Self {
        let mut dict = Self::new();
        for unit in doc.trans_units() {
            let text = if use_source {
                &unit.source.text
            } else {
                &unit.target.text
            };
            dict.insert(unit.id.clone(), text.clone());
        }
        dict
    }

    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(id.into(), text.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn contains_key(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::ops::Index<&str> for Dictionary {
    type Output = str;

    /// Missing identifiers index to the empty string.
    fn index(&self, id: &str) -> &str {
        self.get(id).unwrap_or_default()
    }
}

/// Parse `path` and build its dictionary.
///
/// The language comes from the file name; files of `base_language` read
/// source text, every other language reads target text.
pub fn load_dictionary(path: impl AsRef<Path>, base_language: &str) -> Result<Dictionary> {
    let path = path.as_ref();
    let language = extract_language(path)?;

    read_dictionary(path, language == base_language)
}

/// Parse `path` and build its dictionary for an already known language.
pub(crate) fn read_dictionary(path: &Path, use_source: bool) -> Result<Dictionary> {
    let doc = load_document(path)?;

    Ok(Dictionary::from_document(&doc, use_source))
}

/// Build the dictionary of `path` using [`BASE_LANGUAGE`] as base.
pub fn get_translation(path: impl AsRef<Path>) -> Result<Dictionary> {
    load_dictionary(path, BASE_LANGUAGE)
}
