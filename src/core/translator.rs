//! Directory-backed translator.
//!
//! A [`Translator`] loads every `<language>.xliff` file of a directory into
//! one [`Dictionary`] per language and answers lookups against them.
//!
//! ## Concurrency
//!
//! `load` builds the complete mapping before taking the write lock and then
//! swaps it in, so concurrent `t` calls observe either the previous or the
//! new mapping, never a partially loaded one.

use std::{
    collections::HashMap,
    fs,
    path::Path,
    sync::{PoisonError, RwLock, RwLockReadGuard},
};

use super::{
    dictionary::{BASE_LANGUAGE, Dictionary, read_dictionary},
    error::{Result, XliffError},
    language::extract_language,
};

/// All dictionaries, keyed by language code.
pub type AllDictionaries = HashMap<String, Dictionary>;

#[derive(Debug)]
pub struct Translator {
    base_language: String,
    data: RwLock<AllDictionaries>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator {
    /// Create an empty translator with [`BASE_LANGUAGE`] as base.
    pub fn new() -> Self {
        Self::with_base_language(BASE_LANGUAGE)
    }

    pub fn with_base_language(base_language: impl Into<String>) -> Self {
        Self {
            base_language: base_language.into(),
            data: RwLock::new(HashMap::new()),
        }
    }

    pub fn base_language(&self) -> &str {
        &self.base_language
    }

    /// Load every translation file in `dir`, replacing the current mapping.
    ///
    /// Only immediate entries are visited, in directory listing order. The
    /// first invalid file name, unreadable file or malformed document aborts
    /// the load; in that case the current mapping is left as it was.
    pub fn load(&self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        let loaded = scan_translation_files(dir, &self.base_language)?;

        tracing::debug!(
            "Loaded {} language(s) from {}",
            loaded.len(),
            dir.display()
        );

        *self.data.write().unwrap_or_else(PoisonError::into_inner) = loaded;
        Ok(())
    }

    /// Look up `id` in the dictionary of `lang`.
    ///
    /// An unknown `lang` falls back to the base language; an unknown `id`
    /// yields an empty string.
    pub fn t(&self, id: &str, lang: &str) -> String {
        let data = self.read();
        let dict = match data.get(lang) {
            Some(dict) => Some(dict),
            None => {
                tracing::warn!("language {} is not supported", lang);
                data.get(&self.base_language)
            }
        };

        let text = dict.and_then(|dict| dict.get(id)).unwrap_or_default();
        text.to_string()
    }

    /// Loaded language codes, sorted.
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.read().keys().cloned().collect();
        languages.sort();
        languages
    }

    pub fn contains_language(&self, lang: &str) -> bool {
        self.read().contains_key(lang)
    }

    /// Snapshot of one language's dictionary.
    pub fn dictionary(&self, lang: &str) -> Option<Dictionary> {
        self.read().get(lang).cloned()
    }

    /// Number of loaded languages.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, AllDictionaries> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Build the dictionaries of every entry in `dir`.
fn scan_translation_files(dir: &Path, base_language: &str) -> Result<AllDictionaries> {
    let metadata = fs::metadata(dir).map_err(|e| XliffError::io(dir, e))?;
    if !metadata.is_dir() {
        return Err(XliffError::NotADirectory(dir.to_path_buf()));
    }

    let mut result = AllDictionaries::new();
    for entry in fs::read_dir(dir).map_err(|e| XliffError::io(dir, e))? {
        let path = entry.map_err(|e| XliffError::io(dir, e))?.path();
        let language = extract_language(&path)?;
        let dict = read_dictionary(&path, language == base_language)?;

        tracing::debug!(
            "Loaded {} entries for '{}' from {}",
            dict.len(),
            language,
            path.display()
        );
        result.insert(language, dict);
    }

    Ok(result)
}
