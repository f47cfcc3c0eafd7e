//! Core loading and lookup engine.
//!
//! ## Module Structure
//!
//! - `document`: XLIFF document model, parser and serializer
//! - `reader`: event-based decoder behind the parser
//! - `language`: language code extraction from file names
//! - `dictionary`: per-language identifier to text dictionaries
//! - `translator`: directory loader and lookup with base-language fallback
//! - `error`: error type shared by the modules above

pub mod dictionary;
pub mod document;
pub mod error;
pub mod language;
mod reader;
pub mod translator;

pub use dictionary::{BASE_LANGUAGE, Dictionary, get_translation, load_dictionary};
pub use document::{
    Body, Document, File, Header, Segment, Tool, TransUnit, load_document, parse_document,
    to_xml_string,
};
pub use error::{Result, XliffError};
pub use language::{XLIFF_EXTENSION, extract_language};
pub use translator::{AllDictionaries, Translator};
