//! xlt - XLIFF translation lookup
//!
//! xlt loads a directory of `<language>.xliff` documents into one dictionary
//! per language and looks up localized strings by translation unit
//! identifier, falling back to the base language (`en` by default) when a
//! language is not available.
//!
//! ```no_run
//! use xlt::core::Translator;
//!
//! let translator = Translator::new();
//! translator.load("./translations")?;
//! assert_eq!(translator.t("CFBundleName", "fr"), "Air Matters - Environs");
//! # Ok::<(), xlt::core::XliffError>(())
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `core`: Document parsing, dictionaries and the translator

pub mod cli;
pub mod config;
pub mod core;
