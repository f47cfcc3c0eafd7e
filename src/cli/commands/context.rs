use std::{env, path::PathBuf};

use anyhow::{Context as _, Result};

use super::super::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, load_config};
use crate::core::Translator;

/// Settings resolved from the config file and command line overrides.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub translations_dir: PathBuf,
    pub base_language: String,
    pub verbose: bool,
}

impl CommandContext {
    /// Resolve settings for the current directory.
    ///
    /// Command line flags take precedence over `.xltrc.json`, which takes
    /// precedence over the defaults.
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine current directory")?;
        let config_result = load_config(&cwd)?;

        if args.verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let config = config_result.config;
        Ok(Self {
            translations_dir: args
                .dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.translations_dir)),
            base_language: args
                .base_language
                .clone()
                .unwrap_or(config.base_language),
            verbose: args.verbose,
        })
    }

    /// Load the translations directory into a fresh translator.
    pub fn load_translator(&self) -> Result<Translator> {
        let translator = Translator::with_base_language(&self.base_language);
        translator.load(&self.translations_dir).with_context(|| {
            format!(
                "Failed to load translations from {}",
                self.translations_dir.display()
            )
        })?;
        Ok(translator)
    }
}
