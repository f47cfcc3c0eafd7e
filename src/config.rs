use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::BASE_LANGUAGE;

pub const CONFIG_FILE_NAME: &str = ".xltrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_translations_dir", alias = "dir")]
    pub translations_dir: String,
    #[serde(default = "default_base_language")]
    pub base_language: String,
}

fn default_translations_dir() -> String {
    "./translations".to_string()
}

fn default_base_language() -> String {
    BASE_LANGUAGE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translations_dir: default_translations_dir(),
            base_language: default_base_language(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The base language must be usable as the stem of a `<language>.xliff` file.
    pub fn validate(&self) -> Result<()> {
        if self.translations_dir.trim().is_empty() {
            bail!("'translationsDir' must not be empty");
        }

        if self.base_language.is_empty() {
            bail!("'baseLanguage' must not be empty");
        }

        if self.base_language.contains(['.', '/', '\\']) {
            bail!(
                "Invalid 'baseLanguage': \"{}\" (must not contain '.' or path separators)",
                self.base_language
            );
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!("Loaded configuration from {:?}", path);
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
