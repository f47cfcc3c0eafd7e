//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `get`: Look up one translation by identifier and language
//! - `languages`: List the languages found in the translations directory
//! - `show`: Print the contents of a single XLIFF document
//! - `init`: Initialize xlt configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's arguments.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Get(cmd)) => cmd.common.verbose,
            Some(Command::Languages(cmd)) => cmd.common.verbose,
            Some(Command::Show(cmd)) => cmd.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that load a translations directory.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Translations directory (overrides config file)
    #[arg(long, env = "XLT_DIR")]
    pub dir: Option<PathBuf>,

    /// Base language used for source text and fallback (overrides config file)
    #[arg(long)]
    pub base_language: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct GetCommand {
    /// Translation unit identifier
    pub id: String,

    /// Language to look up (default: base language)
    #[arg(short, long)]
    pub lang: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LanguagesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ShowCommand {
    /// XLIFF document to print
    pub file: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the translation of an identifier
    Get(GetCommand),
    /// List loaded languages and their entry counts
    Languages(LanguagesCommand),
    /// Print the files and translation units of an XLIFF document
    Show(ShowCommand),
    /// Initialize a new .xltrc.json configuration file
    Init,
}
