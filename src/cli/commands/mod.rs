mod context;
pub mod get;
pub mod init;
pub mod languages;
pub mod show;

pub use context::CommandContext;
