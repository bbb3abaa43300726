pub mod toml_config;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

pub use toml_config::{AppConfig, OutputFormat};
