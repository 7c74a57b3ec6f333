//! Configuration file loading for dao-advisor
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./dao-advisor.toml` or `./.dao-advisor.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/dao-advisor/config.toml`
//! 4. Fallback: `~/.config/dao-advisor/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAnthropicConfig, FileConfig, FileLoggingConfig, FileOpenAiConfig,
    FileProvidersConfig, FileStorageConfig,
};
pub use loader::ConfigLoader;
