//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use advisor_application::CREDENTIAL_RECORD;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::PathBuf;

const APP_DIR: &str = "dao-advisor";
const PROJECT_CONFIG_FILES: [&str; 2] = ["dao-advisor.toml", ".dao-advisor.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./dao-advisor.toml` or `./.dao-advisor.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/dao-advisor/config.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/dao-advisor/config.toml if set,
    /// otherwise falls back to ~/.config/dao-advisor/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Default location of the persisted credential record
    /// (`<config dir>/dao-advisor/alith-config.json`).
    pub fn default_credentials_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join(format!("{CREDENTIAL_RECORD}.json")))
    }

    /// Resolve the credential record path, preferring `[storage] credentials_path`.
    pub fn credentials_path(config: &FileConfig) -> Option<PathBuf> {
        config
            .storage
            .credentials_path
            .clone()
            .or_else(Self::default_credentials_path)
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./dao-advisor.toml or ./.dao-advisor.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
