//! Credential storage configuration (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Where the credential record is kept
    /// (default: `<config dir>/dao-advisor/alith-config.json`).
    pub credentials_path: Option<PathBuf>,
}
