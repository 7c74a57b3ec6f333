//! JSON file credential store.
//!
//! Persists the [`CredentialSet`] as a single JSON object
//! (`openaiApiKey`, `anthropicApiKey`, `lazaiApiKey`).

use advisor_application::{CredentialStore, CredentialStoreError};
use advisor_domain::CredentialSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct JsonFileCredentialStore {
    path: PathBuf,
}

impl JsonFileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the credential record.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for JsonFileCredentialStore {
    fn load(&self) -> Result<CredentialSet, CredentialStoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No credential record at {}", self.path.display());
                return Ok(CredentialSet::default());
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(CredentialSet::default());
        }

        serde_json::from_str(&content).map_err(|e| {
            CredentialStoreError::Corrupt(format!("{}: {}", self.path.display(), e))
        })
    }

    fn save(&self, credentials: &CredentialSet) -> Result<(), CredentialStoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(credentials)
            .map_err(|e| CredentialStoreError::Corrupt(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        debug!("Saved credential record to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_domain::ProviderId;

    #[test]
    fn test_missing_file_loads_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileCredentialStore::new(dir.path().join("alith-config.json"));

        let credentials = store.load().unwrap();
        assert!(!credentials.is_configured());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("alith-config.json");
        let store = JsonFileCredentialStore::new(&path);

        let credentials = CredentialSet::new().with_key(ProviderId::Anthropic, "sk-ant");
        store.save(&credentials).unwrap();

        assert!(path.exists());
        assert_eq!(store.load().unwrap(), credentials);
    }

    #[test]
    fn test_record_uses_camel_case_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alith-config.json");
        let store = JsonFileCredentialStore::new(&path);

        store
            .save(&CredentialSet::new().with_key(ProviderId::OpenAi, "sk-test"))
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["openaiApiKey"], "sk-test");
        assert!(value.get("anthropicApiKey").is_none());
    }

    #[test]
    fn test_reads_externally_written_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alith-config.json");
        std::fs::write(&path, r#"{"lazaiApiKey":"lz-key"}"#).unwrap();

        let credentials = JsonFileCredentialStore::new(&path).load().unwrap();
        assert_eq!(credentials.key(ProviderId::LazAi), Some("lz-key"));
        assert_eq!(credentials.select().unwrap().provider(), ProviderId::LazAi);
    }

    #[test]
    fn test_corrupt_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alith-config.json");
        std::fs::write(&path, "not json").unwrap();

        let err = JsonFileCredentialStore::new(&path).load().unwrap_err();
        assert!(matches!(err, CredentialStoreError::Corrupt(_)));
    }

    #[test]
    fn test_clear_removes_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alith-config.json");
        let store = JsonFileCredentialStore::new(&path);

        store
            .save(&CredentialSet::new().with_key(ProviderId::OpenAi, "sk-test"))
            .unwrap();
        store.clear().unwrap();

        assert!(!path.exists());
        assert!(!store.load().unwrap().is_configured());
        // Clearing twice is fine
        store.clear().unwrap();
    }
}
