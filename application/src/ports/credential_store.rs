//! Credential store port
//!
//! Opaque persistent key-value storage for the provider credential set,
//! kept under a single fixed record name.

use advisor_domain::CredentialSet;
use std::sync::Mutex;
use thiserror::Error;

/// Name of the persisted credential record
pub const CREDENTIAL_RECORD: &str = "alith-config";

#[derive(Error, Debug)]
pub enum CredentialStoreError {
    #[error("Credential store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Credential record is corrupt: {0}")]
    Corrupt(String),
}

/// Port for loading and persisting the credential set
pub trait CredentialStore: Send + Sync {
    /// Load the stored set. A missing record is an empty set.
    fn load(&self) -> Result<CredentialSet, CredentialStoreError>;

    /// Replace the stored record.
    fn save(&self, credentials: &CredentialSet) -> Result<(), CredentialStoreError>;

    /// Remove the stored record.
    fn clear(&self) -> Result<(), CredentialStoreError>;
}

/// In-memory store for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryCredentialStore {
    record: Mutex<Option<CredentialSet>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(credentials: CredentialSet) -> Self {
        Self {
            record: Mutex::new(Some(credentials)),
        }
    }

    /// Whether a record is currently stored.
    pub fn has_record(&self) -> bool {
        self.record.lock().map(|r| r.is_some()).unwrap_or(false)
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn load(&self) -> Result<CredentialSet, CredentialStoreError> {
        let record = self
            .record
            .lock()
            .map_err(|_| CredentialStoreError::Corrupt("store lock poisoned".to_string()))?;
        Ok(record.clone().unwrap_or_default())
    }

    fn save(&self, credentials: &CredentialSet) -> Result<(), CredentialStoreError> {
        let mut record = self
            .record
            .lock()
            .map_err(|_| CredentialStoreError::Corrupt("store lock poisoned".to_string()))?;
        *record = Some(credentials.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialStoreError> {
        let mut record = self
            .record
            .lock()
            .map_err(|_| CredentialStoreError::Corrupt("store lock poisoned".to_string()))?;
        *record = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_domain::ProviderId;

    #[test]
    fn test_in_memory_store_roundtrip() {
        let store = InMemoryCredentialStore::new();
        assert!(!store.has_record());
        assert_eq!(store.load().unwrap(), CredentialSet::default());

        let set = CredentialSet::new().with_key(ProviderId::OpenAi, "sk-1");
        store.save(&set).unwrap();
        assert!(store.has_record());
        assert_eq!(store.load().unwrap(), set);

        store.clear().unwrap();
        assert!(!store.has_record());
        assert!(!store.load().unwrap().is_configured());
    }
}
