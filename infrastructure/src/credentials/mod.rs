//! File-backed credential storage

mod file_store;

pub use file_store::JsonFileCredentialStore;
