//! Infrastructure layer for dao-advisor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: HTTP provider adapters, the file-backed
//! credential store, the JSONL advisory log and configuration file loading.

pub mod config;
pub mod credentials;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileAnthropicConfig, FileConfig, FileLoggingConfig,
    FileOpenAiConfig, FileProvidersConfig, FileStorageConfig,
};
pub use credentials::JsonFileCredentialStore;
pub use logging::JsonlAdvisoryLogger;
pub use providers::{
    ProviderAdapter, anthropic::AnthropicAdapter, lazai::LazAiAdapter, openai::OpenAiAdapter,
    routing::RoutingGateway,
};
