//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod advisory_logger;
pub mod credential_store;
pub mod llm_gateway;
