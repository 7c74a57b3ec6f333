//! Prompt domain
//!
//! The governance-advisor instruction and the per-task prompt templates.

mod template;

pub use template::GovernancePromptTemplate;
