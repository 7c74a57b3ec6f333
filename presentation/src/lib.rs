//! Presentation layer for dao-advisor
//!
//! This crate contains CLI definitions and output formatters.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{
    AnalyzeArgs, Cli, Command, ConfigCommand, ConfigSetArgs, InsightsArgs, OutputFormat,
    ProposalKind, SuggestArgs,
};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{AdvisorStatus, OutputFormatter};
pub use output::formatter_for;
pub use output::json::JsonFormatter;
