//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown provider: {0} (expected one of: openai, anthropic, lazai)")]
    UnknownProvider(String),

    #[error("Invalid governance task: {0}")]
    InvalidTask(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_provider_display() {
        let error = DomainError::UnknownProvider("gemini".to_string());
        assert_eq!(
            error.to_string(),
            "Unknown provider: gemini (expected one of: openai, anthropic, lazai)"
        );
    }

    #[test]
    fn test_invalid_task_display() {
        let error = DomainError::InvalidTask("active exceeds total".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid governance task: active exceeds total"
        );
    }
}
