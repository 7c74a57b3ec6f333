//! Output formatter trait

use advisor_domain::{CredentialSet, InsightsResult, ProposalAnalysisResult, ProviderId};

/// Provider state shown by the `status` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorStatus {
    pub configured: bool,
    pub active_provider: Option<ProviderId>,
    pub configured_providers: Vec<ProviderId>,
}

impl AdvisorStatus {
    pub fn from_credentials(credentials: &CredentialSet) -> Self {
        Self {
            configured: credentials.is_configured(),
            active_provider: credentials.select().map(|handle| handle.provider()),
            configured_providers: credentials.configured_providers(),
        }
    }
}

/// Trait for formatting advisory results
pub trait OutputFormatter {
    fn format_analysis(&self, result: &ProposalAnalysisResult) -> String;

    fn format_insights(&self, result: &InsightsResult) -> String;

    fn format_suggestions(&self, suggestions: &[String]) -> String;

    fn format_status(&self, status: &AdvisorStatus) -> String;

    /// Show which keys are stored without revealing them
    fn format_credentials(&self, credentials: &CredentialSet) -> String;
}

/// Mask a secret, keeping only the last four characters.
pub fn redact(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}
