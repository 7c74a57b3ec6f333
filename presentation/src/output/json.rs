//! JSON output formatter

use super::formatter::{AdvisorStatus, OutputFormatter, redact};
use advisor_domain::{CredentialSet, InsightsResult, ProposalAnalysisResult, ProviderId};
use serde::Serialize;
use serde_json::json;

/// Formats advisory results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_analysis(&self, result: &ProposalAnalysisResult) -> String {
        Self::to_json(result)
    }

    fn format_insights(&self, result: &InsightsResult) -> String {
        Self::to_json(result)
    }

    fn format_suggestions(&self, suggestions: &[String]) -> String {
        Self::to_json(suggestions)
    }

    fn format_status(&self, status: &AdvisorStatus) -> String {
        Self::to_json(&json!({
            "configured": status.configured,
            "activeProvider": status.active_provider,
            "configuredProviders": status.configured_providers,
        }))
    }

    fn format_credentials(&self, credentials: &CredentialSet) -> String {
        let mut map = serde_json::Map::new();
        for provider in ProviderId::PRIORITY {
            let value = credentials.key(provider).map(redact);
            map.insert(provider.as_str().to_string(), json!(value));
        }
        Self::to_json(&map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_domain::{Sentiment, fallback};

    #[test]
    fn test_analysis_uses_camel_case_fields() {
        let output = JsonFormatter.format_analysis(&ProposalAnalysisResult {
            risk_score: 20,
            sentiment: Sentiment::Positive,
            recommendations: vec!["Ship it".to_string()],
            predicted_outcome: "Likely to pass".to_string(),
        });
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["riskScore"], 20);
        assert_eq!(value["sentiment"], "positive");
        assert_eq!(value["predictedOutcome"], "Likely to pass");
    }

    #[test]
    fn test_suggestions_are_an_array() {
        let output = JsonFormatter.format_suggestions(&fallback::suggestions_not_configured());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            json!(["AI service unavailable - please review manually"])
        );
    }

    #[test]
    fn test_status_json() {
        let status = AdvisorStatus::from_credentials(
            &CredentialSet::new().with_key(ProviderId::OpenAi, "sk-test"),
        );
        let value: serde_json::Value =
            serde_json::from_str(&JsonFormatter.format_status(&status)).unwrap();
        assert_eq!(value["configured"], true);
        assert_eq!(value["activeProvider"], "openai");
        assert_eq!(value["configuredProviders"], json!(["openai"]));
    }

    #[test]
    fn test_credentials_are_redacted() {
        let credentials =
            CredentialSet::new().with_key(ProviderId::Anthropic, "sk-ant-0123456789abcd");
        let output = JsonFormatter.format_credentials(&credentials);
        assert!(!output.contains("0123456789"));

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["anthropic"], "****abcd");
        assert!(value["openai"].is_null());
    }
}
