//! Console output formatter for advisory results

use super::formatter::{AdvisorStatus, OutputFormatter, redact};
use advisor_domain::{
    CredentialSet, HealthRating, InsightsResult, ProposalAnalysisResult, ProviderId, RiskLevel,
    Sentiment,
};
use colored::{ColoredString, Colorize};

/// Formats advisory results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    fn bullets(items: &[String]) -> String {
        items
            .iter()
            .map(|item| format!("  * {}\n", item))
            .collect()
    }

    pub fn risk_badge(score: u32) -> ColoredString {
        let level = RiskLevel::from_score(score);
        let text = format!("{} Risk", level.label());
        match level {
            RiskLevel::Low => text.green().bold(),
            RiskLevel::Medium => text.yellow().bold(),
            RiskLevel::High => text.red().bold(),
        }
    }

    pub fn health_badge(score: u32) -> ColoredString {
        let rating = HealthRating::from_score(score);
        match rating {
            HealthRating::Excellent => rating.label().green().bold(),
            HealthRating::Good => rating.label().yellow().bold(),
            HealthRating::NeedsAttention => rating.label().red().bold(),
        }
    }

    pub fn sentiment_marker(sentiment: Sentiment) -> ColoredString {
        match sentiment {
            Sentiment::Positive => "+ positive".green(),
            Sentiment::Negative => "- negative".red(),
            Sentiment::Neutral => "~ neutral".dimmed(),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_analysis(&self, result: &ProposalAnalysisResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("AI Proposal Analysis"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}/100 ({})\n",
            "Risk Score:".cyan().bold(),
            result.risk_score,
            Self::risk_badge(result.risk_score)
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Sentiment:".cyan().bold(),
            Self::sentiment_marker(result.sentiment)
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Predicted Outcome:".cyan().bold(),
            result.predicted_outcome
        ));

        if !result.recommendations.is_empty() {
            output.push_str(&Self::section_header("Recommendations"));
            output.push_str(&Self::bullets(&result.recommendations));
        }

        output.push_str(&Self::footer());
        output
    }

    fn format_insights(&self, result: &InsightsResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("AI Governance Insights"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}/100 ({})\n",
            "Governance Health:".cyan().bold(),
            result.health_score,
            Self::health_badge(result.health_score)
        ));

        if !result.insights.is_empty() {
            output.push_str(&Self::section_header("Key Insights"));
            output.push_str(&Self::bullets(&result.insights));
        }

        if !result.recommendations.is_empty() {
            output.push_str(&Self::section_header("Recommendations"));
            output.push_str(&Self::bullets(&result.recommendations));
        }

        output.push_str(&Self::footer());
        output
    }

    fn format_suggestions(&self, suggestions: &[String]) -> String {
        let mut output = format!("{}\n", "AI Suggestions:".cyan().bold());
        for (i, suggestion) in suggestions.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, suggestion));
        }
        output
    }

    fn format_status(&self, status: &AdvisorStatus) -> String {
        let mut output = String::new();

        let state = if status.configured {
            "configured".green().bold()
        } else {
            "not configured".yellow().bold()
        };
        output.push_str(&format!("{} {}\n", "AI service:".cyan().bold(), state));

        match status.active_provider {
            Some(provider) => output.push_str(&format!(
                "{} {}\n",
                "Active provider:".cyan().bold(),
                provider.display_name()
            )),
            None => output.push_str(&format!(
                "{}\n",
                "Run `dao-advisor config set` to add an API key. Fallback results are used until then."
                    .dimmed()
            )),
        }

        if status.configured_providers.len() > 1 {
            let names: Vec<&str> = status
                .configured_providers
                .iter()
                .map(|p| p.display_name())
                .collect();
            output.push_str(&format!(
                "{} {}\n",
                "Keys stored for:".dimmed(),
                names.join(", ")
            ));
        }

        output
    }

    fn format_credentials(&self, credentials: &CredentialSet) -> String {
        let mut output = format!("{}\n", "Stored API keys:".cyan().bold());
        for provider in ProviderId::PRIORITY {
            let value = match credentials.key(provider) {
                Some(key) => redact(key).normal(),
                None => "(not set)".dimmed(),
            };
            output.push_str(&format!("  {:<10} {}\n", provider.display_name(), value));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_domain::fallback;

    #[test]
    fn test_format_analysis_contains_badge_and_recommendations() {
        let output = ConsoleFormatter.format_analysis(&fallback::proposal_analysis());
        assert!(output.contains("Risk Score:"));
        assert!(output.contains("Medium Risk"));
        assert!(output.contains("AI analysis unavailable - using default values"));
        assert!(output.contains("Outcome uncertain - requires human analysis"));
    }

    #[test]
    fn test_format_insights_rating() {
        let result = InsightsResult {
            health_score: 85,
            insights: vec!["Turnout is rising".to_string()],
            recommendations: vec![],
        };
        let output = ConsoleFormatter.format_insights(&result);
        assert!(output.contains("Excellent"));
        assert!(output.contains("Turnout is rising"));
        assert!(!output.contains("Recommendations"));
    }

    #[test]
    fn test_format_suggestions_numbers_items() {
        let output = ConsoleFormatter.format_suggestions(&[
            "Add a budget".to_string(),
            "Add a timeline".to_string(),
        ]);
        assert!(output.contains("1. Add a budget"));
        assert!(output.contains("2. Add a timeline"));
    }

    #[test]
    fn test_format_status_unconfigured() {
        let status = AdvisorStatus::from_credentials(&CredentialSet::new());
        let output = ConsoleFormatter.format_status(&status);
        assert!(output.contains("not configured"));
        assert!(output.contains("config set"));
    }

    #[test]
    fn test_format_status_names_active_provider() {
        let credentials = CredentialSet::new()
            .with_key(ProviderId::OpenAi, "sk-test")
            .with_key(ProviderId::LazAi, "lz");
        let output = ConsoleFormatter.format_status(&AdvisorStatus::from_credentials(&credentials));
        assert!(output.contains("Active provider:"));
        assert!(output.contains(ProviderId::OpenAi.display_name()));
        assert!(output.contains(ProviderId::LazAi.display_name()));
    }

    #[test]
    fn test_format_credentials_never_shows_secret() {
        let credentials =
            CredentialSet::new().with_key(ProviderId::OpenAi, "sk-live-0123456789wxyz");
        let output = ConsoleFormatter.format_credentials(&credentials);
        assert!(!output.contains("0123456789"));
        assert!(output.contains("****wxyz"));
        assert!(output.contains("(not set)"));
    }

    #[test]
    fn test_badges_follow_thresholds() {
        assert!(ConsoleFormatter::risk_badge(29).to_string().contains("Low"));
        assert!(ConsoleFormatter::risk_badge(30).to_string().contains("Medium"));
        assert!(ConsoleFormatter::risk_badge(70).to_string().contains("High"));
        assert!(ConsoleFormatter::health_badge(60).to_string().contains("Good"));
        assert!(
            ConsoleFormatter::health_badge(59)
                .to_string()
                .contains("Needs Attention")
        );
    }
}
