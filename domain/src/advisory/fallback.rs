//! Deterministic fallback results.
//!
//! These are the only guaranteed output when no provider is configured or a
//! provider call fails, so the literals here are part of the public contract.

use super::results::{InsightsResult, ProposalAnalysisResult, Sentiment};
use super::tasks::InsightsRequest;

pub const FALLBACK_RISK_SCORE: u32 = 50;
pub const ANALYSIS_UNAVAILABLE: &str = "AI analysis unavailable - using default values";
pub const OUTCOME_UNCERTAIN: &str = "Outcome uncertain - requires human analysis";

pub const INSIGHTS_UNAVAILABLE: &str = "AI analysis service temporarily unavailable";
pub const RECOMMEND_ENGAGEMENT: &str = "Increase community engagement initiatives";
pub const RECOMMEND_SIMPLER_SUBMISSION: &str = "Simplify proposal submission process";

pub const SUGGESTIONS_FAILED: &str = "Error generating suggestions - please review manually";
pub const SUGGESTIONS_NOT_CONFIGURED: &str = "AI service unavailable - please review manually";

/// Upper bound on the number of improvement suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;

pub fn proposal_analysis() -> ProposalAnalysisResult {
    ProposalAnalysisResult {
        risk_score: FALLBACK_RISK_SCORE,
        sentiment: Sentiment::Neutral,
        recommendations: vec![ANALYSIS_UNAVAILABLE.to_string()],
        predicted_outcome: OUTCOME_UNCERTAIN.to_string(),
    }
}

/// Health score is twice the participation rate, capped to 0..=100.
pub fn health_score(participation_rate_percent: f64) -> u32 {
    let doubled = participation_rate_percent * 2.0;
    if doubled.is_nan() {
        return 0;
    }
    doubled.clamp(0.0, 100.0).round() as u32
}

pub fn insights(request: &InsightsRequest) -> InsightsResult {
    InsightsResult {
        health_score: health_score(request.participation_rate_percent),
        insights: vec![
            format!("{} proposals currently active", request.active_proposals),
            format!(
                "Participation rate: {}%",
                request.participation_rate_percent
            ),
            INSIGHTS_UNAVAILABLE.to_string(),
        ],
        recommendations: vec![
            RECOMMEND_ENGAGEMENT.to_string(),
            RECOMMEND_SIMPLER_SUBMISSION.to_string(),
        ],
    }
}

pub fn suggestions_failed() -> Vec<String> {
    vec![SUGGESTIONS_FAILED.to_string()]
}

pub fn suggestions_not_configured() -> Vec<String> {
    vec![SUGGESTIONS_NOT_CONFIGURED.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proposal_analysis_literals() {
        let result = proposal_analysis();
        assert_eq!(result.risk_score, 50);
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(
            result.recommendations,
            vec!["AI analysis unavailable - using default values"]
        );
        assert_eq!(
            result.predicted_outcome,
            "Outcome uncertain - requires human analysis"
        );
    }

    #[test]
    fn test_insights_fallback_for_reference_metrics() {
        let request = InsightsRequest::new(10, 3, 40.0).with_average_voting_power(5.0);
        let result = insights(&request);
        assert_eq!(result.health_score, 80);
        assert_eq!(
            result.insights,
            vec![
                "3 proposals currently active",
                "Participation rate: 40%",
                "AI analysis service temporarily unavailable",
            ]
        );
        assert_eq!(
            result.recommendations,
            vec![
                "Increase community engagement initiatives",
                "Simplify proposal submission process",
            ]
        );
    }

    #[test]
    fn test_health_score_caps_at_100() {
        assert_eq!(health_score(50.0), 100);
        assert_eq!(health_score(95.0), 100);
        assert_eq!(health_score(0.0), 0);
        assert_eq!(health_score(-10.0), 0);
        assert_eq!(health_score(f64::NAN), 0);
        assert_eq!(health_score(12.25), 25);
    }

    #[test]
    fn test_fractional_participation_is_rendered_verbatim() {
        let result = insights(&InsightsRequest::new(4, 1, 12.5));
        assert_eq!(result.insights[1], "Participation rate: 12.5%");
        assert_eq!(result.health_score, 25);
    }

    #[test]
    fn test_suggestion_literals_are_distinct() {
        assert_eq!(
            suggestions_failed(),
            vec!["Error generating suggestions - please review manually"]
        );
        assert_eq!(
            suggestions_not_configured(),
            vec!["AI service unavailable - please review manually"]
        );
    }
}
