//! Advisory result schemas.
//!
//! Field names follow the JSON shape the prompts ask providers to reply in,
//! so a well-formed reply deserializes straight into these types.

use serde::{Deserialize, Serialize};

/// Community sentiment toward a proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalAnalysisResult {
    pub risk_score: u32,
    pub sentiment: Sentiment,
    pub recommendations: Vec<String>,
    pub predicted_outcome: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsResult {
    pub health_score: u32,
    pub insights: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Result matching the [`GovernanceTask`](super::GovernanceTask) that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "result", rename_all = "snake_case")]
pub enum AdvisoryResult {
    ProposalAnalysis(ProposalAnalysisResult),
    Insights(InsightsResult),
    Suggestions(Vec<String>),
}
