//! Prompt templates for governance advisory tasks

use crate::advisory::tasks::{ImprovementRequest, InsightsRequest, ProposalAnalysisRequest};

/// Templates for the governance-advisor instruction and each task prompt
pub struct GovernancePromptTemplate;

impl GovernancePromptTemplate {
    /// Instruction placed ahead of every task prompt
    pub fn system() -> &'static str {
        r#"You are an AI advisor for DAO governance and decision-making. Your role is to:

1. Analyze proposals for potential risks, benefits, and community impact
2. Provide sentiment analysis on community discussions
3. Suggest optimal voting strategies based on historical data
4. Identify patterns in governance participation
5. Recommend improvements to proposal quality
6. Monitor governance health metrics

Always provide data-driven insights and remain neutral in your analysis.
Focus on the technical, financial, and community aspects of governance decisions."#
    }

    /// Prompt asking for a `ProposalAnalysisResult`-shaped JSON reply
    pub fn proposal_analysis(request: &ProposalAnalysisRequest) -> String {
        format!(
            r#"Analyze this DAO proposal:

Title: {}
Description: {}
Current Votes: {} for, {} against, {} abstain

Provide analysis in JSON format:
{{
  "riskScore": number (0-100),
  "sentiment": "positive|negative|neutral",
  "recommendations": ["recommendation1", "recommendation2"],
  "predictedOutcome": "likely outcome description"
}}

Reply with the JSON object only."#,
            request.title,
            request.description,
            request.votes_for,
            request.votes_against,
            request.votes_abstain
        )
    }

    /// Prompt asking for an `InsightsResult`-shaped JSON reply
    pub fn insights(request: &InsightsRequest) -> String {
        format!(
            r#"Analyze this DAO governance data:

Total Proposals: {}
Active Proposals: {}
Participation Rate: {}%
Average Voting Power: {}

Provide governance health analysis in JSON format:
{{
  "healthScore": number (0-100),
  "insights": ["insight1", "insight2", "insight3"],
  "recommendations": ["recommendation1", "recommendation2"]
}}

Reply with the JSON object only."#,
            request.total_proposals,
            request.active_proposals,
            request.participation_rate_percent,
            request.average_voting_power
        )
    }

    /// Prompt asking for 3-5 improvement suggestions
    pub fn improvement(request: &ImprovementRequest) -> String {
        format!(
            r#"Review this DAO proposal draft and suggest improvements:

"{}"

Provide 3-5 specific suggestions to improve clarity, feasibility, and community appeal.
Return as a simple array of strings."#,
            request.draft_text
        )
    }
}
