//! Governance task inputs.

use crate::core::error::DomainError;

/// Kind of governance task, used for logging and dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    ProposalAnalysis,
    Insights,
    Improvement,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::ProposalAnalysis => "proposal_analysis",
            TaskKind::Insights => "insights",
            TaskKind::Improvement => "improvement",
        }
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A proposal and its current vote tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalAnalysisRequest {
    pub title: String,
    pub description: String,
    pub votes_for: u64,
    pub votes_against: u64,
    pub votes_abstain: u64,
}

impl ProposalAnalysisRequest {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            votes_for: 0,
            votes_against: 0,
            votes_abstain: 0,
        }
    }

    pub fn with_votes(mut self, votes_for: u64, votes_against: u64, votes_abstain: u64) -> Self {
        self.votes_for = votes_for;
        self.votes_against = votes_against;
        self.votes_abstain = votes_abstain;
        self
    }

    pub fn total_votes(&self) -> u64 {
        self.votes_for + self.votes_against + self.votes_abstain
    }
}

/// Aggregate governance metrics for a DAO.
#[derive(Debug, Clone, PartialEq)]
pub struct InsightsRequest {
    pub total_proposals: u64,
    pub active_proposals: u64,
    pub participation_rate_percent: f64,
    pub average_voting_power: f64,
}

impl InsightsRequest {
    pub fn new(total_proposals: u64, active_proposals: u64, participation_rate_percent: f64) -> Self {
        Self {
            total_proposals,
            active_proposals,
            participation_rate_percent,
            average_voting_power: 0.0,
        }
    }

    pub fn with_average_voting_power(mut self, average_voting_power: f64) -> Self {
        self.average_voting_power = average_voting_power;
        self
    }

    /// Reject metrics that cannot describe a real DAO.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.active_proposals > self.total_proposals {
            return Err(DomainError::InvalidTask(format!(
                "active proposals ({}) exceed total proposals ({})",
                self.active_proposals, self.total_proposals
            )));
        }
        if !self.participation_rate_percent.is_finite() || self.participation_rate_percent < 0.0 {
            return Err(DomainError::InvalidTask(format!(
                "participation rate must be a non-negative number, got {}",
                self.participation_rate_percent
            )));
        }
        if !self.average_voting_power.is_finite() {
            return Err(DomainError::InvalidTask(
                "average voting power must be a finite number".to_string(),
            ));
        }
        Ok(())
    }
}

/// A free-form proposal draft to be reviewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImprovementRequest {
    pub draft_text: String,
}

impl ImprovementRequest {
    pub fn new(draft_text: impl Into<String>) -> Self {
        Self {
            draft_text: draft_text.into(),
        }
    }

    /// Build the draft the way the proposal form submits it.
    pub fn from_proposal(title: &str, description: &str, kind: &str) -> Self {
        Self::new(format!(
            "Title: {}\nDescription: {}\nType: {}",
            title, description, kind
        ))
    }
}

/// One unit of advisory work.
#[derive(Debug, Clone, PartialEq)]
pub enum GovernanceTask {
    ProposalAnalysis(ProposalAnalysisRequest),
    Insights(InsightsRequest),
    Improvement(ImprovementRequest),
}

impl GovernanceTask {
    pub fn kind(&self) -> TaskKind {
        match self {
            GovernanceTask::ProposalAnalysis(_) => TaskKind::ProposalAnalysis,
            GovernanceTask::Insights(_) => TaskKind::Insights,
            GovernanceTask::Improvement(_) => TaskKind::Improvement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proposal_total_votes() {
        let req = ProposalAnalysisRequest::new("Fund", "Treasury grant").with_votes(10, 4, 1);
        assert_eq!(req.total_votes(), 15);
    }

    #[test]
    fn test_insights_validate() {
        assert!(InsightsRequest::new(10, 3, 40.0).validate().is_ok());
        assert!(matches!(
            InsightsRequest::new(2, 3, 40.0).validate(),
            Err(DomainError::InvalidTask(_))
        ));
        assert!(InsightsRequest::new(10, 3, -1.0).validate().is_err());
        assert!(InsightsRequest::new(10, 3, f64::NAN).validate().is_err());
        assert!(
            InsightsRequest::new(10, 3, 40.0)
                .with_average_voting_power(f64::INFINITY)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_improvement_from_proposal() {
        let req = ImprovementRequest::from_proposal("Grant", "Fund the docs", "treasury");
        assert_eq!(
            req.draft_text,
            "Title: Grant\nDescription: Fund the docs\nType: treasury"
        );
    }

    #[test]
    fn test_task_kind() {
        let task = GovernanceTask::Improvement(ImprovementRequest::new("draft"));
        assert_eq!(task.kind(), TaskKind::Improvement);
        assert_eq!(task.kind().to_string(), "improvement");
    }
}
