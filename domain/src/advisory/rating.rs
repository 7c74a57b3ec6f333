//! Score classification used when rendering results.

/// Risk badge for a proposal risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Below 30 is low, below 70 medium, anything else high.
    pub fn from_score(score: u32) -> Self {
        if score < 30 {
            RiskLevel::Low
        } else if score < 70 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

/// Rating for a governance health score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthRating {
    Excellent,
    Good,
    NeedsAttention,
}

impl HealthRating {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            HealthRating::Excellent
        } else if score >= 60 {
            HealthRating::Good
        } else {
            HealthRating::NeedsAttention
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthRating::Excellent => "Excellent",
            HealthRating::Good => "Good",
            HealthRating::NeedsAttention => "Needs Attention",
        }
    }
}
