//! Reply normalization.
//!
//! Turns a provider's raw reply (or the lack of one) into a typed result.
//! Pure domain logic: no I/O, no provider knowledge.
//!
//! | Function | Parsed shape | Fallback |
//! |----------|--------------|----------|
//! | [`normalize_proposal_analysis`] | `ProposalAnalysisResult` JSON | fixed neutral analysis |
//! | [`normalize_insights`] | `InsightsResult` JSON | score derived from participation |
//! | [`normalize_suggestions`] | JSON array of strings | bullet lines, then error literal |
//!
//! A `None` reply means the provider was never reached or the call failed.

use super::fallback::{self, MAX_SUGGESTIONS};
use super::results::{AdvisoryResult, InsightsResult, ProposalAnalysisResult};
use super::tasks::{GovernanceTask, InsightsRequest};
use serde::de::DeserializeOwned;

/// How a result was obtained from the reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// The reply parsed as the expected JSON shape.
    Parsed,
    /// Suggestions recovered from a plain-text bullet list.
    LineSplit,
    /// The reply was missing or unusable; fixed fallback content.
    Fallback,
}

impl ReplyOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyOutcome::Parsed => "parsed",
            ReplyOutcome::LineSplit => "line_split",
            ReplyOutcome::Fallback => "fallback",
        }
    }
}

/// A normalized value together with how it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized<T> {
    pub value: T,
    pub outcome: ReplyOutcome,
}

impl<T> Normalized<T> {
    fn parsed(value: T) -> Self {
        Self {
            value,
            outcome: ReplyOutcome::Parsed,
        }
    }

    fn fallback(value: T) -> Self {
        Self {
            value,
            outcome: ReplyOutcome::Fallback,
        }
    }

    fn map<U>(self, f: impl FnOnce(T) -> U) -> Normalized<U> {
        Normalized {
            value: f(self.value),
            outcome: self.outcome,
        }
    }
}

/// Parse a reply as JSON of type `T`.
///
/// Accepts either a reply that is entirely the JSON document, or one that
/// wraps it in a ` ```json ` (or bare ` ``` `) fenced block.
pub fn parse_json_reply<T: DeserializeOwned>(reply: &str) -> Option<T> {
    let trimmed = reply.trim();
    if let Ok(parsed) = serde_json::from_str::<T>(trimmed) {
        return Some(parsed);
    }

    let block = extract_fenced_block(trimmed)?;
    serde_json::from_str::<T>(&block).ok()
}

/// Contents of the first fenced code block, if the text has one.
fn extract_fenced_block(text: &str) -> Option<String> {
    let mut in_block = false;
    let mut current = String::new();

    for line in text.lines() {
        let marker = line.trim();
        if !in_block && marker.starts_with("```") {
            let lang = marker.trim_start_matches('`').trim();
            if lang.is_empty() || lang.eq_ignore_ascii_case("json") {
                in_block = true;
                current.clear();
            }
        } else if in_block && marker == "```" {
            return Some(current);
        } else if in_block {
            current.push_str(line);
            current.push('\n');
        }
    }

    None
}

pub fn normalize_proposal_analysis(reply: Option<&str>) -> Normalized<ProposalAnalysisResult> {
    match reply.and_then(parse_json_reply::<ProposalAnalysisResult>) {
        Some(result) => Normalized::parsed(result),
        None => Normalized::fallback(fallback::proposal_analysis()),
    }
}

pub fn normalize_insights(
    request: &InsightsRequest,
    reply: Option<&str>,
) -> Normalized<InsightsResult> {
    match reply.and_then(parse_json_reply::<InsightsResult>) {
        Some(result) => Normalized::parsed(result),
        None => Normalized::fallback(fallback::insights(request)),
    }
}

pub fn normalize_suggestions(reply: Option<&str>) -> Normalized<Vec<String>> {
    let Some(reply) = reply else {
        return Normalized::fallback(fallback::suggestions_failed());
    };

    if let Some(list) = parse_json_reply::<Vec<String>>(reply) {
        let list: Vec<String> = list.into_iter().take(MAX_SUGGESTIONS).collect();
        if !list.is_empty() {
            return Normalized::parsed(list);
        }
        return Normalized::fallback(fallback::suggestions_failed());
    }

    let lines = split_suggestion_lines(reply);
    if lines.is_empty() {
        return Normalized::fallback(fallback::suggestions_failed());
    }
    Normalized {
        value: lines,
        outcome: ReplyOutcome::LineSplit,
    }
}

/// Split a plain-text reply into at most [`MAX_SUGGESTIONS`] entries.
///
/// Each line is trimmed and loses one leading `-` or `*` bullet marker;
/// lines left empty are dropped.
pub fn split_suggestion_lines(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix(|c: char| c == '-' || c == '*')
                .unwrap_or(line)
                .trim()
        })
        .filter(|line| !line.is_empty())
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}

/// Normalize a reply for any task.
pub fn normalize(task: &GovernanceTask, reply: Option<&str>) -> Normalized<AdvisoryResult> {
    match task {
        GovernanceTask::ProposalAnalysis(_) => {
            normalize_proposal_analysis(reply).map(AdvisoryResult::ProposalAnalysis)
        }
        GovernanceTask::Insights(request) => {
            normalize_insights(request, reply).map(AdvisoryResult::Insights)
        }
        GovernanceTask::Improvement(_) => {
            normalize_suggestions(reply).map(AdvisoryResult::Suggestions)
        }
    }
}
