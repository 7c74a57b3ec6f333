//! Governance advisor use case.
//!
//! The single entry point callers use for AI-assisted governance advice.
//! Every advisory operation:
//!
//! 1. Snapshots the credential set and selects the active provider
//! 2. Builds the provider request for the task
//! 3. Sends it through the [`LlmGateway`] (one attempt)
//! 4. Normalizes the reply, falling back to fixed content on any failure
//!
//! No advisory operation returns an error. Only the credential mutations
//! (`update_config`, `clear_config`) report store failures.

use crate::ports::advisory_logger::{AdvisoryEvent, AdvisoryLogger, NoAdvisoryLogger};
use crate::ports::credential_store::{CredentialStore, CredentialStoreError};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use advisor_domain::util::truncate_str;
use advisor_domain::{
    AdvisoryResult, CredentialSet, GovernanceTask, ImprovementRequest, InsightsRequest,
    InsightsResult, Normalized, ProposalAnalysisRequest, ProposalAnalysisResult, ProviderId,
    ProviderRequest, ReplyOutcome, fallback, normalize_insights, normalize_proposal_analysis,
    normalize_suggestions,
};
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};

/// What happened when the advisor tried to reach a provider.
enum Consultation {
    NotConfigured,
    Failed {
        provider: ProviderId,
        error: GatewayError,
    },
    Replied {
        provider: ProviderId,
        text: String,
    },
}

impl Consultation {
    fn reply(&self) -> Option<&str> {
        match self {
            Consultation::Replied { text, .. } => Some(text),
            _ => None,
        }
    }

    fn provider(&self) -> Option<ProviderId> {
        match self {
            Consultation::NotConfigured => None,
            Consultation::Failed { provider, .. } | Consultation::Replied { provider, .. } => {
                Some(*provider)
            }
        }
    }
}

/// Advisory facade over the credential store and the LLM gateway.
pub struct GovernanceAdvisor {
    store: Arc<dyn CredentialStore>,
    gateway: Arc<dyn LlmGateway>,
    advisory_logger: Arc<dyn AdvisoryLogger>,
    credentials: RwLock<CredentialSet>,
}

impl GovernanceAdvisor {
    /// Create an advisor, loading credentials from `store`.
    ///
    /// An unreadable store is logged and treated as empty.
    pub fn new(store: Arc<dyn CredentialStore>, gateway: Arc<dyn LlmGateway>) -> Self {
        let credentials = match store.load() {
            Ok(credentials) => credentials,
            Err(e) => {
                warn!("Could not load stored credentials, starting unconfigured: {}", e);
                CredentialSet::default()
            }
        };
        Self::with_credentials(store, gateway, credentials)
    }

    /// Create an advisor with an explicit initial credential set.
    ///
    /// The set is held in memory only until the next `update_config`.
    pub fn with_credentials(
        store: Arc<dyn CredentialStore>,
        gateway: Arc<dyn LlmGateway>,
        credentials: CredentialSet,
    ) -> Self {
        Self {
            store,
            gateway,
            advisory_logger: Arc::new(NoAdvisoryLogger),
            credentials: RwLock::new(credentials),
        }
    }

    /// Attach an advisory event logger.
    pub fn with_advisory_logger(mut self, logger: Arc<dyn AdvisoryLogger>) -> Self {
        self.advisory_logger = logger;
        self
    }

    fn snapshot(&self) -> CredentialSet {
        match self.credentials.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Copy of the current credential set.
    pub fn credentials(&self) -> CredentialSet {
        self.snapshot()
    }

    /// True iff at least one credential is non-empty.
    pub fn is_configured(&self) -> bool {
        self.snapshot().is_configured()
    }

    /// The provider the next call would use.
    pub fn active_provider(&self) -> Option<ProviderId> {
        self.snapshot().select().map(|h| h.provider())
    }

    /// Merge `update` into the current credentials and persist the result.
    ///
    /// The in-memory set is updated even if persisting fails.
    pub fn update_config(&self, update: CredentialSet) -> Result<(), CredentialStoreError> {
        let merged = {
            let mut guard = match self.credentials.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            guard.merge(update);
            guard.clone()
        };
        info!(
            providers = ?merged.configured_providers(),
            "Advisor credentials updated"
        );
        self.store.save(&merged)
    }

    /// Drop every credential and remove the persisted record.
    pub fn clear_config(&self) -> Result<(), CredentialStoreError> {
        {
            let mut guard = match self.credentials.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            *guard = CredentialSet::default();
        }
        info!("Advisor credentials cleared");
        self.store.clear()
    }

    /// Analyze a proposal's risk, sentiment and likely outcome.
    pub async fn analyze_proposal(
        &self,
        request: &ProposalAnalysisRequest,
    ) -> ProposalAnalysisResult {
        let task = GovernanceTask::ProposalAnalysis(request.clone());
        let consultation = self.consult(&task).await;
        let normalized = normalize_proposal_analysis(consultation.reply());
        self.record(&task, &consultation, &normalized);
        normalized.value
    }

    /// Score governance health from aggregate metrics.
    pub async fn generate_insights(&self, request: &InsightsRequest) -> InsightsResult {
        let task = GovernanceTask::Insights(request.clone());
        let consultation = self.consult(&task).await;
        let normalized = normalize_insights(request, consultation.reply());
        self.record(&task, &consultation, &normalized);
        normalized.value
    }

    /// Suggest up to five improvements to a proposal draft.
    pub async fn suggest_improvements(&self, request: &ImprovementRequest) -> Vec<String> {
        let task = GovernanceTask::Improvement(request.clone());
        let consultation = self.consult(&task).await;
        let normalized = match &consultation {
            Consultation::NotConfigured => Normalized {
                value: fallback::suggestions_not_configured(),
                outcome: ReplyOutcome::Fallback,
            },
            _ => normalize_suggestions(consultation.reply()),
        };
        self.record(&task, &consultation, &normalized);
        normalized.value
    }

    /// Run any task and return the matching result variant.
    pub async fn advise(&self, task: &GovernanceTask) -> AdvisoryResult {
        match task {
            GovernanceTask::ProposalAnalysis(req) => {
                AdvisoryResult::ProposalAnalysis(self.analyze_proposal(req).await)
            }
            GovernanceTask::Insights(req) => {
                AdvisoryResult::Insights(self.generate_insights(req).await)
            }
            GovernanceTask::Improvement(req) => {
                AdvisoryResult::Suggestions(self.suggest_improvements(req).await)
            }
        }
    }

    async fn consult(&self, task: &GovernanceTask) -> Consultation {
        let Some(handle) = self.snapshot().select() else {
            debug!(task = %task.kind(), "No provider configured, using fallback");
            return Consultation::NotConfigured;
        };

        let provider = handle.provider();
        let request = ProviderRequest::build(provider, task);
        debug!(
            task = %task.kind(),
            provider = %provider,
            model = %request.model,
            "Sending advisory request"
        );

        match self.gateway.send(&handle, &request).await {
            Ok(text) => {
                debug!(
                    provider = %provider,
                    bytes = text.len(),
                    "Reply: {}",
                    truncate_str(&text, 200)
                );
                Consultation::Replied { provider, text }
            }
            Err(error) => {
                warn!(task = %task.kind(), provider = %provider, "Advisory call failed: {}", error);
                Consultation::Failed { provider, error }
            }
        }
    }

    fn record<T>(
        &self,
        task: &GovernanceTask,
        consultation: &Consultation,
        normalized: &Normalized<T>,
    ) {
        let reason = match (consultation, normalized.outcome) {
            (Consultation::NotConfigured, _) => Some("not_configured".to_string()),
            (Consultation::Failed { error, .. }, _) => Some(error.to_string()),
            (Consultation::Replied { .. }, ReplyOutcome::Fallback) => {
                debug!(task = %task.kind(), "Reply did not match the expected shape");
                Some("malformed_reply".to_string())
            }
            (Consultation::Replied { .. }, _) => None,
        };

        self.advisory_logger.log(AdvisoryEvent::new(
            "advisory_completed",
            serde_json::json!({
                "task": task.kind().as_str(),
                "provider": consultation.provider().map(|p| p.as_str()),
                "outcome": normalized.outcome.as_str(),
                "reason": reason,
            }),
        ));
    }
}
