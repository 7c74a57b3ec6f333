//! CLI command definitions

use advisor_domain::{
    CredentialSet, ImprovementRequest, InsightsRequest, ProposalAnalysisRequest, ProviderId,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for advisory results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable console output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Proposal category, as offered by the proposal form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ProposalKind {
    Funding,
    Governance,
    Technical,
    #[default]
    Community,
}

impl ProposalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalKind::Funding => "funding",
            ProposalKind::Governance => "governance",
            ProposalKind::Technical => "technical",
            ProposalKind::Community => "community",
        }
    }
}

/// CLI arguments for dao-advisor
#[derive(Parser, Debug)]
#[command(name = "dao-advisor")]
#[command(author, version, about = "AI-assisted DAO governance advisor")]
#[command(long_about = r#"
dao-advisor asks one configured AI provider (OpenAI, Anthropic or LazAI) to
analyze DAO proposals, assess governance health, and suggest improvements to
proposal drafts. When no provider is configured or a call fails, fixed
fallback results are shown instead.

Configuration files are loaded from (in priority order):
1. --config <path>         Explicit config file
2. ./dao-advisor.toml      Project-level config
3. ~/.config/dao-advisor/config.toml   Global config

Example:
  dao-advisor config set --anthropic sk-ant-...
  dao-advisor analyze --title "Fund audits" --description "..." --for 120 --against 30
  dao-advisor insights --total 42 --active 3 --participation 37.5
  dao-advisor suggest "Title: Grants round\nDescription: ..."
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Also write diagnostic logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show whether a provider is configured and which one is active
    Status,

    /// Manage provider credentials and configuration files
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Analyze a proposal for risk, sentiment and likely outcome
    Analyze(AnalyzeArgs),

    /// Assess governance health from participation statistics
    Insights(InsightsArgs),

    /// Suggest improvements to a proposal draft
    Suggest(SuggestArgs),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Store one or more API keys (other keys are left untouched)
    Set(ConfigSetArgs),
    /// Remove every stored API key
    Clear,
    /// Show which keys are stored (values redacted)
    Show,
    /// Show the configuration file locations
    Sources,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = true)]
pub struct ConfigSetArgs {
    /// OpenAI API key
    #[arg(long, value_name = "KEY")]
    pub openai: Option<String>,

    /// Anthropic API key
    #[arg(long, value_name = "KEY")]
    pub anthropic: Option<String>,

    /// LazAI API key
    #[arg(long, value_name = "KEY")]
    pub lazai: Option<String>,
}

impl ConfigSetArgs {
    /// Partial credential update containing only the keys given.
    pub fn to_credentials(&self) -> CredentialSet {
        let keys = [
            (ProviderId::OpenAi, &self.openai),
            (ProviderId::Anthropic, &self.anthropic),
            (ProviderId::LazAi, &self.lazai),
        ];
        keys.into_iter()
            .fold(CredentialSet::new(), |set, (provider, key)| match key {
                Some(key) => set.with_key(provider, key.clone()),
                None => set,
            })
    }
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Proposal title
    #[arg(long)]
    pub title: String,

    /// Proposal description
    #[arg(long)]
    pub description: String,

    /// Votes in favor
    #[arg(long = "for", value_name = "N", default_value_t = 0)]
    pub votes_for: u64,

    /// Votes against
    #[arg(long = "against", value_name = "N", default_value_t = 0)]
    pub votes_against: u64,

    /// Abstentions
    #[arg(long = "abstain", value_name = "N", default_value_t = 0)]
    pub votes_abstain: u64,
}

impl AnalyzeArgs {
    pub fn to_request(&self) -> ProposalAnalysisRequest {
        ProposalAnalysisRequest::new(self.title.clone(), self.description.clone()).with_votes(
            self.votes_for,
            self.votes_against,
            self.votes_abstain,
        )
    }
}

#[derive(Args, Debug)]
pub struct InsightsArgs {
    /// Total number of proposals
    #[arg(long, value_name = "N")]
    pub total: u64,

    /// Proposals currently open for voting
    #[arg(long, value_name = "N")]
    pub active: u64,

    /// Participation rate in percent
    #[arg(long, value_name = "PERCENT")]
    pub participation: f64,

    /// Average voting power per member
    #[arg(long, value_name = "V", default_value_t = 0.0)]
    pub voting_power: f64,
}

impl InsightsArgs {
    pub fn to_request(&self) -> InsightsRequest {
        InsightsRequest::new(self.total, self.active, self.participation)
            .with_average_voting_power(self.voting_power)
    }
}

#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Free-form proposal draft
    #[arg(required_unless_present = "title", conflicts_with = "title")]
    pub draft: Option<String>,

    /// Proposal title (builds the draft from title, description and kind)
    #[arg(long, requires = "description")]
    pub title: Option<String>,

    /// Proposal description
    #[arg(long, requires = "title")]
    pub description: Option<String>,

    /// Proposal category
    #[arg(long, value_enum, default_value = "community")]
    pub kind: ProposalKind,
}

impl SuggestArgs {
    pub fn to_request(&self) -> ImprovementRequest {
        match (&self.draft, &self.title) {
            (Some(draft), _) => ImprovementRequest::new(draft.clone()),
            (None, Some(title)) => ImprovementRequest::from_proposal(
                title,
                self.description.as_deref().unwrap_or_default(),
                self.kind.as_str(),
            ),
            (None, None) => ImprovementRequest::new(String::new()),
        }
    }
}
