//! Objective/KPI coherence scoring.
//!
//! The pipeline is categorize, apply direct rules, pad from advisory pools, then score and
//! narrate. Every stage is a pure function of the input, so identical inputs (including
//! `run_index`) always produce identical results.

pub mod categorizer;
mod config;
pub mod domain;
pub mod narrative;
pub mod pool;
pub mod rules;

pub use categorizer::{categories_of, kpis_match_category, matches_category, Category};
pub use config::{RealityCheckConfig, ScoringPolicy, UnknownScoringPolicy};
pub use domain::{
    Confidence, Finding, KpiInput, RealityCheckInput, RiskLevel, DEFAULT_INDUSTRY,
};

use pool::{
    fill_to_size, selection_hash, CONTRADICTION_POOL, CONTRADICTION_TARGET, MISSING_SIGNAL_POOL,
    MISSING_SIGNAL_TARGET,
};
use rules::evaluate_direct_rules;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless evaluator applying the scoring policy to an input.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealityCheckEngine {
    config: RealityCheckConfig,
}

impl RealityCheckEngine {
    pub fn new(config: RealityCheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> RealityCheckConfig {
        self.config
    }

    pub fn evaluate(&self, input: &RealityCheckInput) -> RealityCheckResult {
        let hash = selection_hash(input);
        let direct = evaluate_direct_rules(&input.objective, &input.kpis);
        let direct_contradictions = direct.contradictions.len();
        let direct_missing = direct.missing_signals.len();

        let mut contradictions = direct.contradictions;
        fill_to_size(
            &mut contradictions,
            &CONTRADICTION_POOL,
            CONTRADICTION_TARGET,
            hash,
        );

        let mut missing_signals = direct.missing_signals;
        fill_to_size(
            &mut missing_signals,
            &MISSING_SIGNAL_POOL,
            MISSING_SIGNAL_TARGET,
            hash >> 4,
        );

        let score = match self.config.scoring_policy {
            ScoringPolicy::TotalFindings => {
                narrative::score(contradictions.len(), missing_signals.len())
            }
            ScoringPolicy::DirectFindingsOnly => {
                narrative::score(direct_contradictions, direct_missing)
            }
        };
        let risk_level = RiskLevel::from_score(score);
        let confidence = Confidence::from_direct_matches(direct.direct_matches);

        let executive_summary = narrative::executive_summary(
            &input.objective,
            risk_level,
            score,
            contradictions.first().map(|finding| finding.text),
            missing_signals.first().map(|finding| finding.text),
        );

        debug!(
            hash,
            direct_matches = direct.direct_matches,
            score,
            risk = risk_level.label(),
            "reality check evaluated"
        );

        RealityCheckResult {
            score,
            risk_level,
            contradictions: contradictions.iter().map(|f| f.text.to_string()).collect(),
            missing_signals: missing_signals.iter().map(|f| f.text.to_string()).collect(),
            actions_24h: narrative::choose_actions(hash)
                .iter()
                .map(|action| action.to_string())
                .collect(),
            executive_summary,
            board_summary: narrative::board_summary(hash).to_string(),
            confidence,
        }
    }
}

/// Evaluate with the default configuration.
pub fn run_reality_check(input: &RealityCheckInput) -> RealityCheckResult {
    RealityCheckEngine::default().evaluate(input)
}

/// Verdict for a single objective and KPI set.
///
/// `contradictions` holds up to three entries and `missing_signals` up to two; either can be
/// short when the advisory pools run out of unused entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealityCheckResult {
    pub score: u8,
    pub risk_level: RiskLevel,
    pub contradictions: Vec<String>,
    pub missing_signals: Vec<String>,
    #[serde(rename = "actions24h")]
    pub actions_24h: Vec<String>,
    pub executive_summary: String,
    pub board_summary: String,
    pub confidence: Confidence,
}
