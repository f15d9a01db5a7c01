use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which findings count against the score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// Every finding in the final lists, advisory filler included.
    #[default]
    TotalFindings,
    /// Only findings backed by a fired rule.
    DirectFindingsOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scoring policy '{value}' (expected total or direct)")]
pub struct UnknownScoringPolicy {
    pub value: String,
}

impl FromStr for ScoringPolicy {
    type Err = UnknownScoringPolicy;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "total" | "total_findings" => Ok(ScoringPolicy::TotalFindings),
            "direct" | "direct_findings_only" => Ok(ScoringPolicy::DirectFindingsOnly),
            _ => Err(UnknownScoringPolicy {
                value: raw.to_string(),
            }),
        }
    }
}

/// Engine settings; the engine itself keeps no other state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealityCheckConfig {
    pub scoring_policy: ScoringPolicy,
}
