use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{OwnerId, RunId};
use crate::workflows::reality_check::{Confidence, KpiInput, RealityCheckResult, RiskLevel};

/// Persisted reality check run: the validated input plus the engine verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub id: RunId,
    pub owner: OwnerId,
    pub run_index: u32,
    pub created_at: DateTime<Utc>,
    pub objective: String,
    pub kpis: Vec<KpiInput>,
    pub industry: String,
    pub result: RealityCheckResult,
}

impl RunRecord {
    pub fn warnings(&self) -> RunWarnings {
        RunWarnings {
            contradictions: self.result.contradictions.clone(),
            missing_signals: self.result.missing_signals.clone(),
        }
    }

    pub fn evidence(&self) -> RunEvidence {
        RunEvidence {
            objective: self.objective.clone(),
            kpis: self.kpis.clone(),
            industry: self.industry.clone(),
            actions_24h: self.result.actions_24h.clone(),
            executive_summary: self.result.executive_summary.clone(),
            confidence: self.result.confidence,
        }
    }

    pub fn view(&self) -> RunView {
        RunView {
            id: self.id.clone(),
            owner: self.owner.clone(),
            run_index: self.run_index,
            created_at: self.created_at,
            score: self.result.score,
            risk_level: self.result.risk_level,
            board_summary: self.result.board_summary.clone(),
            warnings: self.warnings(),
            evidence: self.evidence(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait RunRepository: Send + Sync {
    fn insert(&self, record: RunRecord) -> Result<RunRecord, RepositoryError>;
    fn count_for_owner(&self, owner: &OwnerId) -> Result<usize, RepositoryError>;
    /// Most recent runs first, at most `limit` of them.
    fn recent_for_owner(
        &self,
        owner: &OwnerId,
        limit: usize,
    ) -> Result<Vec<RunRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Findings block of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunWarnings {
    pub contradictions: Vec<String>,
    pub missing_signals: Vec<String>,
}

/// Inputs and narrative of a run, kept for later read-only rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunEvidence {
    pub objective: String,
    pub kpis: Vec<KpiInput>,
    pub industry: String,
    #[serde(rename = "actions24h")]
    pub actions_24h: Vec<String>,
    pub executive_summary: String,
    pub confidence: Confidence,
}

/// Representation of a run exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunView {
    pub id: RunId,
    pub owner: OwnerId,
    pub run_index: u32,
    pub created_at: DateTime<Utc>,
    pub score: u8,
    pub risk_level: RiskLevel,
    pub board_summary: String,
    pub warnings: RunWarnings,
    pub evidence: RunEvidence,
}
