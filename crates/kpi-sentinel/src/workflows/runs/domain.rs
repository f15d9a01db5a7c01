use serde::{Deserialize, Serialize};

use crate::workflows::reality_check::{KpiInput, RealityCheckInput, DEFAULT_INDUSTRY};

/// Identifier for whoever owns a run history (a user, team, or workspace).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OwnerId(pub String);

/// Identifier wrapper for persisted runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RunId(pub String);

/// Raw request body for a reality check run, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSubmission {
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub kpis: Vec<KpiInput>,
    #[serde(default)]
    pub industry: Option<String>,
}

/// Submission that passed the guard.
///
/// Text is kept exactly as submitted so the engine hashes the same input a direct call would.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedSubmission {
    pub objective: String,
    pub kpis: Vec<KpiInput>,
    pub industry: Option<String>,
}

impl ValidatedSubmission {
    /// Engine input for the given run number.
    pub fn to_input(&self, run_index: u32) -> RealityCheckInput {
        RealityCheckInput {
            objective: self.objective.clone(),
            kpis: self.kpis.clone(),
            industry: self.industry.clone(),
            run_index,
        }
    }

    /// Trimmed industry, or `Other` when absent or blank.
    pub fn industry_label(&self) -> String {
        self.industry
            .as_deref()
            .map(str::trim)
            .filter(|industry| !industry.is_empty())
            .unwrap_or(DEFAULT_INDUSTRY)
            .to_string()
    }
}
