use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{OwnerId, RunId, RunSubmission, ValidatedSubmission};
use super::repository::{RepositoryError, RunRecord, RunRepository};
use super::validation::{RunSubmissionError, SubmissionGuard};
use crate::config::EngineConfig;
use crate::workflows::reality_check::{RealityCheckEngine, RealityCheckResult};

/// Service composing the submission guard, repository, and reality check engine.
pub struct RealityCheckService<R> {
    guard: SubmissionGuard,
    repository: Arc<R>,
    engine: RealityCheckEngine,
    history_limit: usize,
    sequence: AtomicU64,
}

impl<R> RealityCheckService<R>
where
    R: RunRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: EngineConfig) -> Self {
        Self::with_guard(SubmissionGuard::default(), repository, config)
    }

    pub fn with_guard(guard: SubmissionGuard, repository: Arc<R>, config: EngineConfig) -> Self {
        Self {
            guard,
            repository,
            engine: RealityCheckEngine::new(config.reality_check()),
            history_limit: config.history_limit.max(1),
            sequence: AtomicU64::new(1),
        }
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Validate and score a submission without recording it.
    pub fn evaluate(
        &self,
        submission: RunSubmission,
    ) -> Result<RealityCheckResult, RunServiceError> {
        let validated = self.validate(submission)?;
        Ok(self.engine.evaluate(&validated.to_input(0)))
    }

    /// Score a submission for `owner` and persist it as the owner's next run.
    ///
    /// The run index is the number of runs the owner already has, so resubmitting the same
    /// objective and KPIs can surface different advisory findings.
    pub fn submit(
        &self,
        owner: &OwnerId,
        submission: RunSubmission,
    ) -> Result<RunRecord, RunServiceError> {
        let validated = self.validate(submission)?;
        let prior_runs = self.repository.count_for_owner(owner)?;
        let run_index = u32::try_from(prior_runs).unwrap_or(u32::MAX);

        let result = self.engine.evaluate(&validated.to_input(run_index));
        let industry = validated.industry_label();
        let record = RunRecord {
            id: self.next_run_id(),
            owner: owner.clone(),
            run_index,
            created_at: Utc::now(),
            objective: validated.objective,
            kpis: validated.kpis,
            industry,
            result,
        };

        let stored = self.repository.insert(record)?;
        info!(
            owner = %stored.owner.0,
            run = %stored.id.0,
            run_index,
            score = stored.result.score,
            risk = stored.result.risk_level.label(),
            "reality check run recorded"
        );
        Ok(stored)
    }

    /// Most recent runs for `owner`, newest first, capped at the history limit.
    pub fn history(&self, owner: &OwnerId) -> Result<Vec<RunRecord>, RunServiceError> {
        let runs = self
            .repository
            .recent_for_owner(owner, self.history_limit)?;
        Ok(runs)
    }

    fn validate(&self, submission: RunSubmission) -> Result<ValidatedSubmission, RunServiceError> {
        self.guard.validate(submission).map_err(|err| {
            warn!(error = %err, "reality check submission rejected");
            RunServiceError::from(err)
        })
    }

    fn next_run_id(&self) -> RunId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        RunId(format!("run-{id:06}"))
    }
}

/// Error raised by the reality check service.
#[derive(Debug, thiserror::Error)]
pub enum RunServiceError {
    #[error(transparent)]
    Validation(#[from] RunSubmissionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
