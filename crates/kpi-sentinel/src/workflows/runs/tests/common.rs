use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::config::EngineConfig;
use crate::workflows::reality_check::{KpiInput, ScoringPolicy};
use crate::workflows::runs::domain::{OwnerId, RunSubmission};
use crate::workflows::runs::repository::{RepositoryError, RunRecord, RunRepository};
use crate::workflows::runs::{run_router, RealityCheckService};

pub(super) fn engine_config() -> EngineConfig {
    EngineConfig {
        scoring_policy: ScoringPolicy::TotalFindings,
        history_limit: 2,
    }
}

pub(super) fn owner() -> OwnerId {
    OwnerId("finance-team".to_string())
}

pub(super) fn submission() -> RunSubmission {
    RunSubmission {
        objective: "Improve profitability without slowing growth.".to_string(),
        kpis: vec![
            KpiInput::new("Monthly Revenue Growth"),
            KpiInput::new("CAC Payback Period"),
            KpiInput::new("Logo Churn Rate"),
        ],
        industry: Some("SaaS".to_string()),
    }
}

pub(super) fn no_industry_submission() -> RunSubmission {
    RunSubmission {
        objective: "Ship it".to_string(),
        kpis: vec![KpiInput::new("A"), KpiInput::new("B"), KpiInput::new("C")],
        industry: None,
    }
}

pub(super) fn blank_objective_submission() -> RunSubmission {
    let mut submission = submission();
    submission.objective = "   ".to_string();
    submission
}

pub(super) fn build_service() -> (RealityCheckService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = RealityCheckService::new(repository.clone(), engine_config());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<OwnerId, Vec<RunRecord>>>>,
}

impl RunRepository for MemoryRepository {
    fn insert(&self, record: RunRecord) -> Result<RunRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let runs = guard.entry(record.owner.clone()).or_default();
        if runs.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        runs.push(record.clone());
        Ok(record)
    }

    fn count_for_owner(&self, owner: &OwnerId) -> Result<usize, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(owner).map_or(0, Vec::len))
    }

    fn recent_for_owner(
        &self,
        owner: &OwnerId,
        limit: usize,
    ) -> Result<Vec<RunRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .get(owner)
            .map(|runs| runs.iter().rev().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}

pub(super) struct ConflictRepository;

impl RunRepository for ConflictRepository {
    fn insert(&self, _record: RunRecord) -> Result<RunRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn count_for_owner(&self, _owner: &OwnerId) -> Result<usize, RepositoryError> {
        Ok(0)
    }

    fn recent_for_owner(
        &self,
        _owner: &OwnerId,
        _limit: usize,
    ) -> Result<Vec<RunRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl RunRepository for UnavailableRepository {
    fn insert(&self, _record: RunRecord) -> Result<RunRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn count_for_owner(&self, _owner: &OwnerId) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent_for_owner(
        &self,
        _owner: &OwnerId,
        _limit: usize,
    ) -> Result<Vec<RunRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn run_router_with_service(
    service: RealityCheckService<MemoryRepository>,
) -> axum::Router {
    run_router(Arc::new(service))
}
