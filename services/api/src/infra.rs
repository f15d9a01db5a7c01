use kpi_sentinel::workflows::reality_check::KpiInput;
use kpi_sentinel::workflows::runs::{OwnerId, RepositoryError, RunRecord, RunRepository};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Run history kept in process memory, grouped by owner in insertion order.
#[derive(Default, Clone)]
pub(crate) struct InMemoryRunRepository {
    runs: Arc<Mutex<HashMap<OwnerId, Vec<RunRecord>>>>,
}

impl InMemoryRunRepository {
    fn lock(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<OwnerId, Vec<RunRecord>>>, RepositoryError> {
        self.runs
            .lock()
            .map_err(|_| RepositoryError::Unavailable("run store lock poisoned".to_string()))
    }
}

impl RunRepository for InMemoryRunRepository {
    fn insert(&self, record: RunRecord) -> Result<RunRecord, RepositoryError> {
        let mut guard = self.lock()?;
        let runs = guard.entry(record.owner.clone()).or_default();
        if runs.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        runs.push(record.clone());
        Ok(record)
    }

    fn count_for_owner(&self, owner: &OwnerId) -> Result<usize, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(owner).map_or(0, Vec::len))
    }

    fn recent_for_owner(
        &self,
        owner: &OwnerId,
        limit: usize,
    ) -> Result<Vec<RunRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard
            .get(owner)
            .map(|runs| runs.iter().rev().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}

/// Parse `NAME` or `NAME:DESCRIPTION` into a KPI.
pub(crate) fn parse_kpi(raw: &str) -> Result<KpiInput, String> {
    let (name, description) = match raw.split_once(':') {
        Some((name, description)) => (name.trim(), description.trim()),
        None => (raw.trim(), ""),
    };

    if name.is_empty() {
        return Err(format!("KPI '{raw}' is missing a name"));
    }

    Ok(KpiInput::with_description(name, description))
}
