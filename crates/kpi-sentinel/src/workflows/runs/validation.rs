use super::domain::{RunSubmission, ValidatedSubmission};

pub const DEFAULT_MINIMUM_KPIS: usize = 3;

/// Validation errors raised by the submission guard.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RunSubmissionError {
    #[error("objective is required")]
    MissingObjective,
    #[error("at least {required} KPIs are required (found {found})")]
    TooFewKpis { required: usize, found: usize },
    #[error("KPI #{position} is missing a name")]
    UnnamedKpi { position: usize },
}

/// Guard responsible for producing `ValidatedSubmission` instances.
#[derive(Debug, Clone)]
pub struct SubmissionGuard {
    minimum_kpis: usize,
}

impl Default for SubmissionGuard {
    fn default() -> Self {
        Self::new(DEFAULT_MINIMUM_KPIS)
    }
}

impl SubmissionGuard {
    pub fn new(minimum_kpis: usize) -> Self {
        Self { minimum_kpis }
    }

    pub fn minimum_kpis(&self) -> usize {
        self.minimum_kpis
    }

    /// Reject anything the engine should not be asked to score.
    ///
    /// Blank checks look at trimmed text, but the accepted submission is passed on unchanged.
    pub fn validate(
        &self,
        submission: RunSubmission,
    ) -> Result<ValidatedSubmission, RunSubmissionError> {
        if submission.objective.trim().is_empty() {
            return Err(RunSubmissionError::MissingObjective);
        }

        if submission.kpis.len() < self.minimum_kpis {
            return Err(RunSubmissionError::TooFewKpis {
                required: self.minimum_kpis,
                found: submission.kpis.len(),
            });
        }

        if let Some(index) = submission
            .kpis
            .iter()
            .position(|kpi| kpi.name.trim().is_empty())
        {
            return Err(RunSubmissionError::UnnamedKpi {
                position: index + 1,
            });
        }

        Ok(ValidatedSubmission {
            objective: submission.objective,
            kpis: submission.kpis,
            industry: submission.industry,
        })
    }
}
