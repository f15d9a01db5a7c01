//! Run intake, validation, and history around the reality check engine.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{OwnerId, RunId, RunSubmission, ValidatedSubmission};
pub use repository::{
    RepositoryError, RunEvidence, RunRecord, RunRepository, RunView, RunWarnings,
};
pub use router::run_router;
pub use service::{RealityCheckService, RunServiceError};
pub use validation::{RunSubmissionError, SubmissionGuard, DEFAULT_MINIMUM_KPIS};
