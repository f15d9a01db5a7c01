use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::{OwnerId, RunSubmission};
use super::repository::{RepositoryError, RunRepository, RunView};
use super::service::{RealityCheckService, RunServiceError};

/// Router builder exposing the stateless check plus per-owner run history.
pub fn run_router<R>(service: Arc<RealityCheckService<R>>) -> Router
where
    R: RunRepository + 'static,
{
    Router::new()
        .route("/api/v1/reality-check", post(evaluate_handler::<R>))
        .route(
            "/api/v1/owners/:owner_id/runs",
            post(submit_handler::<R>).get(history_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn evaluate_handler<R>(
    State(service): State<Arc<RealityCheckService<R>>>,
    axum::Json(submission): axum::Json<RunSubmission>,
) -> Response
where
    R: RunRepository + 'static,
{
    match service.evaluate(submission) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<RealityCheckService<R>>>,
    Path(owner_id): Path<String>,
    axum::Json(submission): axum::Json<RunSubmission>,
) -> Response
where
    R: RunRepository + 'static,
{
    let owner = OwnerId(owner_id);
    match service.submit(&owner, submission) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn history_handler<R>(
    State(service): State<Arc<RealityCheckService<R>>>,
    Path(owner_id): Path<String>,
) -> Response
where
    R: RunRepository + 'static,
{
    let owner = OwnerId(owner_id);
    match service.history(&owner) {
        Ok(records) => {
            let runs: Vec<RunView> = records.iter().map(|record| record.view()).collect();
            (StatusCode::OK, axum::Json(json!({ "runs": runs }))).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: RunServiceError) -> Response {
    let status = match &error {
        RunServiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        RunServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        RunServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        RunServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
