use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{ProspectId, ProspectSubmission};
use super::repository::{OutreachQueue, ProspectRepository, RepositoryError};
use super::service::{ProspectFilter, ProspectService, ProspectServiceError};

/// Router builder exposing the prospect intake, import, and scoring surface.
pub fn prospect_router<R, Q>(service: Arc<ProspectService<R, Q>>) -> Router
where
    R: ProspectRepository + 'static,
    Q: OutreachQueue + 'static,
{
    Router::new()
        .route(
            "/api/v1/prospects",
            post(add_handler::<R, Q>).get(list_handler::<R, Q>),
        )
        .route(
            "/api/v1/prospects/:prospect_id",
            get(status_handler::<R, Q>),
        )
        .route("/api/v1/prospects/import", post(import_handler::<R, Q>))
        .route(
            "/api/v1/prospects/recalculate",
            post(recalculate_handler::<R, Q>),
        )
        .with_state(service)
}

pub(crate) async fn add_handler<R, Q>(
    State(service): State<Arc<ProspectService<R, Q>>>,
    axum::Json(submission): axum::Json<ProspectSubmission>,
) -> Response
where
    R: ProspectRepository + 'static,
    Q: OutreachQueue + 'static,
{
    match service.add(submission) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(ProspectServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({ "error": "prospect already exists" });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn list_handler<R, Q>(
    State(service): State<Arc<ProspectService<R, Q>>>,
    Query(filter): Query<ProspectFilter>,
) -> Response
where
    R: ProspectRepository + 'static,
    Q: OutreachQueue + 'static,
{
    match service.list(filter) {
        Ok(records) => {
            let views: Vec<_> = records.iter().map(|record| record.status_view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn status_handler<R, Q>(
    State(service): State<Arc<ProspectService<R, Q>>>,
    Path(prospect_id): Path<String>,
) -> Response
where
    R: ProspectRepository + 'static,
    Q: OutreachQueue + 'static,
{
    let id = ProspectId(prospect_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(ProspectServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "prospect_id": id.0,
                "error": "prospect not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn import_handler<R, Q>(
    State(service): State<Arc<ProspectService<R, Q>>>,
    body: String,
) -> Response
where
    R: ProspectRepository + 'static,
    Q: OutreachQueue + 'static,
{
    match service.import(body.as_bytes()) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(ProspectServiceError::Import(error)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn recalculate_handler<R, Q>(
    State(service): State<Arc<ProspectService<R, Q>>>,
) -> Response
where
    R: ProspectRepository + 'static,
    Q: OutreachQueue + 'static,
{
    match service.rescore_all() {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(other) => internal_error(other),
    }
}

fn internal_error(error: ProspectServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
