use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use outreach_ai::workflows::prospects::{
    prospect_router, OutreachQueue, ProspectRepository, ProspectService,
};

pub(crate) fn with_prospect_routes<R, Q>(service: Arc<ProspectService<R, Q>>) -> axum::Router
where
    R: ProspectRepository + 'static,
    Q: OutreachQueue + 'static,
{
    prospect_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{InMemoryOutreachQueue, InMemoryProspectRepository};
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_router() -> axum::Router {
        let repository = Arc::new(InMemoryProspectRepository::default());
        let queue = Arc::new(InMemoryOutreachQueue::default());
        let service = Arc::new(ProspectService::new(repository, queue, 70));
        prospect_router(service).route("/health", axum::routing::get(healthcheck))
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn import_and_list_round_trip() {
        let router = test_router();

        let csv = "First Name,Last Name,Company,Position,Industry,Company Size,About\n\
Maya,Torres,Zulay Kitchen,CEO,Retail,11-50,Kitchen products brand with millions of customers\n";
        let response = router
            .clone()
            .oneshot(
                Request::post("/api/v1/prospects/import")
                    .header(header::CONTENT_TYPE, "text/csv")
                    .body(Body::from(csv))
                    .unwrap(),
            )
            .await
            .expect("import executes");
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(
                Request::get("/api/v1/prospects?segment=merchant")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .expect("list executes");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
