//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Repository reachability plus the number of courses

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct HealthStatus {
    status: &'static str,
    courses: usize,
}

/// GET /livez - Basic liveness probe.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Lists courses to prove the repository answers.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Response {
    match state.course_repo.list_courses().await {
        Ok(courses) => (
            StatusCode::OK,
            Json(HealthStatus {
                status: "ok",
                courses: courses.len(),
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "unavailable",
                    "error": err.to_string()
                })),
            )
                .into_response()
        }
    }
}
