//! Viewer enrollment handlers.
//!
//! Viewer ids are opaque path segments. A viewer nobody has enrolled yet has
//! an empty set, which leaves every course visible.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    Form, Json,
};

use syllabus_core::storage::RepositoryError;

use crate::{
    handlers::{
        error::{error_response, repository_error_response},
        AppError,
    },
    models::{Enrollments, SetEnrollments},
    state::AppState,
};

async fn current(state: &AppState, viewer_id: &str) -> Result<Enrollments, RepositoryError> {
    let set = state.enrollment_repo.get_enrollments(viewer_id).await?;
    Ok(Enrollments::new(viewer_id, set))
}

/// Get a viewer's enrollments (GET /api/viewers/{viewer}/enrollments).
pub async fn get_enrollments(
    State(state): State<AppState>,
    Path(viewer_id): Path<String>,
) -> Result<Json<Enrollments>, AppError> {
    Ok(Json(current(&state, &viewer_id).await?))
}

/// Replace a viewer's enrollments (PUT /api/viewers/{viewer}/enrollments).
///
/// Unknown course ids are stored as given; they simply match no events.
pub async fn set_enrollments(
    State(state): State<AppState>,
    Path(viewer_id): Path<String>,
    form_result: Result<Form<SetEnrollments>, FormRejection>,
) -> Result<Json<Enrollments>, (StatusCode, String)> {
    let Form(payload) = form_result.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse form: {e}"),
        )
    })?;

    let set = payload.into_set();
    state
        .enrollment_repo
        .set_enrollments(&viewer_id, &set)
        .await
        .map_err(repository_error_response)?;

    tracing::info!(%viewer_id, courses = set.len(), "Replaced enrollments");

    Ok(Json(Enrollments::new(viewer_id, set)))
}

/// Enroll a viewer in a course (POST /api/viewers/{viewer}/enrollments/{course}).
pub async fn enroll(
    State(state): State<AppState>,
    Path((viewer_id, course_id)): Path<(String, String)>,
) -> Result<Json<Enrollments>, AppError> {
    if state.course_repo.get_course(&course_id).await?.is_none() {
        return Err(RepositoryError::not_found("Course", &course_id).into());
    }

    state.enrollment_repo.enroll(&viewer_id, &course_id).await?;

    tracing::info!(%viewer_id, %course_id, "Enrolled viewer");

    Ok(Json(current(&state, &viewer_id).await?))
}

/// Remove a viewer from a course (DELETE /api/viewers/{viewer}/enrollments/{course}).
pub async fn unenroll(
    State(state): State<AppState>,
    Path((viewer_id, course_id)): Path<(String, String)>,
) -> Result<Json<Enrollments>, AppError> {
    state.enrollment_repo.unenroll(&viewer_id, &course_id).await?;

    tracing::info!(%viewer_id, %course_id, "Unenrolled viewer");

    Ok(Json(current(&state, &viewer_id).await?))
}
