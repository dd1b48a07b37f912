//! Coursework handlers for assignments, quizzes and discussions.
//!
//! Writes are validated with `validate_coursework`; reads return records as
//! stored, including any that the aggregator would skip.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};

use syllabus_core::catalog::{validate_coursework, Coursework};
use syllabus_core::storage::RepositoryError;

use crate::{
    handlers::{
        error::{error_response, repository_error_response},
        AppError,
    },
    models::CourseworkForm,
    state::AppState,
};

/// List the coursework of a course (GET /api/courses/{id}/coursework).
pub async fn list_coursework(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<Vec<Coursework>>, AppError> {
    if state.course_repo.get_course(&course_id).await?.is_none() {
        return Err(RepositoryError::not_found("Course", &course_id).into());
    }

    let items = state
        .coursework_repo
        .list_coursework_for_course(&course_id)
        .await?;
    Ok(Json(items))
}

/// Create a piece of coursework under a course (POST /api/courses/{id}/coursework).
pub async fn create_coursework(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    form_result: Result<Form<CourseworkForm>, FormRejection>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let Form(payload) = form_result.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse form: {e}"),
        )
    })?;

    tracing::debug!(payload = ?payload, %course_id, "Received create coursework request");

    let item = payload.into_coursework(&course_id, None);
    validate_coursework(&item)
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?;

    state
        .coursework_repo
        .create_coursework(&item)
        .await
        .map_err(repository_error_response)?;

    tracing::info!(
        coursework_id = %item.id(),
        kind = %item.coursework_type(),
        %course_id,
        "Created new coursework"
    );

    Ok((StatusCode::CREATED, Json(item)))
}

/// Get a piece of coursework by ID (GET /api/coursework/{id}).
pub async fn get_coursework(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Coursework>, AppError> {
    let item = state
        .coursework_repo
        .get_coursework(&id)
        .await?
        .ok_or_else(|| RepositoryError::not_found("Coursework", &id))?;
    Ok(Json(item))
}

/// Replace a piece of coursework (PUT /api/coursework/{id}).
///
/// The item stays under its course and keeps its id; its kind may change.
pub async fn update_coursework(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form_result: Result<Form<CourseworkForm>, FormRejection>,
) -> Result<Json<Coursework>, (StatusCode, String)> {
    let Form(payload) = form_result.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse form: {e}"),
        )
    })?;

    let existing = state
        .coursework_repo
        .get_coursework(&id)
        .await
        .map_err(repository_error_response)?
        .ok_or_else(|| repository_error_response(RepositoryError::not_found("Coursework", &id)))?;

    let item = payload.into_coursework(existing.course_id(), Some(&id));
    validate_coursework(&item)
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?;

    state
        .coursework_repo
        .update_coursework(&item)
        .await
        .map_err(repository_error_response)?;

    tracing::info!(coursework_id = %id, "Updated coursework");

    Ok(Json(item))
}

/// Delete a piece of coursework by ID (DELETE /api/coursework/{id}).
pub async fn delete_coursework(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.coursework_repo.delete_coursework(&id).await?;

    tracing::info!(coursework_id = %id, "Deleted coursework");

    Ok(StatusCode::OK)
}
