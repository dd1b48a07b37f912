//! Course CRUD handlers.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};

use syllabus_core::catalog::{validate_course, Course};
use syllabus_core::storage::RepositoryError;

use crate::{
    handlers::{
        error::{error_response, repository_error_response},
        AppError,
    },
    models::{CreateCourse, UpdateCourse},
    state::AppState,
};

/// List all courses (GET /api/courses).
pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    let courses = state.course_repo.list_courses().await?;
    Ok(Json(courses))
}

/// Create a new course (POST /api/courses).
pub async fn create_course(
    State(state): State<AppState>,
    form_result: Result<Form<CreateCourse>, FormRejection>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let Form(payload) = form_result.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse form: {e}"),
        )
    })?;

    let course = payload
        .into_course()
        .map_err(|msg| error_response(StatusCode::BAD_REQUEST, msg))?;
    validate_course(&course).map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?;

    state
        .course_repo
        .create_course(&course)
        .await
        .map_err(repository_error_response)?;

    tracing::info!(course_id = %course.id, name = %course.name, "Created new course");

    Ok((StatusCode::CREATED, Json(course)))
}

/// Get a single course by ID (GET /api/courses/{id}).
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Course>, AppError> {
    let course = state
        .course_repo
        .get_course(&id)
        .await?
        .ok_or_else(|| RepositoryError::not_found("Course", &id))?;
    Ok(Json(course))
}

/// Update a course by ID (PUT /api/courses/{id}).
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form_result: Result<Form<UpdateCourse>, FormRejection>,
) -> Result<Json<Course>, (StatusCode, String)> {
    let Form(payload) = form_result.map_err(|e| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Failed to parse form: {e}"),
        )
    })?;

    let mut course = state
        .course_repo
        .get_course(&id)
        .await
        .map_err(repository_error_response)?
        .ok_or_else(|| repository_error_response(RepositoryError::not_found("Course", &id)))?;

    payload
        .apply_to(&mut course)
        .map_err(|msg| error_response(StatusCode::BAD_REQUEST, msg))?;
    validate_course(&course).map_err(|e| error_response(StatusCode::BAD_REQUEST, e.to_string()))?;

    state
        .course_repo
        .update_course(&course)
        .await
        .map_err(repository_error_response)?;

    tracing::info!(course_id = %id, "Updated course");

    Ok(Json(course))
}

/// Delete a course by ID (DELETE /api/courses/{id}).
///
/// Also deletes all coursework belonging to this course.
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.course_repo.delete_course(&id).await?;

    tracing::info!(course_id = %id, "Deleted course and its coursework");

    Ok(StatusCode::OK)
}
