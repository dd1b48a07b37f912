use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use syllabus_core::storage::{repository_error_to_status_code, RepositoryError};

pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            status_for(repo_error)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Request failed");
        }

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Error response with message (for validation and write errors).
pub fn error_response(status: StatusCode, message: impl Into<String>) -> (StatusCode, String) {
    let msg = message.into();
    tracing::warn!(status = %status, message = %msg, "API error");
    (status, msg)
}

/// Error response for a failed repository call.
pub fn repository_error_response(error: RepositoryError) -> (StatusCode, String) {
    error_response(status_for(&error), error.to_string())
}

fn status_for(error: &RepositoryError) -> StatusCode {
    StatusCode::from_u16(repository_error_to_status_code(error))
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
