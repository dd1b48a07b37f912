//! Mapping of repository errors onto HTTP status codes.
//!
//! Kept in the core so every transport agrees on the same codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404
/// - `AlreadyExists` -> 409
/// - `InvalidData` -> 400
///
/// # Examples
///
/// ```
/// use syllabus_core::storage::{repository_error_to_status_code, RepositoryError};
///
/// let error = RepositoryError::not_found("Course", "C1");
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::AlreadyExists { .. } => 409,
        RepositoryError::InvalidData(_) => 400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = RepositoryError::not_found("Course", "C9");
        assert_eq!(repository_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_already_exists_maps_to_409() {
        let error = RepositoryError::already_exists("Coursework", "A1");
        assert_eq!(repository_error_to_status_code(&error), 409);
    }

    #[test]
    fn test_invalid_data_maps_to_400() {
        let error = RepositoryError::InvalidData("course id mismatch".to_string());
        assert_eq!(repository_error_to_status_code(&error), 400);
    }
}
