use thiserror::Error;

/// Errors raised when validating catalog records before they are written.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Course id cannot be empty")]
    EmptyCourseId,
    #[error("Course name cannot be empty")]
    EmptyCourseName,
    #[error("Course name too long (max 200 characters)")]
    CourseNameTooLong,
    #[error("Course code cannot be empty")]
    EmptyCourseCode,
    #[error("Term end must be on or after term start")]
    InvalidTerm,
    #[error("Coursework title cannot be empty")]
    EmptyTitle,
    #[error("Coursework title too long (max 200 characters)")]
    TitleTooLong,
    #[error("Coursework date is required")]
    MissingDate,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid time: {0}")]
    InvalidTime(String),
    #[error("End time must be after start time")]
    InvalidTimeRange,
}
