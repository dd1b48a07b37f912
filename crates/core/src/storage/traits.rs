use async_trait::async_trait;

use crate::catalog::{Course, Coursework, EnrollmentSet};

use super::Result;

/// Repository for course operations.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Gets a course by its ID.
    async fn get_course(&self, id: &str) -> Result<Option<Course>>;

    /// Lists every course, ordered by ID.
    async fn list_courses(&self) -> Result<Vec<Course>>;

    /// Creates a new course.
    async fn create_course(&self, course: &Course) -> Result<()>;

    /// Updates an existing course.
    async fn update_course(&self, course: &Course) -> Result<()>;

    /// Deletes a course together with all of its coursework.
    async fn delete_course(&self, id: &str) -> Result<()>;
}

/// Repository for assignments, quizzes and discussions.
#[async_trait]
pub trait CourseworkRepository: Send + Sync {
    /// Gets a coursework item by its ID.
    async fn get_coursework(&self, id: &str) -> Result<Option<Coursework>>;

    /// Lists the coursework filed under a course, in insertion order.
    async fn list_coursework_for_course(&self, course_id: &str) -> Result<Vec<Coursework>>;

    /// Creates a new coursework item under the course named by its `course_id`.
    async fn create_coursework(&self, item: &Coursework) -> Result<()>;

    /// Replaces an existing coursework item.
    async fn update_coursework(&self, item: &Coursework) -> Result<()>;

    /// Deletes a coursework item by its ID.
    async fn delete_coursework(&self, id: &str) -> Result<()>;
}

/// Repository for viewer enrollments.
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Gets the courses a viewer is enrolled in. Unknown viewers get an empty set.
    async fn get_enrollments(&self, viewer_id: &str) -> Result<EnrollmentSet>;

    /// Replaces a viewer's enrollment set.
    async fn set_enrollments(&self, viewer_id: &str, enrolled: &EnrollmentSet) -> Result<()>;

    /// Adds one course to a viewer's set.
    async fn enroll(&self, viewer_id: &str, course_id: &str) -> Result<()>;

    /// Removes one course from a viewer's set.
    async fn unenroll(&self, viewer_id: &str, course_id: &str) -> Result<()>;
}
