//! Viewer enrollment operations.

use serde::{Deserialize, Serialize};
use syllabus_core::catalog::EnrollmentSet;

use super::{join_courses, SyllabusClient};
use crate::error::Result;

/// A viewer's enrollments as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollments {
    pub viewer_id: String,
    pub courses: EnrollmentSet,
    pub unrestricted: bool,
}

#[derive(Debug, Serialize)]
struct SetEnrollmentsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    courses: Option<String>,
}

impl SyllabusClient {
    /// Get a viewer's enrollments.
    pub async fn get_enrollments(&self, viewer_id: &str) -> Result<Enrollments> {
        let path = format!("/api/viewers/{viewer_id}/enrollments");
        let response = self.client.get(self.url(&path)).send().await?;
        self.handle_response(&path, response).await
    }

    /// Replace a viewer's enrollments. An empty list clears them.
    pub async fn set_enrollments(&self, viewer_id: &str, courses: &[String]) -> Result<Enrollments> {
        let path = format!("/api/viewers/{viewer_id}/enrollments");
        let req = SetEnrollmentsRequest {
            courses: join_courses(courses),
        };
        let response = self.client.put(self.url(&path)).form(&req).send().await?;
        self.handle_response(&path, response).await
    }

    /// Enroll a viewer in a course.
    pub async fn enroll(&self, viewer_id: &str, course_id: &str) -> Result<Enrollments> {
        let path = format!("/api/viewers/{viewer_id}/enrollments/{course_id}");
        let response = self.client.post(self.url(&path)).send().await?;
        self.handle_response(&path, response).await
    }

    /// Remove a viewer from a course.
    pub async fn unenroll(&self, viewer_id: &str, course_id: &str) -> Result<Enrollments> {
        let path = format!("/api/viewers/{viewer_id}/enrollments/{course_id}");
        let response = self.client.delete(self.url(&path)).send().await?;
        self.handle_response(&path, response).await
    }
}
