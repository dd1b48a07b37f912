//! Course API operations.

use chrono::NaiveDate;
use syllabus_core::catalog::Course;

use super::SyllabusClient;
use crate::error::Result;

/// Request for creating a course.
#[derive(Debug, serde::Serialize)]
pub struct CreateCourseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub course_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_start: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_end: Option<NaiveDate>,
}

impl SyllabusClient {
    /// List all courses.
    pub async fn list_courses(&self) -> Result<Vec<Course>> {
        let path = "/api/courses";
        let response = self.client.get(self.url(path)).send().await?;
        self.handle_response(path, response).await
    }

    /// Create a new course.
    pub async fn create_course(&self, req: CreateCourseRequest) -> Result<Course> {
        let path = "/api/courses";
        let response = self.client.post(self.url(path)).form(&req).send().await?;
        self.handle_response(path, response).await
    }

    /// Get course by ID.
    pub async fn get_course(&self, id: &str) -> Result<Course> {
        let path = format!("/api/courses/{id}");
        let response = self.client.get(self.url(&path)).send().await?;
        self.handle_response(&path, response).await
    }

    /// Delete course by ID, together with its coursework.
    pub async fn delete_course(&self, id: &str) -> Result<()> {
        let path = format!("/api/courses/{id}");
        let response = self.client.delete(self.url(&path)).send().await?;
        self.handle_delete_response(&path, response).await
    }
}
