//! Coursework API operations.

use syllabus_core::catalog::{Coursework, CourseworkType, Priority};

use super::SyllabusClient;
use crate::error::{ClientError, Result};

/// Request for creating a piece of coursework.
///
/// `date` and `time` are sent as typed by the user; the server validates them.
#[derive(Debug, serde::Serialize)]
pub struct CreateCourseworkRequest {
    pub kind: CourseworkType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_possible: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit_minutes: Option<u32>,
}

impl CreateCourseworkRequest {
    /// Rejects fields that make no sense for the chosen kind before any
    /// request is sent.
    pub fn check(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ClientError::InvalidInput(
                "title cannot be empty".to_string(),
            ));
        }
        if self.priority.is_some() && self.kind != CourseworkType::Assignment {
            return Err(ClientError::InvalidInput(format!(
                "--priority only applies to assignments, not {}",
                self.kind
            )));
        }
        if self.kind != CourseworkType::Quiz
            && (self.end_time.is_some()
                || self.location.is_some()
                || self.time_limit_minutes.is_some())
        {
            return Err(ClientError::InvalidInput(format!(
                "--end-time, --location and --time-limit only apply to quizzes, not {}",
                self.kind
            )));
        }
        Ok(())
    }
}

impl SyllabusClient {
    /// List the coursework of a course.
    pub async fn list_coursework(&self, course_id: &str) -> Result<Vec<Coursework>> {
        let path = format!("/api/courses/{course_id}/coursework");
        let response = self.client.get(self.url(&path)).send().await?;
        self.handle_response(&path, response).await
    }

    /// Create a piece of coursework under a course.
    pub async fn create_coursework(
        &self,
        course_id: &str,
        req: CreateCourseworkRequest,
    ) -> Result<Coursework> {
        req.check()?;
        let path = format!("/api/courses/{course_id}/coursework");
        let response = self
            .client
            .post(self.url(&path))
            .form(&req)
            .send()
            .await?;
        self.handle_response(&path, response).await
    }

    /// Get a piece of coursework by ID.
    pub async fn get_coursework(&self, id: &str) -> Result<Coursework> {
        let path = format!("/api/coursework/{id}");
        let response = self.client.get(self.url(&path)).send().await?;
        self.handle_response(&path, response).await
    }

    /// Delete a piece of coursework by ID.
    pub async fn delete_coursework(&self, id: &str) -> Result<()> {
        let path = format!("/api/coursework/{id}");
        let response = self.client.delete(self.url(&path)).send().await?;
        self.handle_delete_response(&path, response).await
    }
}
