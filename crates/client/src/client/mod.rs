//! HTTP client for the syllabus API.

pub mod courses;
pub mod coursework;
pub mod enrollments;
pub mod events;
pub mod health;

use crate::error::{ClientError, Result};

/// HTTP client for the syllabus API.
#[derive(Debug, Clone)]
pub struct SyllabusClient {
    client: reqwest::Client,
    base_url: String,
}

impl SyllabusClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a JSON body, or turn an error status into a `ClientError`.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<T> {
        let response = self.check_status(path, response).await?;
        response.json().await.map_err(ClientError::from)
    }

    /// Handle delete responses (no body expected).
    async fn handle_delete_response(&self, path: &str, response: reqwest::Response) -> Result<()> {
        self.check_status(path, response).await.map(|_| ())
    }

    async fn check_status(
        &self,
        path: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status == reqwest::StatusCode::NOT_FOUND {
            Err(ClientError::NotFound {
                resource: path.to_string(),
            })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Joins course ids into the comma-separated form the API expects.
///
/// Returns `None` for an empty list so the parameter is left out entirely.
pub(crate) fn join_courses(courses: &[String]) -> Option<String> {
    let joined = courses
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(",");
    (!joined.is_empty()).then_some(joined)
}
