//! Health check operations.

use serde::{Deserialize, Serialize};

use super::SyllabusClient;
use crate::error::Result;

/// Server health status.
#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub courses: usize,
}

impl SyllabusClient {
    /// Check that the server and its repository answer.
    pub async fn health(&self) -> Result<Health> {
        let path = "/healthz";
        let response = self.client.get(self.url(path)).send().await?;
        self.handle_response(path, response).await
    }
}
