//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Storage is reached through repository trait objects so
//! handlers never see the concrete backend.

use std::{sync::Arc, time::Duration};

use anyhow::Context;

use syllabus_core::calendar::generate_seed_catalog;
use syllabus_core::catalog::{Catalog, EnrollmentSet};
use syllabus_core::storage::{
    CourseRepository, CourseworkRepository, EnrollmentRepository, RepositoryError,
};

use crate::{config::Config, loader, storage::InMemoryRepository};

/// Weeks of demo coursework generated around today.
const DEMO_WEEKS: u32 = 8;

/// Shared application state.
///
/// This is cloned for each request handler; every field is a cheap handle.
#[derive(Clone)]
pub struct AppState {
    pub course_repo: Arc<dyn CourseRepository>,
    pub coursework_repo: Arc<dyn CourseworkRepository>,
    pub enrollment_repo: Arc<dyn EnrollmentRepository>,
    /// Window of `/api/events/upcoming` when the query gives none.
    pub upcoming_default_days: u64,
    pub request_timeout: Duration,
}

impl AppState {
    fn build(repo: Arc<InMemoryRepository>, config: &Config) -> Self {
        Self {
            course_repo: repo.clone(),
            coursework_repo: repo.clone(),
            enrollment_repo: repo,
            upcoming_default_days: config.upcoming_default_days,
            request_timeout: config.request_timeout(),
        }
    }

    /// Creates AppState with in-memory storage, filled from the configured
    /// catalog snapshot or with demo data.
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let repo = Arc::new(InMemoryRepository::new());

        if let Some(path) = &config.catalog_path {
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read catalog snapshot {}", path.display()))?;
            let catalog = Catalog::from_json(&json)
                .with_context(|| format!("failed to parse catalog snapshot {}", path.display()))?;

            let summary = repo.import_catalog(catalog).await;
            tracing::info!(
                path = %path.display(),
                courses = summary.courses,
                coursework = summary.coursework,
                "Imported catalog snapshot"
            );
        } else if config.seed_demo {
            let today = chrono::Local::now().date_naive();
            let summary = repo
                .import_catalog(generate_seed_catalog(today, DEMO_WEEKS))
                .await;
            tracing::info!(
                courses = summary.courses,
                coursework = summary.coursework,
                "Seeded demo catalog"
            );
        }

        Ok(Self::build(repo, config))
    }

    /// Loads the catalog snapshot visible under `enrolled`.
    pub async fn load_catalog(&self, enrolled: &EnrollmentSet) -> Result<Catalog, RepositoryError> {
        loader::load_catalog(
            self.course_repo.as_ref(),
            self.coursework_repo.as_ref(),
            enrolled,
        )
        .await
    }
}

#[cfg(test)]
impl Default for AppState {
    /// Creates an AppState over an empty in-memory repository for tests.
    fn default() -> Self {
        Self::build(Arc::new(InMemoryRepository::new()), &Config::default())
    }
}
