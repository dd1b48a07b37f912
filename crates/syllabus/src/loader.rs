//! Builds catalog snapshots from the repositories.
//!
//! This is the imperative half of an events query: it does the I/O, then the
//! pure aggregator in `syllabus_core::calendar` does the rest.

use futures_util::future::try_join_all;

use syllabus_core::catalog::{Catalog, CourseRecord, EnrollmentSet};
use syllabus_core::storage::{CourseRepository, CourseworkRepository, RepositoryError};

/// Loads every course visible under `enrolled` together with its coursework.
///
/// Coursework for the visible courses is fetched concurrently; the first
/// failure aborts the whole load.
pub async fn load_catalog(
    course_repo: &dyn CourseRepository,
    coursework_repo: &dyn CourseworkRepository,
    enrolled: &EnrollmentSet,
) -> Result<Catalog, RepositoryError> {
    let courses = course_repo.list_courses().await?;

    let records = try_join_all(
        courses
            .into_iter()
            .filter(|course| enrolled.allows(&course.id))
            .map(|course| async move {
                let items = coursework_repo.list_coursework_for_course(&course.id).await?;
                Ok::<_, RepositoryError>(CourseRecord::with_coursework(course, items))
            }),
    )
    .await?;

    tracing::debug!(
        courses = records.len(),
        restricted = !enrolled.is_unrestricted(),
        "Loaded catalog snapshot"
    );

    Ok(Catalog::new(records))
}
