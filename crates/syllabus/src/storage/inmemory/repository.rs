//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use syllabus_core::catalog::{Catalog, Course, Coursework, EnrollmentSet};
use syllabus_core::storage::{
    CourseRepository, CourseworkRepository, EnrollmentRepository, RepositoryError, Result,
};

/// Counts of what a snapshot import put into the repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub courses: usize,
    pub coursework: usize,
}

/// In-memory storage backend.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Coursework is filed under the id of the course that owns it.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    courses: Arc<RwLock<HashMap<String, Course>>>,
    coursework: Arc<RwLock<HashMap<String, Vec<Coursework>>>>,
    enrollments: Arc<RwLock<HashMap<String, EnrollmentSet>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            courses: Arc::new(RwLock::new(HashMap::new())),
            coursework: Arc::new(RwLock::new(HashMap::new())),
            enrollments: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Loads a catalog snapshot without validating it.
    ///
    /// Records are kept exactly as given, broken dates included. When a course
    /// id appears twice the first course wins and the coursework of both is
    /// filed under it.
    pub async fn import_catalog(&self, catalog: Catalog) -> ImportSummary {
        let mut courses = self.courses.write().await;
        let mut coursework = self.coursework.write().await;
        let mut summary = ImportSummary::default();

        for record in catalog.courses {
            let (course, items) = record.into_parts();
            let course_id = course.id.clone();

            if !courses.contains_key(&course_id) {
                courses.insert(course_id.clone(), course);
                summary.courses += 1;
            }

            summary.coursework += items.len();
            coursework.entry(course_id).or_default().extend(items);
        }

        summary
    }
}

#[async_trait]
impl CourseRepository for InMemoryRepository {
    async fn get_course(&self, id: &str) -> Result<Option<Course>> {
        let courses = self.courses.read().await;
        Ok(courses.get(id).cloned())
    }

    async fn list_courses(&self) -> Result<Vec<Course>> {
        let courses = self.courses.read().await;
        let mut result: Vec<Course> = courses.values().cloned().collect();
        result.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(result)
    }

    async fn create_course(&self, course: &Course) -> Result<()> {
        let mut courses = self.courses.write().await;
        if courses.contains_key(&course.id) {
            return Err(RepositoryError::already_exists("Course", &course.id));
        }
        courses.insert(course.id.clone(), course.clone());
        Ok(())
    }

    async fn update_course(&self, course: &Course) -> Result<()> {
        let mut courses = self.courses.write().await;
        if !courses.contains_key(&course.id) {
            return Err(RepositoryError::not_found("Course", &course.id));
        }
        courses.insert(course.id.clone(), course.clone());
        Ok(())
    }

    async fn delete_course(&self, id: &str) -> Result<()> {
        let mut courses = self.courses.write().await;
        if courses.remove(id).is_none() {
            return Err(RepositoryError::not_found("Course", id));
        }

        // Lock order is always courses, then coursework.
        self.coursework.write().await.remove(id);
        Ok(())
    }
}

#[async_trait]
impl CourseworkRepository for InMemoryRepository {
    async fn get_coursework(&self, id: &str) -> Result<Option<Coursework>> {
        let coursework = self.coursework.read().await;
        let mut course_ids: Vec<&String> = coursework.keys().collect();
        course_ids.sort();

        Ok(course_ids
            .into_iter()
            .filter_map(|course_id| coursework.get(course_id))
            .flat_map(|items| items.iter())
            .find(|item| item.id() == id)
            .cloned())
    }

    async fn list_coursework_for_course(&self, course_id: &str) -> Result<Vec<Coursework>> {
        let coursework = self.coursework.read().await;
        Ok(coursework.get(course_id).cloned().unwrap_or_default())
    }

    async fn create_coursework(&self, item: &Coursework) -> Result<()> {
        // Held until the item is filed so a concurrent delete_course cannot
        // leave it orphaned.
        let courses = self.courses.read().await;
        if !courses.contains_key(item.course_id()) {
            return Err(RepositoryError::not_found("Course", item.course_id()));
        }

        let mut coursework = self.coursework.write().await;
        if coursework.values().flatten().any(|c| c.id() == item.id()) {
            return Err(RepositoryError::already_exists("Coursework", item.id()));
        }
        coursework
            .entry(item.course_id().to_string())
            .or_default()
            .push(item.clone());
        Ok(())
    }

    async fn update_coursework(&self, item: &Coursework) -> Result<()> {
        let mut coursework = self.coursework.write().await;
        let existing = coursework
            .values_mut()
            .flat_map(|items| items.iter_mut())
            .find(|c| c.id() == item.id())
            .ok_or_else(|| RepositoryError::not_found("Coursework", item.id()))?;

        if existing.course_id() != item.course_id() {
            return Err(RepositoryError::InvalidData(format!(
                "coursework {} belongs to course {}",
                item.id(),
                existing.course_id()
            )));
        }

        *existing = item.clone();
        Ok(())
    }

    async fn delete_coursework(&self, id: &str) -> Result<()> {
        let mut coursework = self.coursework.write().await;
        let mut removed = 0;
        for items in coursework.values_mut() {
            let before = items.len();
            items.retain(|c| c.id() != id);
            removed += before - items.len();
        }

        if removed == 0 {
            return Err(RepositoryError::not_found("Coursework", id));
        }
        Ok(())
    }
}

#[async_trait]
impl EnrollmentRepository for InMemoryRepository {
    async fn get_enrollments(&self, viewer_id: &str) -> Result<EnrollmentSet> {
        let enrollments = self.enrollments.read().await;
        Ok(enrollments.get(viewer_id).cloned().unwrap_or_default())
    }

    async fn set_enrollments(&self, viewer_id: &str, enrolled: &EnrollmentSet) -> Result<()> {
        let mut enrollments = self.enrollments.write().await;
        if enrolled.is_empty() {
            enrollments.remove(viewer_id);
        } else {
            enrollments.insert(viewer_id.to_string(), enrolled.clone());
        }
        Ok(())
    }

    async fn enroll(&self, viewer_id: &str, course_id: &str) -> Result<()> {
        let mut enrollments = self.enrollments.write().await;
        enrollments
            .entry(viewer_id.to_string())
            .or_default()
            .insert(course_id);
        Ok(())
    }

    async fn unenroll(&self, viewer_id: &str, course_id: &str) -> Result<()> {
        let mut enrollments = self.enrollments.write().await;
        let removed = enrollments
            .get_mut(viewer_id)
            .is_some_and(|set| set.remove(course_id));

        if !removed {
            return Err(RepositoryError::not_found(
                "Enrollment",
                format!("{viewer_id}/{course_id}"),
            ));
        }
        if enrollments.get(viewer_id).is_some_and(EnrollmentSet::is_empty) {
            enrollments.remove(viewer_id);
        }
        Ok(())
    }
}
