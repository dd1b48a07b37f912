use serde::{Deserialize, Serialize};

use syllabus_core::catalog::EnrollmentSet;
use syllabus_core::serde::deserialize_comma_separated;

/// Form payload replacing a viewer's enrollment set (`courses=C1,C2`).
///
/// A missing or blank list clears the set.
#[derive(Debug, Deserialize)]
pub struct SetEnrollments {
    #[serde(default, deserialize_with = "deserialize_comma_separated")]
    pub courses: Option<Vec<String>>,
}

impl SetEnrollments {
    pub fn into_set(self) -> EnrollmentSet {
        self.courses.unwrap_or_default().into_iter().collect()
    }
}

/// A viewer's enrollments as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollments {
    pub viewer_id: String,
    pub courses: EnrollmentSet,
    /// True when the set is empty and every course is visible.
    pub unrestricted: bool,
}

impl Enrollments {
    pub fn new(viewer_id: impl Into<String>, courses: EnrollmentSet) -> Self {
        Self {
            viewer_id: viewer_id.into(),
            unrestricted: courses.is_unrestricted(),
            courses,
        }
    }
}
