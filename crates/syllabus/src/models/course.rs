use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use syllabus_core::catalog::{Course, TermDates};
use syllabus_core::serde::{deserialize_optional_date, deserialize_optional_string};

/// Request payload for creating a new course.
///
/// A blank `id` gets a generated one.
#[derive(Debug, Deserialize)]
pub struct CreateCourse {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub id: Option<String>,
    pub name: String,
    pub course_code: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub instructor: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub term_start: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub term_end: Option<NaiveDate>,
}

impl CreateCourse {
    /// Converts the create request into a Course.
    pub fn into_course(self) -> Result<Course, String> {
        let id = self
            .id
            .map(|id| id.trim().to_string())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let mut course = Course::new(id, self.name.trim(), self.course_code.trim());
        course.instructor = self.instructor;
        course.term = term(self.term_start, self.term_end)?;
        Ok(course)
    }
}

/// Request payload for updating a course. Absent fields are left untouched.
#[derive(Debug, Deserialize)]
pub struct UpdateCourse {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub course_code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub instructor: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub term_start: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub term_end: Option<NaiveDate>,
}

impl UpdateCourse {
    /// Applies the update to an existing course.
    pub fn apply_to(self, course: &mut Course) -> Result<(), String> {
        if let Some(term) = term(self.term_start, self.term_end)? {
            course.term = Some(term);
        }
        if let Some(name) = self.name {
            course.name = name.trim().to_string();
        }
        if let Some(course_code) = self.course_code {
            course.course_code = course_code.trim().to_string();
        }
        if let Some(instructor) = self.instructor {
            course.instructor = Some(instructor);
        }
        Ok(())
    }
}

fn term(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Option<TermDates>, String> {
    match (start, end) {
        (Some(start), Some(end)) => Ok(Some(TermDates { start, end })),
        (None, None) => Ok(None),
        _ => Err("term_start and term_end must be given together".to_string()),
    }
}
