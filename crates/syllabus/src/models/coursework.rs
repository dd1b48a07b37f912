use serde::Deserialize;
use uuid::Uuid;

use syllabus_core::catalog::{
    Assignment, Coursework, CourseworkType, Discussion, Priority, Quiz,
};
use syllabus_core::serde::{deserialize_optional_parsed, deserialize_optional_string};

/// Form payload for creating or replacing a piece of coursework.
///
/// `date` is the due date of assignments and discussions and the day a quiz
/// opens. `time` is the due time, or the start time of a quiz. Fields that do
/// not apply to `kind` are ignored.
#[derive(Debug, Deserialize)]
pub struct CourseworkForm {
    pub kind: CourseworkType,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_parsed")]
    pub points_possible: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_optional_parsed")]
    pub priority: Option<Priority>,
    #[serde(default, deserialize_with = "deserialize_optional_parsed")]
    pub time_limit_minutes: Option<u32>,
}

impl CourseworkForm {
    /// Converts the form into coursework filed under `course_id`.
    ///
    /// `existing_id` wins over the form's id; otherwise a blank id gets a
    /// generated one.
    pub fn into_coursework(self, course_id: &str, existing_id: Option<&str>) -> Coursework {
        let id = existing_id
            .map(str::to_string)
            .or_else(|| self.id.map(|id| id.trim().to_string()))
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let title = self.title.trim().to_string();
        let course_id = course_id.to_string();

        match self.kind {
            CourseworkType::Assignment => Coursework::Assignment(Assignment {
                id,
                course_id,
                title,
                due_date: self.date,
                due_time: self.time,
                points_possible: self.points_possible,
                priority: self.priority,
            }),
            CourseworkType::Quiz => Coursework::Quiz(Quiz {
                id,
                course_id,
                title,
                available_date: self.date,
                start_time: self.time,
                end_time: self.end_time,
                location: self.location,
                points_possible: self.points_possible,
                time_limit_minutes: self.time_limit_minutes,
            }),
            CourseworkType::Discussion => Coursework::Discussion(Discussion {
                id,
                course_id,
                title,
                due_date: self.date,
                due_time: self.time,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(kind: CourseworkType) -> CourseworkForm {
        CourseworkForm {
            kind,
            id: Some("X1".to_string()),
            title: " Midterm ".to_string(),
            date: Some("2025-06-12".to_string()),
            time: Some("10:00".to_string()),
            end_time: Some("11:30".to_string()),
            location: Some("Hall B".to_string()),
            points_possible: Some(50),
            priority: Some(Priority::High),
            time_limit_minutes: Some(90),
        }
    }

    #[test]
    fn test_quiz_form_keeps_quiz_fields() {
        let item = form(CourseworkType::Quiz).into_coursework("C1", None);

        let Coursework::Quiz(quiz) = item else {
            panic!("expected a quiz");
        };
        assert_eq!(quiz.id, "X1");
        assert_eq!(quiz.course_id, "C1");
        assert_eq!(quiz.title, "Midterm");
        assert_eq!(quiz.end_time.as_deref(), Some("11:30"));
        assert_eq!(quiz.location.as_deref(), Some("Hall B"));
        assert_eq!(quiz.time_limit_minutes, Some(90));
    }

    #[test]
    fn test_discussion_form_ignores_other_fields() {
        let item = form(CourseworkType::Discussion).into_coursework("C1", None);

        assert_eq!(item.coursework_type(), CourseworkType::Discussion);
        assert_eq!(item.raw_date(), Some("2025-06-12"));
    }

    #[test]
    fn test_existing_id_wins() {
        let item = form(CourseworkType::Assignment).into_coursework("C1", Some("A7"));
        assert_eq!(item.id(), "A7");
    }

    #[test]
    fn test_blank_id_is_generated() {
        let mut payload = form(CourseworkType::Assignment);
        payload.id = None;

        let item = payload.into_coursework("C1", None);
        assert!(Uuid::parse_str(item.id()).is_ok());
    }
}
