use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// First and last day of a course's term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermDates {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A course in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    /// Short registrar code, e.g. `CS-101`.
    pub course_code: String,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_string")]
    pub instructor: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient")]
    pub term: Option<TermDates>,
}

impl Course {
    /// Creates a new course with the given id, name and code.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        course_code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            course_code: course_code.into(),
            instructor: None,
            term: None,
        }
    }

    /// Sets the instructor for this course.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    /// Sets the term dates for this course.
    pub fn with_term(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.term = Some(TermDates { start, end });
        self
    }
}

/// Urgency attached to an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

/// An assignment as stored in the catalog.
///
/// Dates and times are kept as the raw strings the catalog was fed with;
/// they are only parsed when projected into calendar events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_text")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_text")]
    pub course_id: String,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_string")]
    pub due_date: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_string")]
    pub due_time: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient")]
    pub points_possible: Option<u32>,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient")]
    pub priority: Option<Priority>,
}

impl Assignment {
    /// Creates a new assignment due on the given ISO date.
    pub fn new(
        id: impl Into<String>,
        course_id: impl Into<String>,
        title: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            course_id: course_id.into(),
            title: title.into(),
            due_date: Some(due_date.into()),
            due_time: None,
            points_possible: None,
            priority: None,
        }
    }

    pub fn with_due_time(mut self, due_time: impl Into<String>) -> Self {
        self.due_time = Some(due_time.into());
        self
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points_possible = Some(points);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// A quiz or exam as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_text")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_text")]
    pub course_id: String,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_text")]
    pub title: String,
    /// Day the quiz opens (or is sat, for in-person exams).
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_string")]
    pub available_date: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_string")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_string")]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient")]
    pub points_possible: Option<u32>,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient")]
    pub time_limit_minutes: Option<u32>,
}

impl Quiz {
    /// Creates a new quiz available on the given ISO date.
    pub fn new(
        id: impl Into<String>,
        course_id: impl Into<String>,
        title: impl Into<String>,
        available_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            course_id: course_id.into(),
            title: title.into(),
            available_date: Some(available_date.into()),
            start_time: None,
            end_time: None,
            location: None,
            points_possible: None,
            time_limit_minutes: None,
        }
    }

    /// Sets the sitting window of the quiz.
    pub fn with_times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = Some(start.into());
        self.end_time = Some(end.into());
        self
    }

    pub fn with_start_time(mut self, start: impl Into<String>) -> Self {
        self.start_time = Some(start.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points_possible = Some(points);
        self
    }

    pub fn with_time_limit(mut self, minutes: u32) -> Self {
        self.time_limit_minutes = Some(minutes);
        self
    }
}

/// A graded discussion thread as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discussion {
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_text")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_text")]
    pub course_id: String,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_string")]
    pub due_date: Option<String>,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_string")]
    pub due_time: Option<String>,
}

impl Discussion {
    /// Creates a new discussion due on the given ISO date.
    pub fn new(
        id: impl Into<String>,
        course_id: impl Into<String>,
        title: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            course_id: course_id.into(),
            title: title.into(),
            due_date: Some(due_date.into()),
            due_time: None,
        }
    }

    pub fn with_due_time(mut self, due_time: impl Into<String>) -> Self {
        self.due_time = Some(due_time.into());
        self
    }
}

/// The three source collections a course carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseworkType {
    Assignment,
    Quiz,
    Discussion,
}

impl CourseworkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseworkType::Assignment => "assignment",
            CourseworkType::Quiz => "quiz",
            CourseworkType::Discussion => "discussion",
        }
    }
}

impl fmt::Display for CourseworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseworkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "assignment" => Ok(CourseworkType::Assignment),
            "quiz" => Ok(CourseworkType::Quiz),
            "discussion" => Ok(CourseworkType::Discussion),
            other => Err(format!("unknown coursework type: {other}")),
        }
    }
}

/// Any single piece of coursework, tagged by its source collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Coursework {
    Assignment(Assignment),
    Quiz(Quiz),
    Discussion(Discussion),
}

impl Coursework {
    pub fn id(&self) -> &str {
        match self {
            Coursework::Assignment(a) => &a.id,
            Coursework::Quiz(q) => &q.id,
            Coursework::Discussion(d) => &d.id,
        }
    }

    pub fn course_id(&self) -> &str {
        match self {
            Coursework::Assignment(a) => &a.course_id,
            Coursework::Quiz(q) => &q.course_id,
            Coursework::Discussion(d) => &d.course_id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Coursework::Assignment(a) => &a.title,
            Coursework::Quiz(q) => &q.title,
            Coursework::Discussion(d) => &d.title,
        }
    }

    /// The raw date string that places this item on the calendar.
    pub fn raw_date(&self) -> Option<&str> {
        match self {
            Coursework::Assignment(a) => a.due_date.as_deref(),
            Coursework::Quiz(q) => q.available_date.as_deref(),
            Coursework::Discussion(d) => d.due_date.as_deref(),
        }
    }

    pub fn coursework_type(&self) -> CourseworkType {
        match self {
            Coursework::Assignment(_) => CourseworkType::Assignment,
            Coursework::Quiz(_) => CourseworkType::Quiz,
            Coursework::Discussion(_) => CourseworkType::Discussion,
        }
    }
}

impl From<Assignment> for Coursework {
    fn from(assignment: Assignment) -> Self {
        Coursework::Assignment(assignment)
    }
}

impl From<Quiz> for Coursework {
    fn from(quiz: Quiz) -> Self {
        Coursework::Quiz(quiz)
    }
}

impl From<Discussion> for Coursework {
    fn from(discussion: Discussion) -> Self {
        Coursework::Discussion(discussion)
    }
}

/// A course together with everything it has on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub course: Course,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_vec")]
    pub assignments: Vec<Assignment>,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_vec")]
    pub quizzes: Vec<Quiz>,
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_vec")]
    pub discussions: Vec<Discussion>,
}

impl CourseRecord {
    /// Creates a record with no coursework.
    pub fn new(course: Course) -> Self {
        Self {
            course,
            assignments: Vec::new(),
            quizzes: Vec::new(),
            discussions: Vec::new(),
        }
    }

    /// Creates a record from a course and its stored coursework.
    pub fn with_coursework(course: Course, items: impl IntoIterator<Item = Coursework>) -> Self {
        let mut record = Self::new(course);
        for item in items {
            record.push(item);
        }
        record
    }

    /// Files a coursework item into the matching collection.
    pub fn push(&mut self, item: Coursework) {
        match item {
            Coursework::Assignment(a) => self.assignments.push(a),
            Coursework::Quiz(q) => self.quizzes.push(q),
            Coursework::Discussion(d) => self.discussions.push(d),
        }
    }

    /// Consumes the record, returning the course and its coursework as a flat list.
    pub fn into_parts(self) -> (Course, Vec<Coursework>) {
        let items = self
            .assignments
            .into_iter()
            .map(Coursework::from)
            .chain(self.quizzes.into_iter().map(Coursework::from))
            .chain(self.discussions.into_iter().map(Coursework::from))
            .collect();
        (self.course, items)
    }

    /// Total number of coursework items in this record.
    pub fn coursework_count(&self) -> usize {
        self.assignments.len() + self.quizzes.len() + self.discussions.len()
    }
}

/// Read-only snapshot of courses and their coursework.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, deserialize_with = "crate::serde::deserialize_lenient_vec")]
    pub courses: Vec<CourseRecord>,
}

impl Catalog {
    pub fn new(courses: Vec<CourseRecord>) -> Self {
        Self { courses }
    }

    /// Parses a catalog snapshot from JSON.
    ///
    /// Only a document that is not a JSON object fails. Inside it, values of
    /// the wrong type become `None` (text keeps its raw spelling), and course
    /// records without a readable course are dropped. Coursework is kept for
    /// the aggregator to skip when it cannot be placed on the calendar.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Looks up a course record by course id.
    pub fn course(&self, course_id: &str) -> Option<&CourseRecord> {
        self.courses.iter().find(|r| r.course.id == course_id)
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
