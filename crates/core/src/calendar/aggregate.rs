//! Projection of a catalog snapshot into calendar events.
//!
//! This is part of the Functional Core - every function here is pure. Bad
//! source records are dropped one at a time so a single broken assignment
//! never empties a whole calendar view.

use std::collections::HashSet;

use chrono::{Days, NaiveDate};

use crate::catalog::{
    parse_date, parse_optional_time, Assignment, Catalog, CourseRecord, CourseworkType,
    Discussion, EnrollmentSet, Quiz,
};
use crate::storage::DateRange;

use super::types::{Event, EventDetails};

/// Returns the events visible to a viewer inside `[range_start, range_end]`.
///
/// - An inverted range yields an empty list.
/// - `enrolled` of `None` or an empty set means every course is visible.
/// - Records with a missing or unreadable date, an unreadable time, or a
///   blank id are skipped.
/// - Duplicate `(type, course, id)` triples keep their first occurrence.
///
/// The result is sorted by date, then time (untimed first), then id.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use syllabus_core::calendar::get_events;
/// use syllabus_core::catalog::{Assignment, Catalog, Course, CourseRecord, EnrollmentSet};
///
/// let mut record = CourseRecord::new(Course::new("C1", "Intro", "CS-101"));
/// record.assignments.push(Assignment::new("A1", "C1", "Essay", "2025-06-10"));
/// let catalog = Catalog::new(vec![record]);
/// let enrolled: EnrollmentSet = ["C1"].into_iter().collect();
///
/// let day = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
/// let events = get_events(day, day, Some(&enrolled), &catalog);
///
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].course_id, "C1");
/// ```
pub fn get_events(
    range_start: NaiveDate,
    range_end: NaiveDate,
    enrolled: Option<&EnrollmentSet>,
    catalog: &Catalog,
) -> Vec<Event> {
    if range_start > range_end {
        return Vec::new();
    }

    let mut seen: HashSet<(CourseworkType, String, String)> = HashSet::new();

    let mut events: Vec<Event> = catalog
        .courses
        .iter()
        .filter(|record| enrolled.is_none_or(|set| set.allows(&record.course.id)))
        .flat_map(project_course)
        .filter(|event| event.start_date >= range_start && event.start_date <= range_end)
        .filter(|event| {
            seen.insert((
                event.event_type(),
                event.course_id.clone(),
                event.id.clone(),
            ))
        })
        .collect();

    sort_events(&mut events);
    events
}

/// [`get_events`] over an already validated range.
pub fn get_events_in(
    range: DateRange,
    enrolled: Option<&EnrollmentSet>,
    catalog: &Catalog,
) -> Vec<Event> {
    get_events(range.start, range.end, enrolled, catalog)
}

/// Events from `today` through `days` days ahead, capped at `limit` when given.
pub fn upcoming_events(
    today: NaiveDate,
    days: u64,
    limit: Option<usize>,
    enrolled: Option<&EnrollmentSet>,
    catalog: &Catalog,
) -> Vec<Event> {
    let end = today.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX);
    let mut events = get_events(today, end, enrolled, catalog);
    if let Some(limit) = limit {
        events.truncate(limit);
    }
    events
}

/// Sorts events into calendar order (see [`Event::sort_key`]).
pub fn sort_events(events: &mut [Event]) {
    events.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

/// Projects every dated piece of coursework of one course into events.
///
/// Events carry the owning course's id; the `course_id` stored on each item
/// is not consulted.
pub fn project_course(record: &CourseRecord) -> Vec<Event> {
    let course_id = record.course.id.as_str();

    let assignments = record
        .assignments
        .iter()
        .filter_map(|a| project_assignment(course_id, a));
    let quizzes = record
        .quizzes
        .iter()
        .filter_map(|q| project_quiz(course_id, q));
    let discussions = record
        .discussions
        .iter()
        .filter_map(|d| project_discussion(course_id, d));

    assignments.chain(quizzes).chain(discussions).collect()
}

fn project_assignment(course_id: &str, assignment: &Assignment) -> Option<Event> {
    let start_date = event_date(&assignment.id, assignment.due_date.as_deref())?;
    let start_time = parse_optional_time(assignment.due_time.as_deref()).ok()?;

    Some(Event {
        id: assignment.id.clone(),
        course_id: course_id.to_string(),
        title: assignment.title.clone(),
        start_date,
        start_time,
        end_time: None,
        location: None,
        details: EventDetails::Assignment {
            points_possible: assignment.points_possible,
            priority: assignment.priority,
        },
    })
}

fn project_quiz(course_id: &str, quiz: &Quiz) -> Option<Event> {
    let start_date = event_date(&quiz.id, quiz.available_date.as_deref())?;
    let start_time = parse_optional_time(quiz.start_time.as_deref()).ok()?;
    let end_time = parse_optional_time(quiz.end_time.as_deref()).ok()?;

    Some(Event {
        id: quiz.id.clone(),
        course_id: course_id.to_string(),
        title: quiz.title.clone(),
        start_date,
        start_time,
        end_time,
        location: quiz.location.clone().filter(|l| !l.trim().is_empty()),
        details: EventDetails::Quiz {
            points_possible: quiz.points_possible,
            time_limit_minutes: quiz.time_limit_minutes,
        },
    })
}

fn project_discussion(course_id: &str, discussion: &Discussion) -> Option<Event> {
    let start_date = event_date(&discussion.id, discussion.due_date.as_deref())?;
    let start_time = parse_optional_time(discussion.due_time.as_deref()).ok()?;

    Some(Event {
        id: discussion.id.clone(),
        course_id: course_id.to_string(),
        title: discussion.title.clone(),
        start_date,
        start_time,
        end_time: None,
        location: None,
        details: EventDetails::Discussion,
    })
}

/// Date that places a record on the calendar, or None if the record is unusable.
fn event_date(id: &str, raw_date: Option<&str>) -> Option<NaiveDate> {
    if id.trim().is_empty() {
        return None;
    }
    raw_date.and_then(parse_date)
}
