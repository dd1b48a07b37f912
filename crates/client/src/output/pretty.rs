//! Pretty output formatting.

use syllabus_core::calendar::{DayAgenda, Event, EventDetails};
use syllabus_core::catalog::{Course, Coursework};

use crate::client::enrollments::Enrollments;

const RULE_WIDTH: usize = 40;

fn section(title: &str, count: usize) -> String {
    let mut output = format!("{title} ({count})\n");
    output.push_str(&"-".repeat(RULE_WIDTH));
    output
}

/// Format a course for display.
pub fn format_course(course: &Course) -> String {
    let mut output = format!("{} [{}]\n  ID: {}", course.name, course.course_code, course.id);
    if let Some(instructor) = &course.instructor {
        output.push_str(&format!("\n  Instructor: {}", instructor));
    }
    if let Some(term) = &course.term {
        output.push_str(&format!("\n  Term: {} to {}", term.start, term.end));
    }
    output
}

/// Format courses for display.
pub fn format_courses(courses: &[Course]) -> String {
    if courses.is_empty() {
        return "No courses found.".to_string();
    }
    let mut output = section("COURSES", courses.len());
    for course in courses {
        output.push_str(&format!("\n{}", format_course(course)));
        output.push('\n');
    }
    output
}

/// Format a piece of coursework for display.
pub fn format_coursework(item: &Coursework) -> String {
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  Course: {}",
        item.title(),
        item.coursework_type(),
        item.id(),
        item.course_id()
    );
    match item {
        Coursework::Assignment(a) => {
            push_when(&mut output, "Due", a.due_date.as_deref(), a.due_time.as_deref());
            if let Some(points) = a.points_possible {
                output.push_str(&format!("\n  Points: {}", points));
            }
            if let Some(priority) = a.priority {
                output.push_str(&format!("\n  Priority: {}", priority));
            }
        }
        Coursework::Quiz(q) => {
            push_when(
                &mut output,
                "Opens",
                q.available_date.as_deref(),
                q.start_time.as_deref(),
            );
            if let Some(end) = &q.end_time {
                output.push_str(&format!("\n  Ends: {}", end));
            }
            if let Some(location) = &q.location {
                output.push_str(&format!("\n  Location: {}", location));
            }
            if let Some(points) = q.points_possible {
                output.push_str(&format!("\n  Points: {}", points));
            }
            if let Some(limit) = q.time_limit_minutes {
                output.push_str(&format!("\n  Time limit: {} min", limit));
            }
        }
        Coursework::Discussion(d) => {
            push_when(&mut output, "Due", d.due_date.as_deref(), d.due_time.as_deref());
        }
    }
    output
}

fn push_when(output: &mut String, label: &str, date: Option<&str>, time: Option<&str>) {
    match (date, time) {
        (Some(date), Some(time)) => output.push_str(&format!("\n  {label}: {date} {time}")),
        (Some(date), None) => output.push_str(&format!("\n  {label}: {date}")),
        (None, _) => output.push_str(&format!("\n  {label}: (no date)")),
    }
}

/// Format coursework for display.
pub fn format_coursework_list(items: &[Coursework]) -> String {
    if items.is_empty() {
        return "No coursework found.".to_string();
    }
    let mut output = section("COURSEWORK", items.len());
    for item in items {
        output.push_str(&format!("\n{}", format_coursework(item)));
        output.push('\n');
    }
    output
}

/// Format a single event as one line, e.g.
/// `2025-06-12 09:00-09:45 quiz        C1  Quiz 1 @ Room 101`.
pub fn format_event(event: &Event) -> String {
    let time = match (event.start_time, event.end_time) {
        (Some(start), Some(end)) => format!("{}-{}", start.format("%H:%M"), end.format("%H:%M")),
        (Some(start), None) => start.format("%H:%M").to_string(),
        (None, _) => "all day".to_string(),
    };
    let mut output = format!(
        "{} {:<11} {:<11} {}  {}",
        event.start_date,
        time,
        event.event_type().as_str(),
        event.course_id,
        event.title
    );
    if let Some(location) = &event.location {
        output.push_str(&format!(" @ {}", location));
    }
    match &event.details {
        EventDetails::Assignment {
            priority: Some(priority),
            ..
        } => output.push_str(&format!(" ({} priority)", priority)),
        EventDetails::Quiz {
            time_limit_minutes: Some(limit),
            ..
        } => output.push_str(&format!(" ({} min)", limit)),
        _ => {}
    }
    output
}

/// Format events for display.
pub fn format_events(events: &[Event]) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }
    let mut output = section("EVENTS", events.len());
    for event in events {
        output.push('\n');
        output.push_str(&format_event(event));
    }
    output
}

/// Format per-day agendas, skipping empty days.
pub fn format_day_agendas(days: &[DayAgenda]) -> String {
    let busy: Vec<&DayAgenda> = days.iter().filter(|d| !d.events.is_empty()).collect();
    if busy.is_empty() {
        return format!("No events in {} day(s).", days.len());
    }
    let mut output = String::new();
    for day in busy {
        output.push_str(&format!("{}\n", day.date.format("%A, %B %-d, %Y")));
        for event in &day.events {
            output.push_str(&format!("  {}\n", format_event(event)));
        }
    }
    output
}

/// Format a viewer's enrollments for display.
pub fn format_enrollments(enrollments: &Enrollments) -> String {
    if enrollments.unrestricted {
        return format!(
            "{}: no enrollments (all courses visible)",
            enrollments.viewer_id
        );
    }
    let courses: Vec<&str> = enrollments.courses.iter().collect();
    format!("{}: {}", enrollments.viewer_id, courses.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use syllabus_core::catalog::{Assignment, EnrollmentSet, Priority};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn quiz_event() -> Event {
        Event {
            id: "Q1".to_string(),
            course_id: "C1".to_string(),
            title: "Quiz 1".to_string(),
            start_date: date("2025-06-12"),
            start_time: NaiveTime::from_hms_opt(9, 0, 0),
            end_time: NaiveTime::from_hms_opt(9, 45, 0),
            location: Some("Room 101".to_string()),
            details: EventDetails::Quiz {
                points_possible: Some(20),
                time_limit_minutes: Some(45),
            },
        }
    }

    #[test]
    fn test_format_event_line() {
        let line = format_event(&quiz_event());
        assert!(line.starts_with("2025-06-12 09:00-09:45"));
        assert!(line.contains("quiz"));
        assert!(line.contains("C1  Quiz 1 @ Room 101 (45 min)"));
    }

    #[test]
    fn test_format_untimed_event() {
        let mut event = quiz_event();
        event.start_time = None;
        event.end_time = None;
        assert!(format_event(&event).contains("all day"));
    }

    #[test]
    fn test_format_events_empty() {
        assert_eq!(format_events(&[]), "No events found.");
    }

    #[test]
    fn test_format_day_agendas_skips_empty_days() {
        let days = vec![
            DayAgenda::empty(date("2025-06-11")),
            DayAgenda::new(date("2025-06-12"), vec![quiz_event()]),
        ];
        let output = format_day_agendas(&days);
        assert!(output.starts_with("Thursday, June 12, 2025\n"));
        assert!(!output.contains("June 11"));

        assert_eq!(
            format_day_agendas(&[DayAgenda::empty(date("2025-06-11"))]),
            "No events in 1 day(s)."
        );
    }

    #[test]
    fn test_format_assignment_coursework() {
        let item = Coursework::from(
            Assignment::new("A1", "C1", "Essay", "2025-06-10")
                .with_due_time("23:59")
                .with_points(100)
                .with_priority(Priority::High),
        );
        let output = format_coursework(&item);
        assert!(output.starts_with("Essay [assignment]"));
        assert!(output.contains("Due: 2025-06-10 23:59"));
        assert!(output.contains("Priority: high"));
    }

    #[test]
    fn test_format_enrollments() {
        let restricted = Enrollments {
            viewer_id: "v1".to_string(),
            courses: ["C2", "C1"].into_iter().collect::<EnrollmentSet>(),
            unrestricted: false,
        };
        assert_eq!(format_enrollments(&restricted), "v1: C1, C2");

        let open = Enrollments {
            viewer_id: "v2".to_string(),
            courses: EnrollmentSet::new(),
            unrestricted: true,
        };
        assert!(format_enrollments(&open).contains("all courses visible"));
    }
}
