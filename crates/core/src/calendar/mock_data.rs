//! Demo catalog generation for development and seeding.
//!
//! Pure functions with no side effects; usable from unit tests, the server's
//! demo mode and anything else that needs a believable catalog.

use chrono::{Duration, NaiveDate};

use crate::catalog::{Assignment, Catalog, Course, CourseRecord, Discussion, Priority, Quiz};

const DEMO_COURSES: [(&str, &str, &str, &str); 4] = [
    ("C1", "Introduction to Programming", "CS-101", "Dr. Hopper"),
    ("C2", "Linear Algebra", "MATH-210", "Prof. Noether"),
    ("C3", "Technical Writing", "ENG-205", "Dr. Strunk"),
    ("C4", "Data Structures", "CS-201", "Prof. Knuth"),
];

const PRIORITIES: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

/// Generates a demo catalog spanning `weeks` weeks centered on `center_date`.
///
/// Every course gets one assignment and one discussion per week and a quiz
/// every other week. Ids are deterministic (`C1-A3`, `C2-Q1`, ...).
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use syllabus_core::calendar::generate_seed_catalog;
///
/// let center = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// let catalog = generate_seed_catalog(center, 4);
///
/// assert_eq!(catalog.courses.len(), 4);
/// assert_eq!(catalog.courses[0].assignments.len(), 4);
/// ```
pub fn generate_seed_catalog(center_date: NaiveDate, weeks: u32) -> Catalog {
    let first_week = center_date - Duration::weeks(i64::from(weeks / 2));
    let term_end = first_week + Duration::weeks(i64::from(weeks.max(1))) - Duration::days(1);

    let courses = DEMO_COURSES
        .iter()
        .enumerate()
        .map(|(course_idx, (id, name, code, instructor))| {
            let course = Course::new(*id, *name, *code)
                .with_instructor(*instructor)
                .with_term(first_week, term_end);
            let mut record = CourseRecord::new(course);

            for week in 0..weeks {
                let week_start = first_week + Duration::weeks(i64::from(week));
                let number = week + 1;
                let offset = course_idx as i64;

                record.assignments.push(
                    Assignment::new(
                        format!("{id}-A{number}"),
                        *id,
                        format!("Homework {number}"),
                        iso(week_start + Duration::days(offset + 1)),
                    )
                    .with_due_time("23:59")
                    .with_points(100)
                    .with_priority(PRIORITIES[(week as usize + course_idx) % PRIORITIES.len()]),
                );

                record.discussions.push(Discussion::new(
                    format!("{id}-D{number}"),
                    *id,
                    format!("Week {number} discussion"),
                    iso(week_start + Duration::days((offset + 3) % 7)),
                ));

                if week % 2 == 0 {
                    let quiz_number = week / 2 + 1;
                    record.quizzes.push(
                        Quiz::new(
                            format!("{id}-Q{quiz_number}"),
                            *id,
                            format!("Quiz {quiz_number}"),
                            iso(week_start + Duration::days(4)),
                        )
                        .with_times("10:00", "10:45")
                        .with_location(format!("Room {}", 101 + course_idx))
                        .with_points(20)
                        .with_time_limit(45),
                    );
                }
            }

            record
        })
        .collect();

    Catalog::new(courses)
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::get_events;
    use crate::catalog::{validate_course, validate_coursework, Coursework};

    fn center() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_generate_seed_catalog_counts() {
        let catalog = generate_seed_catalog(center(), 6);

        assert_eq!(catalog.courses.len(), 4);
        for record in &catalog.courses {
            assert_eq!(record.assignments.len(), 6);
            assert_eq!(record.discussions.len(), 6);
            assert_eq!(record.quizzes.len(), 3);
        }
    }

    #[test]
    fn test_generate_seed_catalog_is_valid() {
        let catalog = generate_seed_catalog(center(), 4);

        for record in catalog.courses.clone() {
            assert!(validate_course(&record.course).is_ok());
            let (_, items) = record.into_parts();
            for item in &items {
                assert!(validate_coursework(item).is_ok(), "invalid: {item:?}");
            }
        }
    }

    #[test]
    fn test_generate_seed_catalog_projects_every_record() {
        let catalog = generate_seed_catalog(center(), 4);
        let total: usize = catalog.courses.iter().map(|r| r.coursework_count()).sum();

        let events = get_events(NaiveDate::MIN, NaiveDate::MAX, None, &catalog);

        assert_eq!(events.len(), total);
    }

    #[test]
    fn test_generate_seed_catalog_ids_are_deterministic() {
        let a = generate_seed_catalog(center(), 2);
        let b = generate_seed_catalog(center(), 2);
        assert_eq!(a, b);

        let (_, items) = a.courses[1].clone().into_parts();
        assert!(items.iter().any(|item| matches!(item, Coursework::Quiz(q) if q.id == "C2-Q1")));
    }

    #[test]
    fn test_generate_seed_catalog_zero_weeks() {
        let catalog = generate_seed_catalog(center(), 0);

        assert_eq!(catalog.courses.len(), 4);
        assert!(catalog.courses.iter().all(|r| r.coursework_count() == 0));
    }
}
