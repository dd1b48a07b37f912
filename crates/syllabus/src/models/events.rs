use chrono::NaiveDate;
use serde::Deserialize;

use syllabus_core::catalog::EnrollmentSet;
use syllabus_core::serde::{
    deserialize_comma_separated, deserialize_optional_date, deserialize_optional_parsed,
};
use syllabus_core::storage::DateRange;

/// Query parameters for the aggregated event endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    /// First day of the window (ISO 8601: YYYY-MM-DD)
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub start: Option<NaiveDate>,
    /// Last day of the window, inclusive
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub end: Option<NaiveDate>,
    /// Comma-separated course ids; absent or blank means every course
    #[serde(default, deserialize_with = "deserialize_comma_separated")]
    pub courses: Option<Vec<String>>,
}

impl EventsQuery {
    pub fn enrollment(&self) -> EnrollmentSet {
        self.courses.iter().flatten().cloned().collect()
    }
}

/// Date window of the per-viewer events endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub start: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub end: Option<NaiveDate>,
}

/// Query parameters for the upcoming events feed.
#[derive(Debug, Default, Deserialize)]
pub struct UpcomingQuery {
    /// Days ahead of today to include (default from configuration)
    #[serde(default, deserialize_with = "deserialize_optional_parsed")]
    pub days: Option<u64>,
    /// Maximum number of events returned
    #[serde(default, deserialize_with = "deserialize_optional_parsed")]
    pub limit: Option<usize>,
    #[serde(default, deserialize_with = "deserialize_comma_separated")]
    pub courses: Option<Vec<String>>,
}

impl UpcomingQuery {
    pub fn enrollment(&self) -> EnrollmentSet {
        self.courses.iter().flatten().cloned().collect()
    }
}

/// Fills in a missing window bound.
///
/// A missing start becomes the first day of the end's month, a missing end
/// the last day of the start's month, and with neither the current month is
/// used. The result is not checked for inversion.
pub fn resolve_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> (NaiveDate, NaiveDate) {
    match (start, end) {
        (Some(start), Some(end)) => (start, end),
        (Some(start), None) => (start, DateRange::month_of(start).end),
        (None, Some(end)) => (DateRange::month_of(end).start, end),
        (None, None) => {
            let month = DateRange::month_of(today);
            (month.start, month.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_resolve_range_defaults_to_current_month() {
        let today = date(2025, 2, 14);
        assert_eq!(
            resolve_range(None, None, today),
            (date(2025, 2, 1), date(2025, 2, 28))
        );
    }

    #[test]
    fn test_resolve_range_fills_single_bound() {
        let today = date(2025, 2, 14);

        assert_eq!(
            resolve_range(Some(date(2025, 6, 10)), None, today),
            (date(2025, 6, 10), date(2025, 6, 30))
        );
        assert_eq!(
            resolve_range(None, Some(date(2025, 6, 10)), today),
            (date(2025, 6, 1), date(2025, 6, 10))
        );
    }

    #[test]
    fn test_resolve_range_keeps_inverted_bounds() {
        let today = date(2025, 2, 14);
        let (start, end) = resolve_range(Some(date(2025, 6, 30)), Some(date(2025, 6, 1)), today);
        assert!(start > end);
    }

    #[test]
    fn test_enrollment_from_courses_param() {
        let query = EventsQuery {
            courses: Some(vec!["C1".to_string(), "C2".to_string()]),
            ..EventsQuery::default()
        };
        let set = query.enrollment();
        assert!(set.contains("C1") && set.contains("C2"));

        assert!(EventsQuery::default().enrollment().is_unrestricted());
    }
}
