//! Lenient parsing of the date and time strings stored on catalog records.

use chrono::{NaiveDate, NaiveTime};

/// Parses an ISO `YYYY-MM-DD` date, ignoring surrounding whitespace.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parses `HH:MM` or `HH:MM:SS`, ignoring surrounding whitespace.
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

/// Parses an optional time field.
///
/// `Ok(None)` when the field is absent or blank, `Err(())` when it is present
/// but unreadable.
pub(crate) fn parse_optional_time(s: Option<&str>) -> Result<Option<NaiveTime>, ()> {
    match s.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_time(s).map(Some).ok_or(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-06-10"),
            NaiveDate::from_ymd_opt(2025, 6, 10)
        );
        assert_eq!(
            parse_date(" 2025-06-10 "),
            NaiveDate::from_ymd_opt(2025, 6, 10)
        );
        assert_eq!(parse_date("2025-02-30"), None);
        assert_eq!(parse_date("06/10/2025"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("09:00"), NaiveTime::from_hms_opt(9, 0, 0));
        assert_eq!(parse_time("23:59:30"), NaiveTime::from_hms_opt(23, 59, 30));
        assert_eq!(parse_time("25:00"), None);
        assert_eq!(parse_time("noon"), None);
    }

    #[test]
    fn test_parse_optional_time() {
        assert_eq!(parse_optional_time(None), Ok(None));
        assert_eq!(parse_optional_time(Some("  ")), Ok(None));
        assert_eq!(
            parse_optional_time(Some("13:15")),
            Ok(NaiveTime::from_hms_opt(13, 15, 0))
        );
        assert_eq!(parse_optional_time(Some("1pm")), Err(()));
    }
}
