use chrono::{Datelike, NaiveDate};

use super::DateRangeError;

/// A calendar window with inclusive start and end dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    /// Creates a date range covering an entire month.
    pub fn month(year: i32, month: u32) -> Result<Self, DateRangeError> {
        let invalid = || DateRangeError::InvalidMonth { year, month };

        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let end = next_month
            .and_then(|d| d.pred_opt())
            .ok_or_else(invalid)?;

        Ok(Self { start, end })
    }

    /// The month containing `date`.
    pub fn month_of(date: NaiveDate) -> Self {
        let start = date.with_day(1).unwrap_or(date);
        let end = Self::month(date.year(), date.month())
            .map(|range| range.end)
            .unwrap_or(date);
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days in the range, counting both ends.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Every date in the range, in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.start.iter_days().take_while(|d| *d <= self.end).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_valid_range_construction() {
        let range = DateRange::new(date(2025, 6, 1), date(2025, 6, 30)).unwrap();

        assert_eq!(range.start, date(2025, 6, 1));
        assert_eq!(range.end, date(2025, 6, 30));
        assert_eq!(range.num_days(), 30);
    }

    #[test]
    fn test_same_day_range_is_valid() {
        let day = date(2025, 6, 10);

        let range = DateRange::new(day, day).unwrap();
        assert_eq!(range.num_days(), 1);
        assert_eq!(range.dates(), vec![day]);
    }

    #[test]
    fn test_invalid_range_returns_error() {
        let result = DateRange::new(date(2025, 6, 30), date(2025, 6, 1));
        assert_eq!(result, Err(DateRangeError::InvalidRange));
    }

    #[test]
    fn test_month_factory() {
        let june = DateRange::month(2025, 6).unwrap();
        assert_eq!(june.start, date(2025, 6, 1));
        assert_eq!(june.end, date(2025, 6, 30));

        let leap = DateRange::month(2024, 2).unwrap();
        assert_eq!(leap.end, date(2024, 2, 29));

        let december = DateRange::month(2025, 12).unwrap();
        assert_eq!(december.end, date(2025, 12, 31));
    }

    #[test]
    fn test_month_factory_rejects_invalid_month() {
        assert_eq!(
            DateRange::month(2025, 13),
            Err(DateRangeError::InvalidMonth {
                year: 2025,
                month: 13
            })
        );
        assert!(DateRange::month(2025, 0).is_err());
    }

    #[test]
    fn test_month_of() {
        let range = DateRange::month_of(date(2025, 2, 14));
        assert_eq!(range, DateRange::month(2025, 2).unwrap());
    }

    #[test]
    fn test_contains_and_dates() {
        let range = DateRange::new(date(2025, 6, 29), date(2025, 7, 2)).unwrap();

        assert!(range.contains(date(2025, 6, 29)));
        assert!(range.contains(date(2025, 7, 2)));
        assert!(!range.contains(date(2025, 7, 3)));
        assert_eq!(
            range.dates(),
            vec![
                date(2025, 6, 29),
                date(2025, 6, 30),
                date(2025, 7, 1),
                date(2025, 7, 2)
            ]
        );
    }
}
