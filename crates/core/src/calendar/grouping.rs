use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};

use crate::storage::DateRange;

use super::aggregate::sort_events;
use super::types::{DayAgenda, Event};

/// Groups events by their start date.
pub fn group_events_by_date(events: &[Event]) -> BTreeMap<NaiveDate, Vec<&Event>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();

    for event in events {
        grouped.entry(event.start_date).or_default().push(event);
    }

    grouped
}

/// Returns the dates for the week containing the given date (Monday to Sunday).
///
/// At the edges of the representable calendar only the days that exist are
/// returned.
pub fn get_week_dates(date: NaiveDate) -> Vec<NaiveDate> {
    let weekday = u64::from(date.weekday().num_days_from_monday());

    (0..7u64)
        .filter_map(|offset| {
            if offset < weekday {
                date.checked_sub_days(Days::new(weekday - offset))
            } else {
                date.checked_add_days(Days::new(offset - weekday))
            }
        })
        .collect()
}

/// Returns every date of a month, or an empty list for an invalid month.
pub fn get_month_dates(year: i32, month: u32) -> Vec<NaiveDate> {
    DateRange::month(year, month)
        .map(|range| range.dates())
        .unwrap_or_default()
}

/// Builds one agenda per requested date. Days without events are kept, and
/// events on dates that were not requested are dropped.
pub fn build_day_agendas(dates: &[NaiveDate], events: Vec<Event>) -> Vec<DayAgenda> {
    let mut by_date: BTreeMap<NaiveDate, Vec<Event>> = BTreeMap::new();
    for event in events {
        by_date.entry(event.start_date).or_default().push(event);
    }

    dates
        .iter()
        .map(|date| {
            let mut day_events = by_date.get(date).cloned().unwrap_or_default();
            sort_events(&mut day_events);
            DayAgenda::new(*date, day_events)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::types::EventDetails;
    use chrono::NaiveTime;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn event(id: &str, date: NaiveDate, time: Option<(u32, u32)>) -> Event {
        Event {
            id: id.to_string(),
            course_id: "C1".to_string(),
            title: format!("Event {id}"),
            start_date: date,
            start_time: time.and_then(|(h, m)| NaiveTime::from_hms_opt(h, m, 0)),
            end_time: None,
            location: None,
            details: EventDetails::Discussion,
        }
    }

    #[test]
    fn test_group_events_by_date() {
        let day1 = make_date(2025, 6, 10);
        let day2 = make_date(2025, 6, 11);
        let events = vec![
            event("E1", day1, None),
            event("E2", day1, None),
            event("E3", day2, None),
        ];

        let grouped = group_events_by_date(&events);

        assert_eq!(grouped.get(&day1).unwrap().len(), 2);
        assert_eq!(grouped.get(&day2).unwrap().len(), 1);
        assert_eq!(grouped.keys().next(), Some(&day1));
    }

    #[test]
    fn test_get_week_dates() {
        let date = make_date(2025, 6, 11); // Wednesday
        let week = get_week_dates(date);

        assert_eq!(week.len(), 7);
        assert_eq!(week[0], make_date(2025, 6, 9)); // Monday
        assert_eq!(week[6], make_date(2025, 6, 15)); // Sunday
    }

    #[test]
    fn test_get_week_dates_across_month_boundary() {
        let week = get_week_dates(make_date(2025, 7, 1)); // Tuesday

        assert_eq!(week[0], make_date(2025, 6, 30));
        assert_eq!(week[6], make_date(2025, 7, 6));
    }

    #[test]
    fn test_get_week_dates_at_calendar_edges() {
        let first = get_week_dates(NaiveDate::MIN);
        assert_eq!(first[0], NaiveDate::MIN);
        assert!(first.len() <= 7);
        assert!(first.windows(2).all(|w| w[0] < w[1]));

        let last = get_week_dates(NaiveDate::MAX);
        assert_eq!(last.last(), Some(&NaiveDate::MAX));
        assert!(last.len() <= 7);
    }

    #[test]
    fn test_get_month_dates() {
        let february = get_month_dates(2024, 2);

        assert_eq!(february.len(), 29);
        assert_eq!(february[0], make_date(2024, 2, 1));
        assert_eq!(february[28], make_date(2024, 2, 29));
        assert!(get_month_dates(2024, 13).is_empty());
    }

    #[test]
    fn test_build_day_agendas() {
        let day1 = make_date(2025, 6, 10);
        let day2 = make_date(2025, 6, 11);
        let outside = make_date(2025, 6, 20);

        let events = vec![
            event("E2", day1, Some((14, 0))),
            event("E1", day1, None),
            event("E3", outside, None),
        ];

        let agendas = build_day_agendas(&[day1, day2], events);

        assert_eq!(agendas.len(), 2);
        assert_eq!(agendas[0].date, day1);
        assert_eq!(agendas[0].events[0].id, "E1"); // untimed first
        assert_eq!(agendas[0].events[1].id, "E2");
        assert!(agendas[1].is_empty());
    }
}
