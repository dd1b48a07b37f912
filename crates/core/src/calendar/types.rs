use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::catalog::{CourseworkType, Priority};

/// Type-specific part of an [`Event`], tagged by the collection it was
/// projected from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum EventDetails {
    Assignment {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        points_possible: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        priority: Option<Priority>,
    },
    Quiz {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        points_possible: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        time_limit_minutes: Option<u32>,
    },
    Discussion,
}

impl EventDetails {
    pub fn event_type(&self) -> CourseworkType {
        match self {
            EventDetails::Assignment { .. } => CourseworkType::Assignment,
            EventDetails::Quiz { .. } => CourseworkType::Quiz,
            EventDetails::Discussion => CourseworkType::Discussion,
        }
    }

    pub fn points_possible(&self) -> Option<u32> {
        match self {
            EventDetails::Assignment {
                points_possible, ..
            }
            | EventDetails::Quiz {
                points_possible, ..
            } => *points_possible,
            EventDetails::Discussion => None,
        }
    }

    pub fn priority(&self) -> Option<Priority> {
        match self {
            EventDetails::Assignment { priority, .. } => *priority,
            _ => None,
        }
    }
}

/// A calendar event projected from a piece of coursework.
///
/// Events are never stored; they are rebuilt from the catalog on every query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub start_date: NaiveDate,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "optional_hhmm"
    )]
    pub start_time: Option<NaiveTime>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "optional_hhmm"
    )]
    pub end_time: Option<NaiveTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(flatten)]
    pub details: EventDetails,
}

impl Event {
    pub fn event_type(&self) -> CourseworkType {
        self.details.event_type()
    }

    /// Key that places this event in calendar order: date, then time (untimed
    /// first), then id. Type and course break any remaining ties.
    pub fn sort_key(&self) -> (NaiveDate, Option<NaiveTime>, &str, CourseworkType, &str) {
        (
            self.start_date,
            self.start_time,
            &self.id,
            self.event_type(),
            &self.course_id,
        )
    }

    /// True when the event has a time of day attached.
    pub fn is_timed(&self) -> bool {
        self.start_time.is_some()
    }
}

/// Events falling on a single day of a calendar view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAgenda {
    pub date: NaiveDate,
    pub events: Vec<Event>,
}

impl DayAgenda {
    pub fn new(date: NaiveDate, events: Vec<Event>) -> Self {
        Self { date, events }
    }

    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            events: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}

/// `HH:MM` wire format for optional times.
mod optional_hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::catalog::parse_time;

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_str(&time.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: Option<String> = Option::deserialize(deserializer)?;
        match s {
            Some(s) if !s.trim().is_empty() => parse_time(&s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid time: {s}"))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz_event() -> Event {
        Event {
            id: "Q1".to_string(),
            course_id: "C1".to_string(),
            title: "Quiz 1".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
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
    fn test_event_wire_shape() {
        let json = serde_json::to_value(quiz_event()).unwrap();

        assert_eq!(json["id"], "Q1");
        assert_eq!(json["courseId"], "C1");
        assert_eq!(json["type"], "quiz");
        assert_eq!(json["startDate"], "2025-06-12");
        assert_eq!(json["startTime"], "09:00");
        assert_eq!(json["endTime"], "09:45");
        assert_eq!(json["location"], "Room 101");
        assert_eq!(json["pointsPossible"], 20);
        assert_eq!(json["timeLimitMinutes"], 45);
    }

    #[test]
    fn test_event_omits_absent_optionals() {
        let event = Event {
            id: "D1".to_string(),
            course_id: "C1".to_string(),
            title: "Forum".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 6, 12).unwrap(),
            start_time: None,
            end_time: None,
            location: None,
            details: EventDetails::Discussion,
        };

        let json = serde_json::to_value(&event).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(json["type"], "discussion");
        assert!(!object.contains_key("startTime"));
        assert!(!object.contains_key("location"));
        assert!(!object.contains_key("pointsPossible"));
    }

    #[test]
    fn test_event_deserializes_from_wire_shape() {
        let json = r#"{
            "id": "A1",
            "courseId": "C1",
            "type": "assignment",
            "title": "Essay",
            "startDate": "2025-06-10",
            "startTime": "23:59",
            "pointsPossible": 100,
            "priority": "high"
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.event_type(), CourseworkType::Assignment);
        assert_eq!(event.start_time, NaiveTime::from_hms_opt(23, 59, 0));
        assert_eq!(event.details.points_possible(), Some(100));
        assert_eq!(event.details.priority(), Some(Priority::High));
    }

    #[test]
    fn test_sort_key_puts_untimed_first() {
        let timed = quiz_event();
        let mut untimed = quiz_event();
        untimed.id = "Z9".to_string();
        untimed.start_time = None;

        assert!(untimed.sort_key() < timed.sort_key());
        assert!(!untimed.is_timed());
    }

    #[test]
    fn test_day_agenda() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 12).unwrap();
        let empty = DayAgenda::empty(date);
        assert!(empty.is_empty());
        assert_eq!(empty.event_count(), 0);

        let day = DayAgenda::new(date, vec![quiz_event()]);
        assert!(!day.is_empty());
        assert_eq!(day.event_count(), 1);
    }
}
