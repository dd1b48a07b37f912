//! Aggregated event queries.

use chrono::NaiveDate;
use syllabus_core::calendar::{DayAgenda, Event};

use super::{join_courses, SyllabusClient};
use crate::error::Result;

/// Query for a window of events. Absent bounds fall back to the server's
/// current month.
#[derive(Debug, Default, serde::Serialize)]
pub struct ListEventsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<String>,
}

impl ListEventsQuery {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>, courses: &[String]) -> Self {
        Self {
            start,
            end,
            courses: join_courses(courses),
        }
    }
}

/// Query for the upcoming events feed.
#[derive(Debug, Default, serde::Serialize)]
pub struct UpcomingQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<String>,
}

impl UpcomingQuery {
    pub fn new(days: Option<u64>, limit: Option<usize>, courses: &[String]) -> Self {
        Self {
            days,
            limit,
            courses: join_courses(courses),
        }
    }
}

impl SyllabusClient {
    /// List events in a window.
    pub async fn list_events(&self, query: &ListEventsQuery) -> Result<Vec<Event>> {
        let path = "/api/events";
        let response = self.client.get(self.url(path)).query(query).send().await?;
        self.handle_response(path, response).await
    }

    /// List events grouped into one agenda per day.
    pub async fn list_event_days(&self, query: &ListEventsQuery) -> Result<Vec<DayAgenda>> {
        let path = "/api/events/days";
        let response = self.client.get(self.url(path)).query(query).send().await?;
        self.handle_response(path, response).await
    }

    /// List the next few days of events.
    pub async fn upcoming_events(&self, query: &UpcomingQuery) -> Result<Vec<Event>> {
        let path = "/api/events/upcoming";
        let response = self.client.get(self.url(path)).query(query).send().await?;
        self.handle_response(path, response).await
    }

    /// List events restricted to a viewer's enrollments.
    pub async fn list_viewer_events(
        &self,
        viewer_id: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<Event>> {
        let path = format!("/api/viewers/{viewer_id}/events");
        let query = ListEventsQuery::new(start, end, &[]);
        let response = self
            .client
            .get(self.url(&path))
            .query(&query)
            .send()
            .await?;
        self.handle_response(&path, response).await
    }
}
