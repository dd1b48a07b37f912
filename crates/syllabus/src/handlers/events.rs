//! Aggregated calendar event handlers.
//!
//! Each handler loads a catalog snapshot through the repositories and hands
//! it to the pure aggregator. An inverted window answers `200 []`.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;

use syllabus_core::calendar::{build_day_agendas, get_events, upcoming_events, DayAgenda, Event};
use syllabus_core::catalog::EnrollmentSet;
use syllabus_core::storage::DateRange;

use crate::{
    handlers::{error::error_response, AppError},
    models::{resolve_range, EventsQuery, RangeQuery, UpcomingQuery},
    state::AppState,
};

/// Widest window `/api/events/days` will expand into per-day agendas.
const MAX_AGENDA_DAYS: i64 = 366;

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn query_error(rejection: QueryRejection) -> Response {
    error_response(
        StatusCode::BAD_REQUEST,
        format!("Invalid query: {rejection}"),
    )
    .into_response()
}

async fn events_for(
    state: &AppState,
    start: NaiveDate,
    end: NaiveDate,
    enrolled: &EnrollmentSet,
) -> Result<Vec<Event>, AppError> {
    if start > end {
        tracing::debug!(%start, %end, "Inverted event window");
        return Ok(Vec::new());
    }

    let catalog = state.load_catalog(enrolled).await?;
    let events = get_events(start, end, Some(enrolled), &catalog);

    tracing::debug!(%start, %end, count = events.len(), "Aggregated events");
    Ok(events)
}

/// List events in a window (GET /api/events?start&end&courses).
pub async fn list_events(
    State(state): State<AppState>,
    query: Result<Query<EventsQuery>, QueryRejection>,
) -> Result<Json<Vec<Event>>, Response> {
    let Query(query) = query.map_err(query_error)?;
    let (start, end) = resolve_range(query.start, query.end, today());

    events_for(&state, start, end, &query.enrollment())
        .await
        .map(Json)
        .map_err(IntoResponse::into_response)
}

/// List events grouped into one agenda per day (GET /api/events/days).
pub async fn list_event_days(
    State(state): State<AppState>,
    query: Result<Query<EventsQuery>, QueryRejection>,
) -> Result<Json<Vec<DayAgenda>>, Response> {
    let Query(query) = query.map_err(query_error)?;
    let (start, end) = resolve_range(query.start, query.end, today());

    let Ok(range) = DateRange::new(start, end) else {
        return Ok(Json(Vec::new()));
    };
    if range.num_days() > MAX_AGENDA_DAYS {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            format!("Window too wide: at most {MAX_AGENDA_DAYS} days"),
        )
        .into_response());
    }

    let events = events_for(&state, range.start, range.end, &query.enrollment())
        .await
        .map_err(IntoResponse::into_response)?;

    Ok(Json(build_day_agendas(&range.dates(), events)))
}

/// Dashboard feed of the next few days (GET /api/events/upcoming).
pub async fn list_upcoming_events(
    State(state): State<AppState>,
    query: Result<Query<UpcomingQuery>, QueryRejection>,
) -> Result<Json<Vec<Event>>, Response> {
    let Query(query) = query.map_err(query_error)?;
    let days = query.days.unwrap_or(state.upcoming_default_days);
    let enrolled = query.enrollment();

    let catalog = state
        .load_catalog(&enrolled)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    Ok(Json(upcoming_events(
        today(),
        days,
        query.limit,
        Some(&enrolled),
        &catalog,
    )))
}

/// List events for a viewer's enrollments (GET /api/viewers/{viewer}/events).
pub async fn list_viewer_events(
    State(state): State<AppState>,
    Path(viewer_id): Path<String>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> Result<Json<Vec<Event>>, Response> {
    let Query(query) = query.map_err(query_error)?;
    let (start, end) = resolve_range(query.start, query.end, today());

    let enrolled = state
        .enrollment_repo
        .get_enrollments(&viewer_id)
        .await
        .map_err(|e| AppError::from(e).into_response())?;

    tracing::debug!(
        %viewer_id,
        enrolled = enrolled.len(),
        "Resolved viewer enrollments"
    );

    events_for(&state, start, end, &enrolled)
        .await
        .map(Json)
        .map_err(IntoResponse::into_response)
}
