use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        courses::{create_course, delete_course, get_course, list_courses, update_course},
        coursework::{
            create_coursework, delete_coursework, get_coursework, list_coursework,
            update_coursework,
        },
        enrollments::{enroll, get_enrollments, set_enrollments, unenroll},
        events::{list_event_days, list_events, list_upcoming_events, list_viewer_events},
        health::{healthz, livez},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let request_timeout = state.request_timeout;

    // API routes with CORS
    let api_routes = Router::new()
        // Course routes
        .route("/courses", get(list_courses).post(create_course))
        .route(
            "/courses/{id}",
            get(get_course).put(update_course).delete(delete_course),
        )
        .route(
            "/courses/{id}/coursework",
            get(list_coursework).post(create_coursework),
        )
        // Coursework routes
        .route(
            "/coursework/{id}",
            get(get_coursework)
                .put(update_coursework)
                .delete(delete_coursework),
        )
        // Event routes
        .route("/events", get(list_events))
        .route("/events/days", get(list_event_days))
        .route("/events/upcoming", get(list_upcoming_events))
        // Viewer routes
        .route(
            "/viewers/{viewer}/enrollments",
            get(get_enrollments).put(set_enrollments),
        )
        .route(
            "/viewers/{viewer}/enrollments/{course}",
            post(enroll).delete(unenroll),
        )
        .route("/viewers/{viewer}/events", get(list_viewer_events))
        .layer(cors);

    // Main application router
    Router::new()
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    const FORM: &str = "application/x-www-form-urlencoded";

    async fn send(app: &Router, method: &str, uri: &str, form: Option<&str>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match form {
            Some(body) => builder
                .header("Content-Type", FORM)
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        app.clone().oneshot(request).await.unwrap()
    }

    async fn json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    /// App with C1 (A1 due 2025-06-10, Q1 on 2025-06-12 09:00, D1 on 2025-06-12)
    /// and C2 (A9 due 2025-06-01).
    async fn seeded_app() -> Router {
        let app = create_app(AppState::default());

        for form in [
            "id=C1&name=Intro+to+Programming&course_code=CS-101",
            "id=C2&name=Linear+Algebra&course_code=MATH-210",
        ] {
            let response = send(&app, "POST", "/api/courses", Some(form)).await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        for (course, form) in [
            ("C1", "kind=assignment&id=A1&title=Essay&date=2025-06-10"),
            ("C1", "kind=quiz&id=Q1&title=Quiz+1&date=2025-06-12&time=09:00"),
            ("C1", "kind=discussion&id=D1&title=Forum&date=2025-06-12"),
            ("C2", "kind=assignment&id=A9&title=Problem+set&date=2025-06-01"),
        ] {
            let uri = format!("/api/courses/{course}/coursework");
            let response = send(&app, "POST", &uri, Some(form)).await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }

        app
    }

    fn ids(events: &serde_json::Value) -> Vec<&str> {
        events
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["id"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_livez() {
        let app = create_app(AppState::default());
        let response = send(&app, "GET", "/livez", None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_healthz_counts_courses() {
        let app = seeded_app().await;

        let response = send(&app, "GET", "/healthz", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["courses"], 2);
    }

    #[tokio::test]
    async fn test_list_courses_empty() {
        let app = create_app(AppState::default());

        let response = send(&app, "GET", "/api/courses", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(json(response).await.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_course_validation_errors() {
        let app = create_app(AppState::default());

        let response = send(&app, "POST", "/api/courses", Some("id=C1&name=+&course_code=X")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(&app, "POST", "/api/courses", Some("id=C1")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(
            &app,
            "POST",
            "/api/courses",
            Some("id=C1&name=Intro&course_code=X&term_start=2025-05-01&term_end=2025-01-01"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_duplicate_course_conflicts() {
        let app = seeded_app().await;

        let response = send(
            &app,
            "POST",
            "/api/courses",
            Some("id=C1&name=Again&course_code=CS-101"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_get_update_and_delete_course() {
        let app = seeded_app().await;

        let response = send(&app, "PUT", "/api/courses/C1", Some("instructor=Dr.+Ada")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json(response).await["instructor"], "Dr. Ada");

        let response = send(&app, "GET", "/api/courses/C1", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json(response).await["name"], "Intro to Programming");

        let response = send(&app, "DELETE", "/api/courses/C1", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, "GET", "/api/courses/C1", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        // Coursework went with the course
        let response = send(&app, "GET", "/api/coursework/A1", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_coursework_crud() {
        let app = seeded_app().await;

        let response = send(&app, "GET", "/api/courses/C1/coursework", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json(response).await.as_array().unwrap().len(), 3);

        let response = send(&app, "GET", "/api/coursework/Q1", None).await;
        let quiz = json(response).await;
        assert_eq!(quiz["kind"], "quiz");
        assert_eq!(quiz["start_time"], "09:00");

        let response = send(
            &app,
            "PUT",
            "/api/coursework/A1",
            Some("kind=assignment&title=Final+essay&date=2025-06-11&priority=high"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated = json(response).await;
        assert_eq!(updated["id"], "A1");
        assert_eq!(updated["course_id"], "C1");
        assert_eq!(updated["priority"], "high");

        let response = send(&app, "DELETE", "/api/coursework/A1", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, "DELETE", "/api/coursework/A1", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_coursework_validation_errors() {
        let app = seeded_app().await;

        let cases = [
            "kind=assignment&title=No+date",
            "kind=assignment&title=Bad+date&date=June+5th",
            "kind=discussion&title=Bad+time&date=2025-06-10&time=9am",
            "kind=quiz&title=Backwards&date=2025-06-10&time=11:00&end_time=10:00",
            "kind=essay&title=Unknown+kind&date=2025-06-10",
        ];
        for form in cases {
            let response = send(&app, "POST", "/api/courses/C1/coursework", Some(form)).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "form: {form}");
        }
    }

    #[tokio::test]
    async fn test_coursework_for_unknown_course() {
        let app = seeded_app().await;

        let response = send(
            &app,
            "POST",
            "/api/courses/C9/coursework",
            Some("kind=assignment&title=Essay&date=2025-06-10"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = send(&app, "GET", "/api/courses/C9/coursework", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_events_window_and_ordering() {
        let app = seeded_app().await;

        let response = send(&app, "GET", "/api/events?start=2025-06-01&end=2025-06-30", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let events = json(response).await;
        assert_eq!(ids(&events), vec!["A9", "A1", "D1", "Q1"]);
        assert_eq!(events[3]["type"], "quiz");
        assert_eq!(events[3]["startTime"], "09:00");
        assert_eq!(events[0]["courseId"], "C2");
    }

    #[tokio::test]
    async fn test_events_filtered_by_courses_param() {
        let app = seeded_app().await;

        let response = send(
            &app,
            "GET",
            "/api/events?start=2025-06-01&end=2025-06-30&courses=C2",
            None,
        )
        .await;
        assert_eq!(ids(&json(response).await), vec!["A9"]);

        let response = send(
            &app,
            "GET",
            "/api/events?start=2025-06-01&end=2025-06-30&courses=",
            None,
        )
        .await;
        assert_eq!(json(response).await.as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_events_narrow_window_and_inclusive_bound() {
        let app = seeded_app().await;

        let response = send(&app, "GET", "/api/events?start=2025-06-02&end=2025-06-09", None).await;
        assert!(json(response).await.as_array().unwrap().is_empty());

        let response = send(&app, "GET", "/api/events?start=2025-06-10&end=2025-06-10", None).await;
        assert_eq!(ids(&json(response).await), vec!["A1"]);
    }

    #[tokio::test]
    async fn test_events_inverted_range_is_empty() {
        let app = seeded_app().await;

        let response = send(&app, "GET", "/api/events?start=2025-06-30&end=2025-06-01", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(json(response).await.as_array().unwrap().is_empty());

        let response = send(
            &app,
            "GET",
            "/api/events/days?start=2025-06-30&end=2025-06-01",
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(json(response).await.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_events_malformed_date_param() {
        let app = seeded_app().await;

        let response = send(&app, "GET", "/api/events?start=yesterday", None).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_event_days() {
        let app = seeded_app().await;

        let response = send(
            &app,
            "GET",
            "/api/events/days?start=2025-06-10&end=2025-06-12",
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let days = json(response).await;
        let days = days.as_array().unwrap();
        assert_eq!(days.len(), 3);
        assert_eq!(days[0]["date"], "2025-06-10");
        assert_eq!(days[0]["events"].as_array().unwrap().len(), 1);
        assert!(days[1]["events"].as_array().unwrap().is_empty());
        assert_eq!(ids(&days[2]["events"]), vec!["D1", "Q1"]);
    }

    #[tokio::test]
    async fn test_event_days_rejects_huge_window() {
        let app = seeded_app().await;

        let response = send(
            &app,
            "GET",
            "/api/events/days?start=2000-01-01&end=2025-12-31",
            None,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upcoming_events_uses_today() {
        let app = create_app(AppState::default());
        let today = chrono::Local::now().date_naive();
        let tomorrow = today.succ_opt().unwrap();

        send(&app, "POST", "/api/courses", Some("id=C1&name=Intro&course_code=CS-101")).await;
        for (id, date) in [("A1", today), ("A2", tomorrow)] {
            let form = format!("kind=assignment&id={id}&title=Homework&date={date}");
            send(&app, "POST", "/api/courses/C1/coursework", Some(&form)).await;
        }

        let response = send(&app, "GET", "/api/events/upcoming?days=1", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(ids(&json(response).await), vec!["A1", "A2"]);

        let response = send(&app, "GET", "/api/events/upcoming?days=1&limit=1", None).await;
        assert_eq!(ids(&json(response).await), vec!["A1"]);

        let response = send(&app, "GET", "/api/events/upcoming?days=0", None).await;
        assert_eq!(ids(&json(response).await), vec!["A1"]);
    }

    #[tokio::test]
    async fn test_viewer_enrollments_and_events() {
        let app = seeded_app().await;
        let events_uri = "/api/viewers/v1/events?start=2025-06-01&end=2025-06-30";

        // Unknown viewer: empty set, every course visible
        let response = send(&app, "GET", "/api/viewers/v1/enrollments", None).await;
        let enrollments = json(response).await;
        assert_eq!(enrollments["unrestricted"], true);
        let response = send(&app, "GET", events_uri, None).await;
        assert_eq!(json(response).await.as_array().unwrap().len(), 4);

        let response = send(&app, "POST", "/api/viewers/v1/enrollments/C2", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let enrollments = json(response).await;
        assert_eq!(enrollments["courses"], serde_json::json!(["C2"]));

        let response = send(&app, "GET", events_uri, None).await;
        assert_eq!(ids(&json(response).await), vec!["A9"]);

        let response = send(
            &app,
            "PUT",
            "/api/viewers/v1/enrollments",
            Some("courses=C1,deleted-course"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = send(&app, "GET", events_uri, None).await;
        assert_eq!(ids(&json(response).await), vec!["A1", "D1", "Q1"]);

        let response = send(&app, "DELETE", "/api/viewers/v1/enrollments/C1", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let response = send(&app, "DELETE", "/api/viewers/v1/enrollments/C1", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_enroll_in_unknown_course() {
        let app = seeded_app().await;

        let response = send(&app, "POST", "/api/viewers/v1/enrollments/C9", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
