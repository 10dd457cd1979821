//! Router tests that are rejected before any query runs, so the lazy pool never connects.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use eventhub::{app::build_app, auth::jwt::JwtKeys, state::AppState};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

fn app() -> Router {
    build_app(AppState::fake())
}

fn bearer() -> String {
    let keys = JwtKeys::from_config(&AppState::test_config().jwt);
    format!("Bearer {}", keys.sign(Uuid::new_v4()).unwrap())
}

async fn send(req: Request<Body>) -> (StatusCode, Value) {
    let res = app().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn json_request(method: Method, uri: &str, auth: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let res = app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_event_requires_token() {
    let body = json!({"name": "Meetup", "description": "Monthly Rust meetup", "date": "20/04/2025"});
    let (status, err) = send(json_request(Method::POST, "/api/v1/events", None, body)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(err["error"], "Missing Authorization header");
}

#[tokio::test]
async fn garbage_and_foreign_tokens_are_unauthorized() {
    let body = json!({"name": "Meetup", "description": "Monthly Rust meetup", "date": "20/04/2025"});
    let (status, _) = send(json_request(
        Method::POST,
        "/api/v1/events",
        Some("Bearer not-a-token"),
        body.clone(),
    ))
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(json_request(
        Method::POST,
        "/api/v1/events",
        Some("Basic dXNlcjpwYXNz"),
        body,
    ))
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn mutations_reject_anonymous_callers() {
    let event = Uuid::new_v4();
    let user = Uuid::new_v4();
    let cases = [
        (Method::PUT, format!("/api/v1/events/{event}")),
        (Method::DELETE, format!("/api/v1/events/{event}")),
        (Method::POST, format!("/api/v1/events/{event}/attendees/{user}")),
        (Method::DELETE, format!("/api/v1/events/{event}/attendees/{user}")),
    ];
    for (method, uri) in cases {
        let req = Request::builder()
            .method(method.clone())
            .uri(&uri)
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn create_event_validates_fields() {
    let auth = bearer();
    let short_name = json!({"name": "Me", "description": "Monthly Rust meetup", "date": "20/04/2025"});
    let (status, _) = send(json_request(Method::POST, "/api/v1/events", Some(&auth), short_name)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let bad_date = json!({"name": "Meetup", "description": "Monthly Rust meetup", "date": "31/02/2025"});
    let (status, err) = send(json_request(Method::POST, "/api/v1/events", Some(&auth), bad_date)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(err["error"].as_str().unwrap().contains("date"));
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/events")
        .header(header::AUTHORIZATION, bearer())
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn register_rejects_bad_input() {
    let cases = [
        json!({"email": "not-an-email", "password": "password1", "name": "Alice"}),
        json!({"email": "alice@example.com", "password": "short", "name": "Alice"}),
        json!({"email": "alice@example.com", "password": "password1", "name": "A"}),
        json!({"email": "alice@example.com", "password": "password1"}),
    ];
    for body in cases {
        let (status, err) = send(json_request(Method::POST, "/api/v1/register", None, body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
        assert!(err["error"].is_string());
    }
}

#[tokio::test]
async fn login_rejects_bad_input() {
    let body = json!({"email": "nope", "password": "password1"});
    let (status, _) = send(json_request(Method::POST, "/api/v1/login", None, body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_ids_are_bad_requests() {
    let req = Request::builder()
        .uri("/api/v1/events/not-a-uuid")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn no_swagger_ui_is_mounted() {
    for uri in ["/swagger/index.html", "/api/v1/swagger/index.html"] {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let res = app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}
