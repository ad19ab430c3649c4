//! Router-level checks for requests rejected before any query runs.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use larder::{app::build_app, state::AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_app(AppState::fake())
}

async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let res = app().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = send(Method::GET, "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn eat_with_two_sources_is_rejected() {
    let (status, body) = send(
        Method::POST,
        "/api/v1/eaten-meals",
        Some(json!({
            "meal_type": "lunch",
            "servings": 1,
            "cooked_meal_id": 1,
            "snack_id": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.starts_with("Only one of"), "{body}");
}

#[tokio::test]
async fn eat_without_source_is_rejected() {
    let (status, body) = send(
        Method::POST,
        "/api/v1/eaten-meals",
        Some(json!({ "meal_type": "dinner", "servings": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("must be provided"), "{body}");
}

#[tokio::test]
async fn eat_zero_servings_is_rejected() {
    let (status, _) = send(
        Method::POST,
        "/api/v1/eaten-meals",
        Some(json!({ "meal_type": "snack", "servings": 0, "snack_id": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cook_requires_positive_servings() {
    let (status, body) = send(
        Method::POST,
        "/api/v1/cooked-meals",
        Some(json!({ "recipe_id": 1, "servings": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("servings"), "{body}");
}

#[tokio::test]
async fn inventory_add_rejects_negative_amount() {
    let (status, _) = send(
        Method::POST,
        "/api/v1/inventory",
        Some(json!({ "ingredient_id": 1, "amount": -5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn planned_range_must_not_be_reversed() {
    let (status, _) = send(
        Method::GET,
        "/api/v1/planned-meals?start_date=2025-04-07&end_date=2025-04-01",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        Method::GET,
        "/api/v1/macros/planned?start_date=2025-04-07&end_date=2025-04-01",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn week_plan_rejects_entry_without_source() {
    let (status, _) = send(
        Method::POST,
        "/api/v1/planned-meals/week",
        Some(json!([
            { "date": "2025-04-07", "meal_type": "breakfast", "servings": 1, "recipe_id": 1 },
            { "date": "2025-04-08", "meal_type": "lunch", "servings": 1 }
        ])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn daily_macros_requires_a_valid_day() {
    let (status, _) = send(Method::GET, "/api/v1/macros/daily?day=yesterday", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _) = send(Method::GET, "/api/v1/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
