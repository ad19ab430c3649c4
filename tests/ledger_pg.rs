//! End-to-end ledger flows against a real Postgres.
//!
//! Skipped unless `TEST_DATABASE_URL` points at a disposable database; the
//! test truncates every table it touches.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use larder::{
    app::build_app,
    config::{AppConfig, ServerConfig},
    state::AppState,
};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

async fn setup() -> Option<Router> {
    let url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("TEST_DATABASE_URL not set; skipping");
            return None;
        }
    };
    let db = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect");
    sqlx::migrate!("./migrations").run(&db).await.expect("migrate");
    sqlx::query(
        "TRUNCATE eaten_meals, eaten_out, cooked_meals, planned_meals, inventory, \
         recipe_instructions, recipe_ingredients, recipes, snacks, ingredients RESTART IDENTITY CASCADE",
    )
    .execute(&db)
    .await
    .expect("truncate");

    let config = Arc::new(AppConfig {
        database_url: url,
        max_connections: 2,
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            cors_allowed_origin: None,
        },
    });
    Some(build_app(AppState::from_parts(db, config)))
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let res = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}

#[tokio::test]
async fn cook_eat_and_summarize() {
    let Some(app) = setup().await else { return };

    let (status, oats) = call(
        &app,
        Method::POST,
        "/api/v1/ingredients",
        Some(json!({
            "name": "Oats",
            "unit": "g",
            "calories_per_unit": 4,
            "protein_per_unit": 0.13,
            "carbs_per_unit": 0.66,
            "fat_per_unit": 0.07
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let oats_id = oats["id"].as_i64().unwrap();

    let (status, recipe) = call(
        &app,
        Method::POST,
        "/api/v1/recipes",
        Some(json!({
            "name": "Oatmeal",
            "servings": 2,
            "calories_per_serving": 300,
            "protein_per_serving": 10,
            "carbs_per_serving": 50,
            "fat_per_serving": 5,
            "ingredients": [{ "ingredient_id": oats_id, "amount": 100 }],
            "instructions": ["Boil water", "Stir in oats"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let recipe_id = recipe["id"].as_i64().unwrap();

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/v1/inventory",
        Some(json!({ "ingredient_id": oats_id, "amount": 100 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // 3 servings would need 150 g
    let (status, body) = call(
        &app,
        Method::POST,
        "/api/v1/cooked-meals",
        Some(json!({ "recipe_id": recipe_id, "servings": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.as_str().unwrap().starts_with("Insufficient Oats"));

    let (status, cooked) = call(
        &app,
        Method::POST,
        "/api/v1/cooked-meals",
        Some(json!({ "recipe_id": recipe_id, "servings": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(cooked["servings_remaining"], 1.0);
    let cooked_id = cooked["id"].as_i64().unwrap();

    let (_, inventory) = call(&app, Method::GET, "/api/v1/inventory", None).await;
    assert_eq!(inventory[0]["amount"], 50.0);

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/v1/eaten-meals",
        Some(json!({
            "meal_type": "breakfast",
            "servings": 1,
            "cooked_meal_id": cooked_id,
            "eaten_at": "2025-04-02T08:30:00Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = call(&app, Method::GET, &format!("/api/v1/cooked-meals/{cooked_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, record) = call(
        &app,
        Method::POST,
        "/api/v1/eaten-out",
        Some(json!({
            "restaurant": "Café",
            "meal_name": "Sandwich",
            "calories": 600,
            "protein": 30,
            "carbs": 70,
            "fat": 20,
            "servings_total": 2
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(record["servings_remaining"], 2.0);
    let eaten_out_id = record["id"].as_i64().unwrap();

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/v1/eaten-meals",
        Some(json!({
            "meal_type": "lunch",
            "servings": 1,
            "eaten_out_id": eaten_out_id,
            "eaten_at": "2025-04-02T12:15:00Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, record) = call(&app, Method::GET, &format!("/api/v1/eaten-out/{eaten_out_id}"), None).await;
    assert_eq!(record["servings_remaining"], 1.0);

    let (status, summary) = call(&app, Method::GET, "/api/v1/macros/daily?day=2025-04-02", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["calories"], 600);
    assert_eq!(summary["meals"]["breakfast"][0]["name"], "Oatmeal");
    assert_eq!(summary["meals"]["breakfast"][0]["calories"], 300);
    assert_eq!(summary["meals"]["lunch"][0]["name"], "Café - Sandwich");
    assert_eq!(summary["meals"]["lunch"][0]["calories"], 300);
    assert_eq!(summary["meals"]["lunch"][0]["type"], "eaten_out");

    let (_, empty) = call(&app, Method::GET, "/api/v1/macros/daily?day=2025-04-03", None).await;
    assert_eq!(empty["calories"], 0);
    assert_eq!(empty["meals"]["dinner"], json!([]));

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/v1/planned-meals/week",
        Some(json!([
            { "date": "2025-04-07", "meal_type": "breakfast", "servings": 1, "recipe_id": recipe_id },
            { "date": "2025-04-08", "meal_type": "dinner", "servings": 1, "snack_id": 999 }
        ])),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, planned) = call(
        &app,
        Method::GET,
        "/api/v1/planned-meals?start_date=2025-04-07&end_date=2025-04-13",
        None,
    )
    .await;
    assert_eq!(planned, json!([]));
}
