use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::Json;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::recommendation::router::{
    calculate_bmi_handler, food_compatibility_handler, generate_plan_handler,
};
use crate::recommendation::recommendation_router;

fn post_json(uri: &str, payload: &Value) -> Request<axum::body::Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(payload).expect("payload serializes"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn generate_plan_route_returns_all_meals() {
    let router = recommendation_router(Arc::new(service_with(balanced_catalog())));

    let response = router
        .oneshot(post_json("/api/generate-diet-plan", &profile_json()))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    for meal in ["Breakfast", "Lunch", "Snack", "Dinner"] {
        let foods = payload["diet_plan"][meal]["foods"]
            .as_array()
            .expect("foods listed");
        assert_eq!(foods.len(), 3, "{meal} should hold three foods");
    }
    assert_eq!(payload["daily_summary"]["meals_count"], 4);
    assert_eq!(payload["user_profile"]["bmi_category"], "Normal weight");
}

#[tokio::test]
async fn generate_plan_honours_requested_count() {
    let service = Arc::new(service_with(balanced_catalog()));
    let mut payload = profile_json();
    payload["per_meal_count"] = json!(2);

    let response = generate_plan_handler(State(service), Json(payload)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(
        body["diet_plan"]["Snack"]["foods"]
            .as_array()
            .map(Vec::len),
        Some(2)
    );
}

#[tokio::test]
async fn generate_plan_names_missing_profile_field() {
    let service = Arc::new(service_with(balanced_catalog()));
    let mut payload = profile_json();
    payload
        .as_object_mut()
        .expect("object payload")
        .remove("height_cm");

    let response = generate_plan_handler(State(service), Json(payload)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap_or_default()
        .contains("height_cm"));
}

#[tokio::test]
async fn generate_plan_rejects_fractional_count() {
    let service = Arc::new(service_with(balanced_catalog()));
    let mut payload = profile_json();
    payload["per_meal_count"] = json!(2.5);

    let response = generate_plan_handler(State(service), Json(payload)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unavailable_catalog_maps_to_service_unavailable() {
    let response = generate_plan_handler(State(unavailable_service()), Json(profile_json())).await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap_or_default()
        .contains("catalog unavailable"));
}

#[tokio::test]
async fn food_compatibility_returns_not_found_for_unknown_food() {
    let service = Arc::new(service_with(balanced_catalog()));
    let payload = json!({ "user": profile_json(), "food_name": "pizza" });

    let response = food_compatibility_handler(State(service), Json(payload)).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn food_compatibility_route_scores_match() {
    let router = recommendation_router(Arc::new(service_with(balanced_catalog())));
    let payload = json!({ "user": profile_json(), "food_name": "gulab" });

    let response = router
        .oneshot(post_json("/api/food-compatibility", &payload))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["food_name"], "Gulab jamun");
    assert_eq!(body["compatibility_score"], 63.0);
    assert_eq!(body["recommendation"], "Moderately recommended");
    assert_eq!(body["adjustments"][0]["kind"], "sugar_penalty");
}

#[tokio::test]
async fn food_compatibility_requires_user_object() {
    let service = Arc::new(service_with(balanced_catalog()));
    let payload = json!({ "food_name": "dosa" });

    let response = food_compatibility_handler(State(service), Json(payload)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn calculate_bmi_accepts_numeric_strings() {
    let service = unavailable_service();
    let payload = json!({ "weight_kg": "70", "height_cm": 175 });

    let response = calculate_bmi_handler(State(service), Json(payload)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["bmi"], 22.86);
    assert_eq!(body["category"], "Normal weight");
}

#[tokio::test]
async fn calculate_bmi_rejects_zero_height() {
    let service = unavailable_service();
    let payload = json!({ "weight_kg": 70, "height_cm": 0 });

    let response = calculate_bmi_handler(State(service), Json(payload)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn api_health_route_reports_healthy() {
    let router = recommendation_router(unavailable_service());

    let response = router
        .oneshot(
            Request::get("/api/health")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["status"], "healthy");
}
