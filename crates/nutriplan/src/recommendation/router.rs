use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::warn;

use super::error::RecommendationError;
use super::profile::{required_number, UserProfile};
use super::service::RecommendationService;

/// Router builder exposing the plan, food scoring and BMI endpoints.
pub fn recommendation_router(service: Arc<RecommendationService>) -> Router {
    Router::new()
        .route("/api/health", get(api_health_handler))
        .route("/api/generate-diet-plan", post(generate_plan_handler))
        .route("/api/calculate-bmi", post(calculate_bmi_handler))
        .route("/api/food-compatibility", post(food_compatibility_handler))
        .with_state(service)
}

pub(crate) async fn api_health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "NutriPlan API is running",
    }))
}

pub(crate) async fn generate_plan_handler(
    State(service): State<Arc<RecommendationService>>,
    Json(payload): Json<Value>,
) -> Response {
    let result = UserProfile::from_json(&payload).and_then(|profile| {
        let per_meal_count = per_meal_count(&payload)?;
        service.generate_plan(&profile, per_meal_count)
    });

    match result {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn calculate_bmi_handler(
    State(service): State<Arc<RecommendationService>>,
    Json(payload): Json<Value>,
) -> Response {
    let result = as_object(&payload, "request body").and_then(|object| {
        let weight_kg = required_number(object, "weight_kg")?;
        let height_cm = required_number(object, "height_cm")?;
        service.compute_bmi(weight_kg, height_cm)
    });

    match result {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn food_compatibility_handler(
    State(service): State<Arc<RecommendationService>>,
    Json(payload): Json<Value>,
) -> Response {
    let result = as_object(&payload, "request body").and_then(|object| {
        let user = object.get("user").ok_or_else(|| {
            RecommendationError::InvalidRequest("missing required field: user".to_string())
        })?;
        let profile = UserProfile::from_json(user)?;
        let food_name = object
            .get("food_name")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                RecommendationError::InvalidRequest(
                    "food_name must be a string".to_string(),
                )
            })?;
        service.score_food(&profile, food_name)
    });

    match result {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(err) => error_response(err),
    }
}

fn as_object<'v>(
    payload: &'v Value,
    what: &str,
) -> Result<&'v serde_json::Map<String, Value>, RecommendationError> {
    payload
        .as_object()
        .ok_or_else(|| RecommendationError::InvalidRequest(format!("{what} must be a JSON object")))
}

fn per_meal_count(payload: &Value) -> Result<Option<usize>, RecommendationError> {
    match payload.get("per_meal_count") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_u64()
            .and_then(|count| usize::try_from(count).ok())
            .map(Some)
            .ok_or_else(|| {
                RecommendationError::InvalidRequest(
                    "per_meal_count must be a positive integer".to_string(),
                )
            }),
    }
}

pub(crate) fn status_for(err: &RecommendationError) -> StatusCode {
    match err {
        RecommendationError::InvalidProfile { .. } | RecommendationError::InvalidRequest(_) => {
            StatusCode::BAD_REQUEST
        }
        RecommendationError::FoodNotFound { .. } => StatusCode::NOT_FOUND,
        RecommendationError::CatalogUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
    }
}

fn error_response(err: RecommendationError) -> Response {
    let status = status_for(&err);
    if status.is_server_error() {
        warn!(error = %err, "recommendation request refused");
    }
    let payload = json!({ "error": err.to_string() });
    (status, Json(payload)).into_response()
}
