use std::sync::Arc;

use axum::response::Response;
use serde_json::{json, Value};

use crate::config::PlannerConfig;
use crate::recommendation::{
    CatalogState, FoodCatalog, FoodRecord, HealthMetrics, RecommendationService, UserProfile,
};

pub(super) fn metrics() -> HealthMetrics {
    HealthMetrics {
        age: 30.0,
        weight_kg: 60.0,
        height_cm: 160.0,
        blood_pressure: 110.0,
        blood_sugar_level: 150.0,
        nutrition_quality: 8.0,
    }
}

/// High blood sugar only, normal BMI: score = 100 - 1.5 * sugar + 8.
pub(super) fn sugar_sensitive_user() -> UserProfile {
    metrics().validate().expect("valid profile")
}

/// Like [`sugar_sensitive_user`] but without the bonus, so a food's rank is
/// decided purely by its free sugar.
pub(super) fn ranking_user() -> UserProfile {
    HealthMetrics {
        nutrition_quality: 0.0,
        ..metrics()
    }
    .validate()
    .expect("valid profile")
}

pub(super) fn profile_json() -> Value {
    json!({
        "age": 30,
        "weight_kg": 60,
        "height_cm": 160,
        "blood_pressure": 110,
        "blood_sugar_level": 150,
        "nutrition_quality": 8
    })
}

pub(super) fn food(name: &str, energy_kcal: f64, freesugar_g: f64) -> FoodRecord {
    FoodRecord::new(name, energy_kcal, freesugar_g, 2.0, 50.0)
}

/// Catalog with at least three candidates per meal. Free sugar grows down the
/// list so the ranking for [`ranking_user`] is catalog order.
pub(super) fn balanced_catalog() -> FoodCatalog {
    FoodCatalog::from_records(vec![
        food("Eggs and rice bowl", 420.0, 0.0),
        food("Masala dosa", 180.0, 1.0),
        food("Oats porridge", 150.0, 2.0),
        food("Vegetable poha", 160.0, 3.0),
        food("Jeera rice", 210.0, 4.0),
        food("Dal tadka", 190.0, 5.0),
        food("Paneer butter curry", 360.0, 6.0),
        food("Chicken curry", 310.0, 7.0),
        food("Roasted nuts", 170.0, 8.0),
        food("Fruit chaat", 90.0, 9.0),
        food("Mango smoothie", 140.0, 10.0),
        food("Tomato soup", 80.0, 11.0),
        food("Fish fry", 260.0, 12.0),
        food("Bajra roti", 120.0, 13.0),
        food("Mixed vegetable sabzi", 110.0, 14.0),
        food("Gulab jamun", 330.0, 30.0),
    ])
}

pub(super) fn service_with(catalog: FoodCatalog) -> RecommendationService {
    RecommendationService::new(CatalogState::from(catalog), PlannerConfig::default())
}

pub(super) fn unavailable_service() -> Arc<RecommendationService> {
    Arc::new(RecommendationService::new(
        CatalogState::Unavailable("failed to open food catalog missing.csv".to_string()),
        PlannerConfig::default(),
    ))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
