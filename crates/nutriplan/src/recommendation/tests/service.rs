use super::common::*;
use crate::recommendation::{FoodCatalog, MealType, RecommendationError};

#[test]
fn generate_plan_builds_report_with_totals() {
    let service = service_with(balanced_catalog());
    let report = service
        .generate_plan(&ranking_user(), None)
        .expect("plan generated");

    let breakfast = report
        .diet_plan
        .meal(MealType::Breakfast)
        .expect("breakfast present");
    assert_eq!(breakfast.foods.len(), 3);
    assert_eq!(breakfast.total_calories, 420 + 180 + 150);
    let average = breakfast.avg_compatibility.expect("average present");
    assert!((average - 98.5).abs() < 1e-9);

    let meal_totals: i64 = report
        .diet_plan
        .iter()
        .map(|(_, view)| view.total_calories)
        .sum();
    assert_eq!(report.daily_summary.total_calories, meal_totals);
    assert_eq!(report.daily_summary.meals_count, 4);
    assert_eq!(report.user_profile.bmi, 23.44);
    assert_eq!(report.user_profile.bmi_category, "Normal weight");
}

#[test]
fn meal_calories_are_truncated_not_rounded() {
    let catalog = FoodCatalog::from_records(vec![
        food("Masala dosa", 100.6, 0.0),
        food("Oats porridge", 100.6, 0.0),
    ]);
    let service = service_with(catalog);

    let report = service
        .generate_plan(&ranking_user(), Some(3))
        .expect("plan generated");

    let breakfast = report
        .diet_plan
        .meal(MealType::Breakfast)
        .expect("breakfast present");
    assert_eq!(breakfast.total_calories, 201);
    let lunch = report.diet_plan.meal(MealType::Lunch).expect("lunch present");
    assert!(lunch.foods.is_empty());
    assert_eq!(lunch.avg_compatibility, None);
}

#[test]
fn plan_json_keeps_meal_order_and_response_shape() {
    let service = service_with(balanced_catalog());
    let report = service
        .generate_plan(&sugar_sensitive_user(), None)
        .expect("plan generated");

    let rendered = serde_json::to_string(&report).expect("serializes");
    let positions: Vec<_> = ["\"Breakfast\"", "\"Lunch\"", "\"Snack\"", "\"Dinner\""]
        .iter()
        .map(|key| rendered.find(key).expect("meal key present"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    let payload = serde_json::to_value(&report).expect("serializes");
    let first_food = &payload["diet_plan"]["Breakfast"]["foods"][0];
    assert!(first_food.get("food_name").is_some());
    assert!(first_food.get("energy_kcal").is_some());
    assert!(first_food.get("compatibility_score").is_some());
    assert!(payload["daily_summary"]["generated_at"].is_string());
    assert_eq!(payload["health_recommendations"][0]["type"], "blood_sugar");
}

#[test]
fn rejects_out_of_range_meal_counts() {
    let service = service_with(balanced_catalog());

    for count in [0, 26] {
        let err = service
            .generate_plan(&ranking_user(), Some(count))
            .expect_err("count rejected");
        assert!(matches!(err, RecommendationError::InvalidRequest(_)));
    }
}

#[test]
fn score_food_reports_first_match_with_breakdown() {
    let service = service_with(balanced_catalog());

    let report = service
        .score_food(&sugar_sensitive_user(), "CURRY")
        .expect("curry found");

    assert_eq!(report.food_name, "Paneer butter curry");
    assert_eq!(report.compatibility_score, 99.0);
    assert_eq!(report.recommendation, "Highly recommended");
    assert_eq!(report.adjustments.len(), 2);
}

#[test]
fn score_food_distinguishes_missing_and_blank_queries() {
    let service = service_with(balanced_catalog());

    let err = service
        .score_food(&sugar_sensitive_user(), "pizza")
        .expect_err("pizza missing");
    assert!(matches!(err, RecommendationError::FoodNotFound { .. }));

    let err = service
        .score_food(&sugar_sensitive_user(), "   ")
        .expect_err("blank query rejected");
    assert!(matches!(err, RecommendationError::InvalidRequest(_)));
}

#[test]
fn unavailable_catalog_refuses_catalog_operations_only() {
    let service = unavailable_service();
    assert!(!service.is_ready());

    let err = service
        .generate_plan(&sugar_sensitive_user(), None)
        .expect_err("plan refused");
    assert!(matches!(err, RecommendationError::CatalogUnavailable { .. }));

    let err = service
        .score_food(&sugar_sensitive_user(), "dosa")
        .expect_err("lookup refused");
    assert!(matches!(err, RecommendationError::CatalogUnavailable { .. }));

    let bmi = service.compute_bmi(70.0, 175.0).expect("bmi needs no catalog");
    assert_eq!(bmi.bmi, 22.86);
    assert_eq!(bmi.category, "Normal weight");
}
