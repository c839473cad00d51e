use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::advice::{health_recommendations, HealthRecommendation};
use super::bmi::{round2, BmiCategory};
use super::catalog::FoodRecord;
use super::meals::MealType;
use super::planner::{MealPlan, MealSelection};
use super::profile::UserProfile;
use super::scoring::{ScoreAdjustment, ScoreBreakdown, ScoredFood, Suitability};

/// Profile echo attached to every generated plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub bmi: f64,
    pub bmi_category: &'static str,
    pub age: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub blood_pressure: f64,
    pub blood_sugar_level: f64,
    pub nutrition_quality: f64,
}

impl ProfileSummary {
    pub fn from_profile(profile: &UserProfile) -> Self {
        let bmi = profile.bmi();
        Self {
            bmi: round2(bmi),
            bmi_category: BmiCategory::from_bmi(bmi).label(),
            age: profile.age(),
            weight_kg: profile.weight_kg(),
            height_cm: profile.height_cm(),
            blood_pressure: profile.blood_pressure(),
            blood_sugar_level: profile.blood_sugar_level(),
            nutrition_quality: profile.nutrition_quality(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodView {
    pub food_name: String,
    pub energy_kcal: f64,
    pub compatibility_score: f64,
}

impl From<&ScoredFood<'_>> for FoodView {
    fn from(scored: &ScoredFood<'_>) -> Self {
        Self {
            food_name: scored.food_name().to_string(),
            energy_kcal: scored.energy_kcal(),
            compatibility_score: scored.compatibility_score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealView {
    pub foods: Vec<FoodView>,
    /// Calorie sum truncated to whole kcal.
    pub total_calories: i64,
    /// `None` when the slot is empty.
    pub avg_compatibility: Option<f64>,
}

impl From<&MealSelection<'_>> for MealView {
    fn from(selection: &MealSelection<'_>) -> Self {
        Self {
            foods: selection.foods.iter().map(FoodView::from).collect(),
            total_calories: selection.total_calories().trunc() as i64,
            avg_compatibility: selection.average_compatibility(),
        }
    }
}

/// Meal views keyed by meal label. Serializes as a JSON object whose keys
/// follow processing order.
#[derive(Debug, Clone, PartialEq)]
pub struct DietPlanView {
    meals: Vec<(MealType, MealView)>,
}

impl DietPlanView {
    pub fn meal(&self, meal: MealType) -> Option<&MealView> {
        self.meals
            .iter()
            .find(|(candidate, _)| *candidate == meal)
            .map(|(_, view)| view)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MealType, &MealView)> {
        self.meals.iter().map(|(meal, view)| (*meal, view))
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

impl From<&MealPlan<'_>> for DietPlanView {
    fn from(plan: &MealPlan<'_>) -> Self {
        Self {
            meals: plan
                .meals()
                .iter()
                .map(|selection| (selection.meal, MealView::from(selection)))
                .collect(),
        }
    }
}

impl Serialize for DietPlanView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.meals.len()))?;
        for (meal, view) in &self.meals {
            map.serialize_entry(meal.label(), view)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub total_calories: i64,
    pub meals_count: usize,
    pub generated_at: DateTime<Utc>,
}

/// Everything returned for a diet plan request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DietPlanReport {
    pub user_profile: ProfileSummary,
    pub diet_plan: DietPlanView,
    pub daily_summary: DailySummary,
    pub health_recommendations: Vec<HealthRecommendation>,
}

impl DietPlanReport {
    pub fn build(profile: &UserProfile, plan: &MealPlan<'_>, generated_at: DateTime<Utc>) -> Self {
        let diet_plan = DietPlanView::from(plan);
        let total_calories = diet_plan.iter().map(|(_, view)| view.total_calories).sum();

        Self {
            user_profile: ProfileSummary::from_profile(profile),
            daily_summary: DailySummary {
                total_calories,
                meals_count: diet_plan.len(),
                generated_at,
            },
            diet_plan,
            health_recommendations: health_recommendations(profile, profile.bmi()),
        }
    }
}

/// Result of scoring a single catalog lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodCompatibilityReport {
    pub food_name: String,
    pub compatibility_score: f64,
    pub energy_kcal: f64,
    pub recommendation: &'static str,
    pub adjustments: Vec<ScoreAdjustment>,
}

impl FoodCompatibilityReport {
    pub fn new(food: &FoodRecord, breakdown: ScoreBreakdown) -> Self {
        Self {
            food_name: food.food_name.clone(),
            compatibility_score: round2(breakdown.score),
            energy_kcal: food.energy_kcal,
            recommendation: Suitability::from_score(breakdown.score).label(),
            adjustments: breakdown.adjustments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiReport {
    pub bmi: f64,
    pub category: &'static str,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl BmiReport {
    pub fn new(weight_kg: f64, height_cm: f64, bmi: f64) -> Self {
        Self {
            bmi: round2(bmi),
            category: BmiCategory::from_bmi(bmi).label(),
            weight_kg,
            height_cm,
        }
    }
}
