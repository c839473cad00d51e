//! Health-aware meal recommendations.
//!
//! A request scores every catalog record against a [`UserProfile`], ranks the
//! scored copy, and lets each meal slot claim its best keyword matches in a
//! fixed order. The shared [`FoodCatalog`] is only ever borrowed.

pub mod advice;
pub mod bmi;
pub mod catalog;
pub mod error;
pub mod meals;
pub mod planner;
pub mod profile;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use advice::{health_recommendations, AdvicePriority, AdviceTopic, HealthRecommendation};
pub use bmi::{compute_bmi, BmiCategory};
pub use catalog::{CatalogError, CatalogState, FoodCatalog, FoodRecord};
pub use error::RecommendationError;
pub use meals::{MealCategorizer, MealType, MEAL_PROCESSING_ORDER};
pub use planner::{MealPlan, MealSelection, PlanGenerator};
pub use profile::{HealthMetrics, UserProfile, PROFILE_FIELDS};
pub use report::{
    BmiReport, DailySummary, DietPlanReport, DietPlanView, FoodCompatibilityReport, FoodView,
    MealView, ProfileSummary,
};
pub use router::recommendation_router;
pub use scoring::{
    AdjustmentKind, CompatibilityScorer, ScoreAdjustment, ScoreBreakdown, ScoredFood, Suitability,
};
pub use service::RecommendationService;
