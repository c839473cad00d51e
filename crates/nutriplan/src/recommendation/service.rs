use chrono::Utc;
use tracing::{debug, info};

use super::bmi::compute_bmi;
use super::catalog::CatalogState;
use super::error::RecommendationError;
use super::planner::PlanGenerator;
use super::profile::UserProfile;
use super::report::{BmiReport, DietPlanReport, FoodCompatibilityReport};
use super::scoring::CompatibilityScorer;
use crate::config::{PlannerConfig, MAX_MEALS_PER_SLOT};

/// Entry point shared by the HTTP router and the command line.
///
/// Holds the process-wide catalog behind an `Arc`; every call works on its
/// own scored copy, so one service can serve concurrent requests unlocked.
#[derive(Debug, Clone)]
pub struct RecommendationService {
    catalog: CatalogState,
    scorer: CompatibilityScorer,
    default_per_meal_count: usize,
}

impl RecommendationService {
    pub fn new(catalog: CatalogState, config: PlannerConfig) -> Self {
        Self {
            catalog,
            scorer: CompatibilityScorer::new(),
            default_per_meal_count: config.per_meal_count,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.catalog.is_loaded()
    }

    /// Build a plan for `profile` and wrap it in the response report.
    pub fn generate_plan(
        &self,
        profile: &UserProfile,
        per_meal_count: Option<usize>,
    ) -> Result<DietPlanReport, RecommendationError> {
        let catalog = self.catalog.catalog()?;
        let generator = self.generator(per_meal_count)?;
        let plan = generator.generate(profile, catalog);

        info!(
            per_meal_count = generator.per_meal_count(),
            catalog_size = catalog.len(),
            "diet plan generated"
        );

        Ok(DietPlanReport::build(profile, &plan, Utc::now()))
    }

    pub fn score_food(
        &self,
        profile: &UserProfile,
        query: &str,
    ) -> Result<FoodCompatibilityReport, RecommendationError> {
        if query.trim().is_empty() {
            return Err(RecommendationError::InvalidRequest(
                "food_name must not be empty".to_string(),
            ));
        }

        let catalog = self.catalog.catalog()?;
        let food = catalog.find_by_name(query)?;
        let breakdown = self.scorer.breakdown(profile, food);

        debug!(query, matched = %food.food_name, score = breakdown.score, "food scored");

        Ok(FoodCompatibilityReport::new(food, breakdown))
    }

    pub fn compute_bmi(
        &self,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<BmiReport, RecommendationError> {
        let bmi = compute_bmi(weight_kg, height_cm)?;
        Ok(BmiReport::new(weight_kg, height_cm, bmi))
    }

    fn generator(&self, per_meal_count: Option<usize>) -> Result<PlanGenerator, RecommendationError> {
        let count = per_meal_count.unwrap_or(self.default_per_meal_count);
        if count == 0 || count > MAX_MEALS_PER_SLOT {
            return Err(RecommendationError::InvalidRequest(format!(
                "per_meal_count must be between 1 and {MAX_MEALS_PER_SLOT}, got {count}"
            )));
        }
        Ok(PlanGenerator::new(count))
    }
}
