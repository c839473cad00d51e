use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

use super::catalog::FoodCatalog;
use super::meals::{MealCategorizer, MealType, MEAL_PROCESSING_ORDER};
use super::profile::UserProfile;
use super::scoring::{CompatibilityScorer, ScoredFood};
use crate::config::DEFAULT_MEALS_PER_SLOT;

/// Foods chosen for one meal slot.
#[derive(Debug, Clone, PartialEq)]
pub struct MealSelection<'a> {
    pub meal: MealType,
    pub foods: Vec<ScoredFood<'a>>,
    /// Set when the keyword bucket was too small and the slot was filled from
    /// the overall ranking instead.
    pub used_fallback: bool,
}

impl MealSelection<'_> {
    pub fn total_calories(&self) -> f64 {
        self.foods.iter().map(ScoredFood::energy_kcal).sum()
    }

    pub fn average_compatibility(&self) -> Option<f64> {
        if self.foods.is_empty() {
            return None;
        }
        let total: f64 = self
            .foods
            .iter()
            .map(|scored| scored.compatibility_score)
            .sum();
        Some(total / self.foods.len() as f64)
    }
}

/// Per-request plan borrowing from the shared catalog. Meals appear in
/// processing order and no food name appears in two meals.
#[derive(Debug, Clone, PartialEq)]
pub struct MealPlan<'a> {
    meals: Vec<MealSelection<'a>>,
}

impl<'a> MealPlan<'a> {
    pub fn meals(&self) -> &[MealSelection<'a>] {
        &self.meals
    }

    pub fn meal(&self, meal: MealType) -> &[ScoredFood<'a>] {
        self.meals
            .iter()
            .find(|selection| selection.meal == meal)
            .map(|selection| selection.foods.as_slice())
            .unwrap_or(&[])
    }

    pub fn food_names(&self, meal: MealType) -> Vec<&'a str> {
        self.meal(meal).iter().map(ScoredFood::food_name).collect()
    }
}

/// Ranks a catalog for one profile and splits it into meal slots.
#[derive(Debug, Clone, Copy)]
pub struct PlanGenerator {
    scorer: CompatibilityScorer,
    categorizer: MealCategorizer,
    per_meal_count: usize,
}

impl Default for PlanGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_MEALS_PER_SLOT)
    }
}

impl PlanGenerator {
    pub fn new(per_meal_count: usize) -> Self {
        Self {
            scorer: CompatibilityScorer::new(),
            categorizer: MealCategorizer,
            per_meal_count,
        }
    }

    pub fn per_meal_count(&self) -> usize {
        self.per_meal_count
    }

    /// Score every record into a request-local list sorted by score,
    /// highest first. Equal scores keep catalog order.
    pub fn rank<'a>(&self, user: &UserProfile, catalog: &'a FoodCatalog) -> Vec<ScoredFood<'a>> {
        let mut ranked: Vec<ScoredFood<'a>> = catalog
            .records()
            .iter()
            .map(|food| ScoredFood {
                food,
                compatibility_score: self.scorer.score(user, food),
            })
            .collect();
        ranked.sort_by(by_score_desc);
        ranked
    }

    pub fn generate<'a>(&self, user: &UserProfile, catalog: &'a FoodCatalog) -> MealPlan<'a> {
        let ranked = self.rank(user, catalog);
        let mut claimed: HashSet<&'a str> = HashSet::new();
        let mut meals = Vec::with_capacity(MEAL_PROCESSING_ORDER.len());

        for meal in MEAL_PROCESSING_ORDER {
            let mut candidates = self.categorizer.candidates(meal, &ranked);
            candidates.retain(|scored| !claimed.contains(scored.food_name()));

            if meal == MealType::Lunch {
                candidates.sort_by(|a, b| {
                    by_score_desc(a, b).then_with(|| b.energy_kcal().total_cmp(&a.energy_kcal()))
                });
            }
            candidates.truncate(self.per_meal_count);

            // The fallback slice replaces the keyword picks and follows the
            // global ranking, lunch included.
            let used_fallback = candidates.len() < self.per_meal_count;
            let foods: Vec<ScoredFood<'a>> = if used_fallback {
                ranked
                    .iter()
                    .filter(|scored| !claimed.contains(scored.food_name()))
                    .take(self.per_meal_count)
                    .copied()
                    .collect()
            } else {
                candidates
            };

            debug!(
                meal = meal.label(),
                selected = foods.len(),
                used_fallback,
                "meal slot filled"
            );

            claimed.extend(foods.iter().map(ScoredFood::food_name));
            meals.push(MealSelection {
                meal,
                foods,
                used_fallback,
            });
        }

        MealPlan { meals }
    }
}

fn by_score_desc(a: &ScoredFood<'_>, b: &ScoredFood<'_>) -> Ordering {
    b.compatibility_score.total_cmp(&a.compatibility_score)
}
