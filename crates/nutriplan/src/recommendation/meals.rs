use serde::Serialize;

use super::scoring::ScoredFood;

/// Meal slots. Declaration order is the claim priority used when a food fits
/// more than one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

/// Order in which meals claim foods from the ranked catalog.
pub const MEAL_PROCESSING_ORDER: [MealType; 4] = [
    MealType::Breakfast,
    MealType::Lunch,
    MealType::Snack,
    MealType::Dinner,
];

const BREAKFAST_KEYWORDS: &[&str] = &[
    "poha", "oats", "idli", "dosa", "paratha", "sandwich", "eggs",
];
const LUNCH_KEYWORDS: &[&str] = &[
    "roti", "rice", "dal", "paneer", "chicken", "fish", "sabzi", "curry",
];
const SNACK_KEYWORDS: &[&str] = &[
    "fruit", "nuts", "samosa", "pakoda", "biscuit", "yogurt", "smoothie",
];
const DINNER_KEYWORDS: &[&str] = &[
    "roti", "rice", "dal", "paneer", "chicken", "fish", "sabzi", "curry", "soup",
];

impl MealType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Snack => "Snack",
            Self::Dinner => "Dinner",
        }
    }

    /// Lowercase name fragments that mark a food as a candidate for this meal.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Breakfast => BREAKFAST_KEYWORDS,
            Self::Lunch => LUNCH_KEYWORDS,
            Self::Snack => SNACK_KEYWORDS,
            Self::Dinner => DINNER_KEYWORDS,
        }
    }

    pub fn matches(&self, food_name: &str) -> bool {
        let name = food_name.to_lowercase();
        self.keywords().iter().any(|keyword| name.contains(keyword))
    }
}

/// Keyword-based meal bucketing over an already ranked list.
#[derive(Debug, Clone, Copy, Default)]
pub struct MealCategorizer;

impl MealCategorizer {
    /// Records whose name matches any of `meal`'s keywords, in input order.
    /// Overlapping buckets are expected; claiming happens in the planner.
    pub fn candidates<'a>(&self, meal: MealType, ranked: &[ScoredFood<'a>]) -> Vec<ScoredFood<'a>> {
        ranked
            .iter()
            .filter(|scored| meal.matches(scored.food_name()))
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processing_order_follows_declaration_order() {
        let mut sorted = MEAL_PROCESSING_ORDER;
        sorted.sort();
        assert_eq!(sorted, MEAL_PROCESSING_ORDER);
        assert_eq!(MEAL_PROCESSING_ORDER[0], MealType::Breakfast);
        assert_eq!(MEAL_PROCESSING_ORDER[3], MealType::Dinner);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        assert!(MealType::Breakfast.matches("Masala DOSA"));
        assert!(MealType::Breakfast.matches("Scrambled eggs on toast"));
        assert!(MealType::Snack.matches("Mixed Nuts (roasted)"));
        assert!(!MealType::Breakfast.matches("Tomato soup"));
        assert!(MealType::Dinner.matches("Tomato soup"));
        assert!(!MealType::Lunch.matches("Tomato soup"));
    }

    #[test]
    fn lunch_and_dinner_share_keywords() {
        for keyword in MealType::Lunch.keywords() {
            assert!(MealType::Dinner.keywords().contains(keyword));
        }
    }
}
