use serde::Serialize;

use super::bmi::OVERWEIGHT_BMI;
use super::catalog::FoodRecord;
use super::profile::UserProfile;

pub const BASE_SCORE: f64 = 100.0;
pub const MAX_SCORE: f64 = 100.0;
pub const MIN_SCORE: f64 = 0.0;

/// Fasting glucose (mg/dL) above which free sugar is penalised.
pub const ELEVATED_BLOOD_SUGAR: f64 = 110.0;
/// Systolic pressure (mmHg) above which fat and sodium are penalised.
pub const ELEVATED_BLOOD_PRESSURE: f64 = 120.0;

const SUGAR_WEIGHT: f64 = 1.5;
const FAT_WEIGHT: f64 = 1.0;
const SODIUM_WEIGHT: f64 = 0.05;
const CALORIE_WEIGHT: f64 = 0.1;
const NUTRITION_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    SugarPenalty,
    PressurePenalty,
    CaloriePenalty,
    NutritionBonus,
}

impl AdjustmentKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SugarPenalty => "free sugar",
            Self::PressurePenalty => "fat and sodium",
            Self::CaloriePenalty => "energy",
            Self::NutritionBonus => "diet quality",
        }
    }
}

/// Signed contribution applied on top of the base score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreAdjustment {
    pub kind: AdjustmentKind,
    pub amount: f64,
}

/// Final score together with the adjustments that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub score: f64,
    pub adjustments: Vec<ScoreAdjustment>,
}

/// Stateless rule set mapping a health profile and a food to a 0-100 score.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatibilityScorer;

impl CompatibilityScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, user: &UserProfile, food: &FoodRecord) -> f64 {
        self.breakdown(user, food).score
    }

    pub fn breakdown(&self, user: &UserProfile, food: &FoodRecord) -> ScoreBreakdown {
        let mut adjustments = Vec::with_capacity(4);

        if user.blood_sugar_level() > ELEVATED_BLOOD_SUGAR {
            adjustments.push(ScoreAdjustment {
                kind: AdjustmentKind::SugarPenalty,
                amount: -(food.freesugar_g * SUGAR_WEIGHT),
            });
        }

        if user.blood_pressure() > ELEVATED_BLOOD_PRESSURE {
            adjustments.push(ScoreAdjustment {
                kind: AdjustmentKind::PressurePenalty,
                amount: -(food.fat_g * FAT_WEIGHT + food.sodium_mg * SODIUM_WEIGHT),
            });
        }

        if user.bmi() > OVERWEIGHT_BMI {
            adjustments.push(ScoreAdjustment {
                kind: AdjustmentKind::CaloriePenalty,
                amount: -(food.energy_kcal * CALORIE_WEIGHT),
            });
        }

        adjustments.push(ScoreAdjustment {
            kind: AdjustmentKind::NutritionBonus,
            amount: user.nutrition_quality() * NUTRITION_WEIGHT,
        });

        let raw = adjustments
            .iter()
            .fold(BASE_SCORE, |score, adjustment| score + adjustment.amount);

        ScoreBreakdown {
            score: clamp_score(raw),
            adjustments,
        }
    }
}

// NaN and -0.0 floor to +0.0.
fn clamp_score(raw: f64) -> f64 {
    if raw.is_nan() || raw <= MIN_SCORE {
        return MIN_SCORE;
    }
    raw.min(MAX_SCORE)
}

/// A catalog record paired with the score it earned for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredFood<'a> {
    pub food: &'a FoodRecord,
    pub compatibility_score: f64,
}

impl<'a> ScoredFood<'a> {
    pub fn food_name(&self) -> &'a str {
        &self.food.food_name
    }

    pub fn energy_kcal(&self) -> f64 {
        self.food.energy_kcal
    }
}

/// Coarse recommendation label for a single score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Suitability {
    HighlyRecommended,
    ModeratelyRecommended,
    NotRecommended,
}

impl Suitability {
    pub fn from_score(score: f64) -> Self {
        if score > 80.0 {
            Self::HighlyRecommended
        } else if score > 60.0 {
            Self::ModeratelyRecommended
        } else {
            Self::NotRecommended
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::HighlyRecommended => "Highly recommended",
            Self::ModeratelyRecommended => "Moderately recommended",
            Self::NotRecommended => "Not recommended",
        }
    }
}
