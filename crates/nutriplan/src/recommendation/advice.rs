use serde::Serialize;

use super::bmi::OVERWEIGHT_BMI;
use super::profile::UserProfile;
use super::scoring::{ELEVATED_BLOOD_PRESSURE, ELEVATED_BLOOD_SUGAR};

/// Diet quality below which general guidance is attached to a plan.
pub const LOW_NUTRITION_QUALITY: f64 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceTopic {
    WeightManagement,
    BloodSugar,
    BloodPressure,
    NutritionQuality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvicePriority {
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthRecommendation {
    #[serde(rename = "type")]
    pub topic: AdviceTopic,
    pub title: &'static str,
    pub message: &'static str,
    pub priority: AdvicePriority,
}

/// Advice triggered by the same thresholds the scorer penalises, plus a
/// nudge for low self-reported diet quality.
pub fn health_recommendations(profile: &UserProfile, bmi: f64) -> Vec<HealthRecommendation> {
    let mut advice = Vec::new();

    if bmi > OVERWEIGHT_BMI {
        advice.push(HealthRecommendation {
            topic: AdviceTopic::WeightManagement,
            title: "Weight Management",
            message: "Consider reducing portion sizes and increasing physical activity",
            priority: AdvicePriority::High,
        });
    }

    if profile.blood_sugar_level() > ELEVATED_BLOOD_SUGAR {
        advice.push(HealthRecommendation {
            topic: AdviceTopic::BloodSugar,
            title: "Blood Sugar Control",
            message: "Limit sugary foods and opt for complex carbohydrates",
            priority: AdvicePriority::High,
        });
    }

    if profile.blood_pressure() > ELEVATED_BLOOD_PRESSURE {
        advice.push(HealthRecommendation {
            topic: AdviceTopic::BloodPressure,
            title: "Blood Pressure Management",
            message: "Reduce sodium intake and choose low-fat options",
            priority: AdvicePriority::Medium,
        });
    }

    if profile.nutrition_quality() < LOW_NUTRITION_QUALITY {
        advice.push(HealthRecommendation {
            topic: AdviceTopic::NutritionQuality,
            title: "Improve Diet Quality",
            message: "Increase intake of fruits, vegetables, and whole grains",
            priority: AdvicePriority::Medium,
        });
    }

    advice
}
