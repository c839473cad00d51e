use serde::Serialize;

use super::error::RecommendationError;

/// BMI above which a profile counts as overweight for scoring and advice.
pub const OVERWEIGHT_BMI: f64 = 25.0;

/// Body Mass Index from weight in kilograms and height in centimetres.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Result<f64, RecommendationError> {
    if !weight_kg.is_finite() {
        return Err(RecommendationError::invalid_profile(
            "weight_kg",
            "must be a finite number",
        ));
    }
    if !height_cm.is_finite() {
        return Err(RecommendationError::invalid_profile(
            "height_cm",
            "must be a finite number",
        ));
    }
    if height_cm <= 0.0 {
        return Err(RecommendationError::invalid_profile(
            "height_cm",
            "must be greater than zero",
        ));
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    // Tiny heights underflow and huge weights overflow to infinity.
    if !bmi.is_finite() {
        return Err(RecommendationError::invalid_profile(
            "height_cm",
            "produces an undefined BMI",
        ));
    }
    Ok(bmi)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < OVERWEIGHT_BMI {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

/// Round to two decimal places for display payloads.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
