use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::bmi::compute_bmi;
use super::error::RecommendationError;

/// Required numeric fields of a health profile, in the order they are validated.
pub const PROFILE_FIELDS: [&str; 6] = [
    "age",
    "weight_kg",
    "height_cm",
    "blood_pressure",
    "blood_sugar_level",
    "nutrition_quality",
];

/// Raw health metrics as supplied by a caller, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    pub age: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
    /// Systolic pressure in mmHg.
    pub blood_pressure: f64,
    /// Fasting glucose in mg/dL.
    pub blood_sugar_level: f64,
    /// Self-reported diet quality, 1 (poor) to 10 (excellent).
    pub nutrition_quality: f64,
}

impl HealthMetrics {
    pub fn validate(self) -> Result<UserProfile, RecommendationError> {
        UserProfile::new(self)
    }
}

/// Validated, immutable health profile for a single request.
///
/// A constructed profile always has finite fields and a positive height, so
/// its BMI is defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UserProfile {
    age: f64,
    weight_kg: f64,
    height_cm: f64,
    blood_pressure: f64,
    blood_sugar_level: f64,
    nutrition_quality: f64,
}

impl UserProfile {
    pub fn new(metrics: HealthMetrics) -> Result<Self, RecommendationError> {
        let HealthMetrics {
            age,
            weight_kg,
            height_cm,
            blood_pressure,
            blood_sugar_level,
            nutrition_quality,
        } = metrics;

        for (field, value) in PROFILE_FIELDS.into_iter().zip([
            age,
            weight_kg,
            height_cm,
            blood_pressure,
            blood_sugar_level,
            nutrition_quality,
        ]) {
            if !value.is_finite() {
                return Err(RecommendationError::invalid_profile(
                    field,
                    "must be a finite number",
                ));
            }
        }

        compute_bmi(weight_kg, height_cm)?;

        Ok(Self {
            age,
            weight_kg,
            height_cm,
            blood_pressure,
            blood_sugar_level,
            nutrition_quality,
        })
    }

    /// Parse a profile from a JSON object. Numbers and numeric strings are
    /// both accepted; anything else names the offending field.
    pub fn from_json(value: &Value) -> Result<Self, RecommendationError> {
        let object = value.as_object().ok_or_else(|| {
            RecommendationError::InvalidRequest("user profile must be a JSON object".to_string())
        })?;

        let mut parsed = [0.0_f64; PROFILE_FIELDS.len()];
        for (slot, field) in parsed.iter_mut().zip(PROFILE_FIELDS) {
            *slot = required_number(object, field)?;
        }

        let [age, weight_kg, height_cm, blood_pressure, blood_sugar_level, nutrition_quality] =
            parsed;
        Self::new(HealthMetrics {
            age,
            weight_kg,
            height_cm,
            blood_pressure,
            blood_sugar_level,
            nutrition_quality,
        })
    }

    pub fn age(&self) -> f64 {
        self.age
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn blood_pressure(&self) -> f64 {
        self.blood_pressure
    }

    pub fn blood_sugar_level(&self) -> f64 {
        self.blood_sugar_level
    }

    pub fn nutrition_quality(&self) -> f64 {
        self.nutrition_quality
    }

    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }
}

/// Read `field` from a JSON object as a number or numeric string.
pub(crate) fn required_number(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<f64, RecommendationError> {
    let raw = object
        .get(field)
        .ok_or_else(|| RecommendationError::invalid_profile(field, "missing required field"))?;

    let parsed = match raw {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| RecommendationError::invalid_profile(field, "must be numeric"))
}
