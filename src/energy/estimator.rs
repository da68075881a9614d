//! BMR and TDEE estimation
//!
//! Basal metabolic rate from the Mifflin-St Jeor style equation with the
//! revised Harris-Benedict coefficients, scaled by five fixed activity factors.

use serde::{Deserialize, Serialize};

use super::units::{inches_to_cm, pounds_to_kg};
use crate::input::{required_nonzero_float, required_nonzero_int, InputResult};

/// Biological sex used to select equation coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Activity level multipliers applied to BMR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

impl ActivityLevel {
    /// All levels, least to most active
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtremelyActive,
    ];

    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtremelyActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtremelyActive => "extremely_active",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little/no exercise)",
            ActivityLevel::LightlyActive => "Lightly active (1-3 days/week)",
            ActivityLevel::ModeratelyActive => "Moderately active (3-5 days/week)",
            ActivityLevel::VeryActive => "Very active (6-7 days/week)",
            ActivityLevel::ExtremelyActive => "Extremely active (2x/day)",
        }
    }
}

/// Raw estimator form as entered by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EstimateForm {
    pub age: String,
    pub weight: String,
    pub height: String,
}

/// Validated body measurements for one estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnthropometricInput {
    pub age_years: i64,
    pub weight_pounds: f64,
    pub height_inches: f64,
    pub sex: Sex,
}

impl AnthropometricInput {
    /// Parse a form. Missing, zero, or non-numeric age/weight/height is
    /// rejected; negative values pass through to the equation unchanged.
    pub fn from_form(form: &EstimateForm, sex: Sex) -> InputResult<Self> {
        let age_years = required_nonzero_int("age", &form.age)?;
        let weight_pounds = required_nonzero_float("weight", &form.weight)?;
        let height_inches = required_nonzero_float("height", &form.height)?;

        Ok(Self {
            age_years,
            weight_pounds,
            height_inches,
            sex,
        })
    }
}

/// BMR and the five TDEE figures, all in kcal/day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    pub bmr: i64,
    pub sedentary: i64,
    pub lightly_active: i64,
    pub moderately_active: i64,
    pub very_active: i64,
    pub extremely_active: i64,
}

impl EnergyEstimate {
    /// TDEE for one activity level
    pub fn tdee(&self, level: ActivityLevel) -> i64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtremelyActive => self.extremely_active,
        }
    }
}

/// Unrounded BMR in kcal/day
pub fn basal_metabolic_rate(input: &AnthropometricInput) -> f64 {
    let weight_kg = pounds_to_kg(input.weight_pounds);
    let height_cm = inches_to_cm(input.height_inches);
    let age = input.age_years as f64;

    match input.sex {
        Sex::Male => 88.362 + (13.397 * weight_kg) + (4.799 * height_cm) - (5.677 * age),
        Sex::Female => 447.593 + (9.247 * weight_kg) + (3.098 * height_cm) - (4.330 * age),
    }
}

/// TDEE for an unrounded BMR. Rounding happens after the multiplication.
pub fn tdee_from_bmr(bmr: f64, level: ActivityLevel) -> i64 {
    round_half_up(bmr * level.factor())
}

/// Compute the full estimate
pub fn estimate(input: &AnthropometricInput) -> EnergyEstimate {
    let bmr = basal_metabolic_rate(input);

    EnergyEstimate {
        bmr: round_half_up(bmr),
        sedentary: tdee_from_bmr(bmr, ActivityLevel::Sedentary),
        lightly_active: tdee_from_bmr(bmr, ActivityLevel::LightlyActive),
        moderately_active: tdee_from_bmr(bmr, ActivityLevel::ModeratelyActive),
        very_active: tdee_from_bmr(bmr, ActivityLevel::VeryActive),
        extremely_active: tdee_from_bmr(bmr, ActivityLevel::ExtremelyActive),
    }
}

/// Round to the nearest integer with halves going up, including for negatives
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
