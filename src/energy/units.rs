//! Imperial to metric conversion constants
//!
//! The estimator takes pounds and inches; the equation works in kilograms and
//! centimeters. These are the only two conversions the planner performs.

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Convert pounds to kilograms
pub fn pounds_to_kg(pounds: f64) -> f64 {
    pounds * KG_PER_LB
}

/// Convert inches to centimeters
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}
