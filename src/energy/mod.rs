//! Energy estimation module
//!
//! BMR/TDEE estimation and the unit conversions it needs.

pub mod estimator;
pub mod units;

pub use estimator::{
    basal_metabolic_rate, estimate, tdee_from_bmr, ActivityLevel, AnthropometricInput,
    EnergyEstimate, EstimateForm, Sex,
};
pub use units::{inches_to_cm, pounds_to_kg, CM_PER_INCH, KG_PER_LB};
