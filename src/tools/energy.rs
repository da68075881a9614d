//! Energy MCP Tools
//!
//! Tools for estimating BMR and TDEE.

use serde::Serialize;

use crate::energy::{ActivityLevel, EnergyEstimate, EstimateForm, Sex};
use crate::session::SessionStore;

/// TDEE for one activity level
#[derive(Debug, Serialize)]
pub struct ActivityRow {
    pub level: &'static str,
    pub description: &'static str,
    pub factor: f64,
    pub calories: i64,
}

/// Estimate with one row per activity level
#[derive(Debug, Serialize)]
pub struct EnergyDetail {
    pub bmr: i64,
    pub activity_levels: Vec<ActivityRow>,
}

impl From<EnergyEstimate> for EnergyDetail {
    fn from(estimate: EnergyEstimate) -> Self {
        Self {
            bmr: estimate.bmr,
            activity_levels: ActivityLevel::ALL
                .iter()
                .map(|level| ActivityRow {
                    level: level.as_str(),
                    description: level.description(),
                    factor: level.factor(),
                    calories: estimate.tdee(*level),
                })
                .collect(),
        }
    }
}

/// Response for calculate_energy
#[derive(Debug, Serialize)]
pub struct CalculateEnergyResponse {
    /// false when the inputs were rejected and the previous estimate was kept
    pub calculated: bool,
    pub reason: Option<String>,
    pub estimate: Option<EnergyDetail>,
}

/// Response for get_energy_estimate
#[derive(Debug, Serialize)]
pub struct EnergyEstimateResponse {
    pub estimate: Option<EnergyDetail>,
}

/// Calculate BMR/TDEE from entered text
pub fn calculate_energy(
    store: &SessionStore,
    age: &str,
    weight: &str,
    height: &str,
    sex: &str,
) -> Result<CalculateEnergyResponse, String> {
    let sex = Sex::from_str(sex)
        .ok_or_else(|| format!("Unknown sex: {} (use male or female)", sex))?;
    let form = EstimateForm {
        age: age.to_string(),
        weight: weight.to_string(),
        height: height.to_string(),
    };

    store
        .with_session_mut(|session| match session.calculate_energy(&form, sex) {
            Ok(estimate) => CalculateEnergyResponse {
                calculated: true,
                reason: None,
                estimate: Some(estimate.into()),
            },
            Err(e) => CalculateEnergyResponse {
                calculated: false,
                reason: Some(e.to_string()),
                estimate: session.estimate().map(EnergyDetail::from),
            },
        })
        .map_err(|e| format!("Session error: {}", e))
}

/// Get the current estimate, if any
pub fn get_energy_estimate(store: &SessionStore) -> Result<EnergyEstimateResponse, String> {
    let estimate = store
        .with_session(|session| session.estimate())
        .map_err(|e| format!("Session error: {}", e))?;

    Ok(EnergyEstimateResponse {
        estimate: estimate.map(EnergyDetail::from),
    })
}
