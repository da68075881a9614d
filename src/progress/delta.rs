//! Change between two measurements and how to read it

use serde::{Deserialize, Serialize};

/// Shown in place of a change that cannot be computed
pub const CHANGE_PLACEHOLDER: &str = "—";

/// Direction of a change relative to the goal for its metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Favorable,
    Unfavorable,
    Neutral,
    Unknown,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Favorable => "favorable",
            Trend::Unfavorable => "unfavorable",
            Trend::Neutral => "neutral",
            Trend::Unknown => "unknown",
        }
    }
}

/// `current - previous`, if both were recorded
pub fn delta(current: Option<f64>, previous: Option<f64>) -> Option<f64> {
    Some(current? - previous?)
}

/// Classify a change for a metric where lower may or may not be better
pub fn classify(change: Option<f64>, lower_is_better: bool) -> Trend {
    let Some(change) = change else {
        return Trend::Unknown;
    };

    if change == 0.0 {
        Trend::Neutral
    } else if (change < 0.0) == lower_is_better {
        Trend::Favorable
    } else {
        Trend::Unfavorable
    }
}

/// Render a change with a sign, one decimal, and a unit suffix
///
/// Examples:
/// - Some(-5.0), "lbs" -> "-5.0lbs"
/// - Some(1.24), "%" -> "+1.2%"
/// - Some(0.0), "in" -> "+0.0in"
/// - None, _ -> "—"
pub fn format_change(change: Option<f64>, unit: &str) -> String {
    let Some(change) = change else {
        return CHANGE_PLACEHOLDER.to_string();
    };

    // Collapse -0.0 so it does not print as "+-0.0"
    let change = if change == 0.0 { 0.0 } else { change };
    let sign = if change >= 0.0 { "+" } else { "" };
    // Ties round away from zero; `{:.1}` alone would round them to even
    let rounded = (change.abs() * 10.0).round() / 10.0 * change.signum();
    format!("{}{:.1}{}", sign, rounded, unit)
}
