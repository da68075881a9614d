//! FitPlan Status Tool
//!
//! Runtime status and the usage guide for assistants.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::session::SessionStore;

/// Planner usage instructions for AI assistants
pub const PLANNER_INSTRUCTIONS: &str = r#"
# FitPlan Instructions

FitPlan keeps everything in memory for the current session. Nothing is saved
when the server stops.

## Energy (BMR / TDEE)

Call `calculate_energy` with age (years), weight (lbs), height (inches) and
sex (`male` or `female`). Pass values exactly as the user typed them.

- If any of age, weight, or height is missing, zero, or not a number, nothing
  is recalculated: the response has `calculated: false`, a `reason`, and the
  previous estimate (if any).
- BMR is rounded to whole calories. Each activity level multiplies the
  unrounded BMR and then rounds.

| Level | Factor |
|-------|--------|
| Sedentary (little/no exercise) | 1.2 |
| Lightly active (1-3 days/week) | 1.375 |
| Moderately active (3-5 days/week) | 1.55 |
| Very active (6-7 days/week) | 1.725 |
| Extremely active (2x/day) | 1.9 |

## Meal Planning

The week has seven days (monday..sunday), each with four slots: breakfast,
lunch, dinner, snacks.

1. `add_meal` with day, slot, name, calories, and optional protein/carbs/fat
   in grams. Name and calories are required; blank macros count as 0.
2. `get_day_plan` shows every slot with its meals and totals plus the day total.
3. `get_week_summary` shows calories and macros for all seven days.
4. `remove_meal` takes the day, slot, and the meal `id` returned by `add_meal`.

## Progress Tracking

1. `add_progress_entry` with weight (lbs, required) and any of body_fat (%),
   muscle_mass (lbs), waist/chest/arms/thighs (inches), notes. The entry is
   dated today. Fields left blank are not recorded; a 0 is recorded as 0.
2. `get_progress_summary` compares the two most recent entries. Each metric
   has a `trend`:
   - `favorable` - weight, body fat, and measurements went down, or muscle
     mass went up
   - `unfavorable` - the opposite
   - `neutral` - no change
   - `unknown` - fewer than two entries, or the metric is missing from one
3. `list_progress_entries` returns the history, newest first.
4. `remove_progress_entry` deletes an entry by `id`.
"#;

/// Status response
#[derive(Debug, Serialize)]
pub struct FitPlanStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub has_energy_estimate: bool,
    pub planned_meals: usize,
    pub progress_entries: usize,
}

/// Tracks server start time for uptime reporting
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self, store: &SessionStore) -> Result<FitPlanStatus, String> {
        let build_info = BuildInfo::current();

        let (has_energy_estimate, planned_meals, progress_entries) = store
            .with_session(|s| (s.estimate().is_some(), s.plan().meal_count(), s.history().len()))
            .map_err(|e| format!("Session error: {}", e))?;

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        Ok(FitPlanStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            has_energy_estimate,
            planned_meals,
            progress_entries,
        })
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
