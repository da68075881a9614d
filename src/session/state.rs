//! Session state
//!
//! Everything the user has entered during one run: the last energy estimate,
//! the week's meal plan, and the progress history. Submissions that fail to
//! parse leave the state exactly as it was.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::energy::{estimate, AnthropometricInput, EnergyEstimate, EstimateForm, Sex};
use crate::input::InputResult;
use crate::models::{
    DayOfWeek, EntryId, MealDraft, MealForm, MealId, MealSlot, ProgressDraft, ProgressForm,
    ProgressHistory, WeekPlan,
};
use crate::progress::{summarize, ProgressSummary};

/// In-memory session
#[derive(Debug, Clone, Default)]
pub struct Session {
    estimate: Option<EnergyEstimate>,
    plan: Arc<WeekPlan>,
    history: Arc<ProgressHistory>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last successful energy estimate
    pub fn estimate(&self) -> Option<EnergyEstimate> {
        self.estimate
    }

    /// Snapshot of the current week plan
    pub fn plan(&self) -> Arc<WeekPlan> {
        Arc::clone(&self.plan)
    }

    /// Snapshot of the current progress history
    pub fn history(&self) -> Arc<ProgressHistory> {
        Arc::clone(&self.history)
    }

    /// Estimate BMR/TDEE from a form and make it the current estimate.
    /// A rejected form leaves the previous estimate in place.
    pub fn calculate_energy(
        &mut self,
        form: &EstimateForm,
        sex: Sex,
    ) -> InputResult<EnergyEstimate> {
        let input = AnthropometricInput::from_form(form, sex).map_err(|e| {
            debug!(error = %e, "Energy estimate skipped");
            e
        })?;

        let result = estimate(&input);
        info!(bmr = result.bmr, sex = sex.as_str(), "Energy estimate updated");
        self.estimate = Some(result);
        Ok(result)
    }

    /// Append a meal to a day's slot. A rejected form changes nothing.
    pub fn add_meal(
        &mut self,
        day: DayOfWeek,
        slot: MealSlot,
        form: &MealForm,
    ) -> InputResult<MealId> {
        let draft = MealDraft::from_form(form).map_err(|e| {
            debug!(error = %e, day = day.as_str(), slot = slot.as_str(), "Meal not added");
            e
        })?;

        let (plan, id) = self.plan.with_meal(day, slot, draft);
        self.plan = Arc::new(plan);
        info!(%id, day = day.as_str(), slot = slot.as_str(), "Meal added");
        Ok(id)
    }

    /// Remove a meal from a day's slot. Returns false if it was not there.
    pub fn remove_meal(&mut self, day: DayOfWeek, slot: MealSlot, id: MealId) -> bool {
        match self.plan.without_meal(day, slot, id) {
            Some(plan) => {
                self.plan = Arc::new(plan);
                info!(%id, day = day.as_str(), slot = slot.as_str(), "Meal removed");
                true
            }
            None => {
                debug!(%id, day = day.as_str(), slot = slot.as_str(), "No meal to remove");
                false
            }
        }
    }

    /// Record a progress entry dated `date`. A rejected form changes nothing.
    pub fn add_progress_entry(
        &mut self,
        form: &ProgressForm,
        date: NaiveDate,
    ) -> InputResult<EntryId> {
        let draft = ProgressDraft::from_form(form).map_err(|e| {
            debug!(error = %e, "Progress entry not added");
            e
        })?;

        let (history, id) = self.history.with_entry(draft, date);
        self.history = Arc::new(history);
        info!(%id, %date, "Progress entry added");
        Ok(id)
    }

    /// Remove a progress entry. Returns false if no entry has that id.
    pub fn remove_progress_entry(&mut self, id: EntryId) -> bool {
        match self.history.without_entry(id) {
            Some(history) => {
                self.history = Arc::new(history);
                info!(%id, "Progress entry removed");
                true
            }
            None => {
                debug!(%id, "No progress entry to remove");
                false
            }
        }
    }

    /// Deltas between the two most recent entries
    pub fn progress_summary(&self) -> ProgressSummary {
        summarize(&self.history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputError;
    use crate::models::{Metric, NutritionTotal};
    use crate::progress::Trend;

    fn estimate_form(age: &str, weight: &str, height: &str) -> EstimateForm {
        EstimateForm {
            age: age.to_string(),
            weight: weight.to_string(),
            height: height.to_string(),
        }
    }

    fn meal_form(name: &str, calories: &str) -> MealForm {
        MealForm {
            name: name.to_string(),
            calories: calories.to_string(),
            protein: "10".to_string(),
            carbs: "20".to_string(),
            fat: "5".to_string(),
        }
    }

    fn progress_form(weight: &str, muscle_mass: &str) -> ProgressForm {
        ProgressForm {
            weight: weight.to_string(),
            muscle_mass: muscle_mass.to_string(),
            ..Default::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_invalid_estimate_keeps_prior() {
        let mut session = Session::new();
        assert!(session.calculate_energy(&estimate_form("", "154", "69"), Sex::Male).is_err());
        assert_eq!(session.estimate(), None);

        let first = session.calculate_energy(&estimate_form("25", "154", "69"), Sex::Male).unwrap();
        assert_eq!(first.bmr, 1723);

        let rejected = session.calculate_energy(&estimate_form("25", "0", "69"), Sex::Female);
        assert_eq!(rejected, Err(InputError::Zero("weight")));
        assert_eq!(session.estimate(), Some(first));
    }

    #[test]
    fn test_estimate_replaced_wholesale() {
        let mut session = Session::new();
        session.calculate_energy(&estimate_form("25", "154", "69"), Sex::Male).unwrap();
        let female = session.calculate_energy(&estimate_form("25", "154", "69"), Sex::Female);
        assert_eq!(female.map(|e| e.bmr), Ok(1528));
        assert_eq!(session.estimate().map(|e| e.bmr), Some(1528));
    }

    #[test]
    fn test_add_and_remove_meal() {
        let mut session = Session::new();
        let id = session
            .add_meal(DayOfWeek::Monday, MealSlot::Breakfast, &meal_form("Oatmeal", "300"))
            .unwrap();
        assert_eq!(
            session.plan().day(DayOfWeek::Monday).total(),
            NutritionTotal { calories: 300, protein: 10, carbs: 20, fat: 5 }
        );

        assert!(!session.remove_meal(DayOfWeek::Monday, MealSlot::Lunch, id));
        assert!(session.remove_meal(DayOfWeek::Monday, MealSlot::Breakfast, id));
        assert_eq!(session.plan().meal_count(), 0);
    }

    #[test]
    fn test_rejected_meal_leaves_plan_untouched() {
        let mut session = Session::new();
        let before = session.plan();
        assert!(session
            .add_meal(DayOfWeek::Monday, MealSlot::Lunch, &meal_form("", "300"))
            .is_err());
        assert!(session
            .add_meal(DayOfWeek::Monday, MealSlot::Lunch, &meal_form("Soup", ""))
            .is_err());
        assert!(Arc::ptr_eq(&before, &session.plan()));
    }

    #[test]
    fn test_snapshot_survives_mutation() {
        let mut session = Session::new();
        let snapshot = session.plan();
        session.add_meal(DayOfWeek::Friday, MealSlot::Dinner, &meal_form("Pizza", "800")).unwrap();
        assert_eq!(snapshot.meal_count(), 0);
        assert_eq!(session.plan().meal_count(), 1);
    }

    #[test]
    fn test_progress_flow() {
        let mut session = Session::new();
        assert!(session.add_progress_entry(&progress_form("", ""), today()).is_err());
        assert!(session.history().is_empty());

        session.add_progress_entry(&progress_form("160", "130"), today()).unwrap();
        let summary = session.progress_summary();
        assert_eq!(summary.metric(Metric::Weight).map(|d| d.trend), Some(Trend::Unknown));

        let second = session.add_progress_entry(&progress_form("155", "125"), today()).unwrap();
        let summary = session.progress_summary();
        assert_eq!(summary.metric(Metric::Weight).map(|d| d.trend), Some(Trend::Favorable));
        assert_eq!(summary.metric(Metric::MuscleMass).map(|d| d.trend), Some(Trend::Unfavorable));

        assert!(session.remove_progress_entry(second));
        assert!(!session.remove_progress_entry(second));
        assert_eq!(session.history().len(), 1);
    }
}
