//! Data models
//!
//! Meals, week plans, and progress entries held in the session.

mod meal;
mod nutrition;
mod plan;
mod progress;

pub use meal::{DayOfWeek, Meal, MealDraft, MealForm, MealId, MealSlot};
pub use nutrition::{total_of, NutritionTotal};
pub use plan::{day_total, DayPlan, WeekPlan};
pub use progress::{
    EntryId, Metric, ProgressDraft, ProgressEntry, ProgressForm, ProgressHistory,
};
