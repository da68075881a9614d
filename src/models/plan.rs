//! Meal plan models
//!
//! A day holds four ordered meal slots; a week holds seven fixed days. Plans
//! are never edited in place: every change produces a new `WeekPlan`, so a
//! snapshot handed to a reader stays consistent.

use serde::{Deserialize, Serialize};

use super::nutrition::total_of;
use super::{DayOfWeek, Meal, MealDraft, MealId, MealSlot, NutritionTotal};

/// Meals planned for one day, by slot, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub breakfast: Vec<Meal>,
    pub lunch: Vec<Meal>,
    pub dinner: Vec<Meal>,
    pub snacks: Vec<Meal>,
}

impl DayPlan {
    /// Meals in one slot
    pub fn slot(&self, slot: MealSlot) -> &[Meal] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snacks => &self.snacks,
        }
    }

    fn slot_mut(&mut self, slot: MealSlot) -> &mut Vec<Meal> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snacks => &mut self.snacks,
        }
    }

    /// All meals: breakfast, lunch, dinner, then snacks
    pub fn meals(&self) -> impl Iterator<Item = &Meal> {
        MealSlot::ALL.into_iter().flat_map(move |slot| self.slot(slot).iter())
    }

    pub fn meal_count(&self) -> usize {
        MealSlot::ALL.iter().map(|slot| self.slot(*slot).len()).sum()
    }

    /// Totals for one slot
    pub fn slot_total(&self, slot: MealSlot) -> NutritionTotal {
        total_of(self.slot(slot))
    }

    /// Totals for the whole day
    pub fn total(&self) -> NutritionTotal {
        day_total(self)
    }
}

/// Totals across all four slots of a day
pub fn day_total(plan: &DayPlan) -> NutritionTotal {
    total_of(plan.meals())
}

/// Seven day plans plus the id counter for new meals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    days: [DayPlan; 7],
    last_id: u64,
}

impl WeekPlan {
    /// An empty week
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day(&self, day: DayOfWeek) -> &DayPlan {
        &self.days[day.index()]
    }

    /// Days Monday through Sunday
    pub fn days(&self) -> impl Iterator<Item = (DayOfWeek, &DayPlan)> {
        DayOfWeek::ALL.into_iter().map(move |day| (day, self.day(day)))
    }

    pub fn meal_count(&self) -> usize {
        self.days.iter().map(DayPlan::meal_count).sum()
    }

    /// Copy of this plan with the meal appended to the end of its slot
    pub fn with_meal(&self, day: DayOfWeek, slot: MealSlot, draft: MealDraft) -> (Self, MealId) {
        let mut next = self.clone();
        next.last_id += 1;
        let id = MealId(next.last_id);
        next.days[day.index()].slot_mut(slot).push(draft.into_meal(id));
        (next, id)
    }

    /// Copy of this plan without the meal, or None if the slot has no such id
    pub fn without_meal(&self, day: DayOfWeek, slot: MealSlot, id: MealId) -> Option<Self> {
        let position = self.day(day).slot(slot).iter().position(|m| m.id == id)?;
        let mut next = self.clone();
        next.days[day.index()].slot_mut(slot).remove(position);
        Some(next)
    }
}
