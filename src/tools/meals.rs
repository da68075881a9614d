//! Meal Plan MCP Tools
//!
//! Tools for planning meals across the week and reading macro totals.

use serde::Serialize;

use crate::models::{DayOfWeek, DayPlan, Meal, MealForm, MealId, MealSlot, NutritionTotal};
use crate::session::SessionStore;

/// Meals in one slot with their totals
#[derive(Debug, Serialize)]
pub struct SlotDetail {
    pub meals: Vec<Meal>,
    pub total: NutritionTotal,
}

/// Slots of a day
#[derive(Debug, Serialize)]
pub struct DayMeals {
    pub breakfast: SlotDetail,
    pub lunch: SlotDetail,
    pub dinner: SlotDetail,
    pub snacks: SlotDetail,
}

/// Full view of one day
#[derive(Debug, Serialize)]
pub struct DayPlanDetail {
    pub day: &'static str,
    pub display_name: &'static str,
    pub meals: DayMeals,
    pub nutrition_total: NutritionTotal,
}

/// Day summary for the week view
#[derive(Debug, Serialize)]
pub struct DaySummary {
    pub day: &'static str,
    pub label: &'static str,
    pub meal_count: usize,
    pub nutrition_total: NutritionTotal,
}

/// Response for get_week_summary
#[derive(Debug, Serialize)]
pub struct WeekSummaryResponse {
    pub days: Vec<DaySummary>,
    pub meal_count: usize,
}

/// Response for add_meal
#[derive(Debug, Serialize)]
pub struct AddMealResponse {
    /// false when the form was rejected and nothing changed
    pub added: bool,
    pub reason: Option<String>,
    pub id: Option<MealId>,
    pub day: &'static str,
    pub slot: &'static str,
    pub slot_total: NutritionTotal,
    pub day_total: NutritionTotal,
}

/// Response for remove_meal
#[derive(Debug, Serialize)]
pub struct RemoveMealResponse {
    pub removed: bool,
    pub id: MealId,
    pub day: &'static str,
    pub slot: &'static str,
    pub day_total: NutritionTotal,
}

fn parse_day(day: &str) -> Result<DayOfWeek, String> {
    DayOfWeek::from_str(day).ok_or_else(|| format!("Unknown day: {}", day))
}

fn parse_slot(slot: &str) -> Result<MealSlot, String> {
    MealSlot::from_str(slot).ok_or_else(|| {
        format!(
            "Unknown meal slot: {} (use breakfast, lunch, dinner, or snacks)",
            slot
        )
    })
}

fn slot_detail(plan: &DayPlan, slot: MealSlot) -> SlotDetail {
    SlotDetail {
        meals: plan.slot(slot).to_vec(),
        total: plan.slot_total(slot),
    }
}

fn day_detail(day: DayOfWeek, plan: &DayPlan) -> DayPlanDetail {
    DayPlanDetail {
        day: day.as_str(),
        display_name: day.display_name(),
        meals: DayMeals {
            breakfast: slot_detail(plan, MealSlot::Breakfast),
            lunch: slot_detail(plan, MealSlot::Lunch),
            dinner: slot_detail(plan, MealSlot::Dinner),
            snacks: slot_detail(plan, MealSlot::Snacks),
        },
        nutrition_total: plan.total(),
    }
}

/// Get a day's meals and totals
pub fn get_day_plan(store: &SessionStore, day: &str) -> Result<DayPlanDetail, String> {
    let day = parse_day(day)?;
    let plan = store
        .with_session(|session| session.plan())
        .map_err(|e| format!("Session error: {}", e))?;

    Ok(day_detail(day, plan.day(day)))
}

/// Get meal counts and totals for all seven days
pub fn get_week_summary(store: &SessionStore) -> Result<WeekSummaryResponse, String> {
    let plan = store
        .with_session(|session| session.plan())
        .map_err(|e| format!("Session error: {}", e))?;

    let days = plan
        .days()
        .map(|(day, day_plan)| DaySummary {
            day: day.as_str(),
            label: day.short_name(),
            meal_count: day_plan.meal_count(),
            nutrition_total: day_plan.total(),
        })
        .collect();

    Ok(WeekSummaryResponse {
        days,
        meal_count: plan.meal_count(),
    })
}

/// Add a meal to a day's slot
pub fn add_meal(
    store: &SessionStore,
    day: &str,
    slot: &str,
    form: &MealForm,
) -> Result<AddMealResponse, String> {
    let day = parse_day(day)?;
    let slot = parse_slot(slot)?;

    let (result, plan) = store
        .with_session_mut(|session| {
            let result = session.add_meal(day, slot, form);
            (result, session.plan())
        })
        .map_err(|e| format!("Session error: {}", e))?;

    let day_plan = plan.day(day);
    let (id, reason) = match result {
        Ok(id) => (Some(id), None),
        Err(e) => (None, Some(e.to_string())),
    };

    Ok(AddMealResponse {
        added: id.is_some(),
        reason,
        id,
        day: day.as_str(),
        slot: slot.as_str(),
        slot_total: day_plan.slot_total(slot),
        day_total: day_plan.total(),
    })
}

/// Remove a meal from a day's slot
pub fn remove_meal(
    store: &SessionStore,
    day: &str,
    slot: &str,
    id: u64,
) -> Result<RemoveMealResponse, String> {
    let day = parse_day(day)?;
    let slot = parse_slot(slot)?;
    let id = MealId(id);

    let (removed, plan) = store
        .with_session_mut(|session| {
            let removed = session.remove_meal(day, slot, id);
            (removed, session.plan())
        })
        .map_err(|e| format!("Session error: {}", e))?;

    Ok(RemoveMealResponse {
        removed,
        id,
        day: day.as_str(),
        slot: slot.as_str(),
        day_total: plan.day(day).total(),
    })
}
