//! FitPlan MCP Server Implementation
//!
//! Implements the MCP server with all FitPlan tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::models::{MealForm, ProgressForm};
use crate::session::SessionStore;
use crate::tools::energy;
use crate::tools::meals;
use crate::tools::progress;
use crate::tools::status::StatusTracker;

/// FitPlan MCP Service
#[derive(Clone)]
pub struct FitPlanService {
    status_tracker: Arc<StatusTracker>,
    store: SessionStore,
    tool_router: ToolRouter<FitPlanService>,
}

impl FitPlanService {
    pub fn new(store: SessionStore) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new()),
            store,
            tool_router: Self::tool_router(),
        }
    }
}

/// Serialize a tool response as pretty JSON text
fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Energy Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateEnergyParams {
    /// Age in years, as entered
    pub age: String,
    /// Weight in pounds, as entered
    pub weight: String,
    /// Height in inches, as entered
    pub height: String,
    /// "male" or "female"
    pub sex: String,
}

// ============================================================================
// Meal Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetDayPlanParams {
    /// Day of week (monday..sunday)
    pub day: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddMealParams {
    /// Day of week (monday..sunday)
    pub day: String,
    /// Meal slot: breakfast, lunch, dinner, or snacks
    pub slot: String,
    /// Meal name
    pub name: String,
    /// Calories, as entered
    pub calories: String,
    /// Protein grams, as entered (blank counts as 0)
    #[serde(default)]
    pub protein: String,
    /// Carbohydrate grams, as entered (blank counts as 0)
    #[serde(default)]
    pub carbs: String,
    /// Fat grams, as entered (blank counts as 0)
    #[serde(default)]
    pub fat: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RemoveMealParams {
    /// Day of week (monday..sunday)
    pub day: String,
    /// Meal slot: breakfast, lunch, dinner, or snacks
    pub slot: String,
    /// Meal ID returned by add_meal
    pub id: u64,
}

// ============================================================================
// Progress Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddProgressEntryParams {
    /// Weight in pounds (required)
    pub weight: String,
    /// Body fat percentage
    #[serde(default)]
    pub body_fat: String,
    /// Muscle mass in pounds
    #[serde(default)]
    pub muscle_mass: String,
    /// Waist in inches
    #[serde(default)]
    pub waist: String,
    /// Chest in inches
    #[serde(default)]
    pub chest: String,
    /// Arms in inches
    #[serde(default)]
    pub arms: String,
    /// Thighs in inches
    #[serde(default)]
    pub thighs: String,
    /// Free-text notes
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RemoveProgressEntryParams {
    /// Progress entry ID
    pub id: u64,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FitPlanService {
    // --- Status ---

    #[tool(description = "Get the current status of the FitPlan service including build info, process information, and session counts")]
    async fn fitplan_status(&self) -> Result<CallToolResult, McpError> {
        let status = self
            .status_tracker
            .get_status(&self.store)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&status)
    }

    #[tool(description = "Get instructions for using the energy, meal planning, and progress tools. Call this at the start of a session.")]
    fn planner_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::PLANNER_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(PLANNER_INSTRUCTIONS)]))
    }

    // --- Energy ---

    #[tool(description = "Calculate BMR and TDEE for five activity levels. Invalid input keeps the previous estimate.")]
    fn calculate_energy(
        &self,
        Parameters(p): Parameters<CalculateEnergyParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = energy::calculate_energy(&self.store, &p.age, &p.weight, &p.height, &p.sex)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get the most recent BMR/TDEE estimate")]
    fn get_energy_estimate(&self) -> Result<CallToolResult, McpError> {
        let result = energy::get_energy_estimate(&self.store)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    // --- Meals ---

    #[tool(description = "Get a day's meals by slot with slot totals and the day total")]
    fn get_day_plan(
        &self,
        Parameters(p): Parameters<GetDayPlanParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = meals::get_day_plan(&self.store, &p.day)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Get meal counts and calorie/macro totals for every day of the week")]
    fn get_week_summary(&self) -> Result<CallToolResult, McpError> {
        let result = meals::get_week_summary(&self.store)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Add a meal to a day's slot. Name and calories are required.")]
    fn add_meal(
        &self,
        Parameters(p): Parameters<AddMealParams>,
    ) -> Result<CallToolResult, McpError> {
        let form = MealForm {
            name: p.name,
            calories: p.calories,
            protein: p.protein,
            carbs: p.carbs,
            fat: p.fat,
        };
        let result = meals::add_meal(&self.store, &p.day, &p.slot, &form)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Remove a meal from a day's slot by ID")]
    fn remove_meal(
        &self,
        Parameters(p): Parameters<RemoveMealParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = meals::remove_meal(&self.store, &p.day, &p.slot, p.id)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    // --- Progress ---

    #[tool(description = "Record a progress entry dated today. Weight is required; other measurements are optional.")]
    fn add_progress_entry(
        &self,
        Parameters(p): Parameters<AddProgressEntryParams>,
    ) -> Result<CallToolResult, McpError> {
        let form = ProgressForm {
            weight: p.weight,
            body_fat: p.body_fat,
            muscle_mass: p.muscle_mass,
            waist: p.waist,
            chest: p.chest,
            arms: p.arms,
            thighs: p.thighs,
            notes: p.notes,
        };
        let result = progress::add_progress_entry(&self.store, &form)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Delete a progress entry by ID")]
    fn remove_progress_entry(
        &self,
        Parameters(p): Parameters<RemoveProgressEntryParams>,
    ) -> Result<CallToolResult, McpError> {
        let result = progress::remove_progress_entry(&self.store, p.id)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "List all progress entries, newest first")]
    fn list_progress_entries(&self) -> Result<CallToolResult, McpError> {
        let result = progress::list_progress_entries(&self.store)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Compare the two most recent progress entries: change and trend for each metric")]
    fn get_progress_summary(&self) -> Result<CallToolResult, McpError> {
        let result = progress::get_progress_summary(&self.store)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for FitPlanService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "fitplan".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("FitPlan".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "FitPlan - energy estimates, weekly meal planning, and body progress tracking. \
                 Session data is kept in memory only. \
                 IMPORTANT: Call planner_instructions first. \
                 Energy: calculate_energy, get_energy_estimate. \
                 Meals: add_meal/remove_meal, get_day_plan, get_week_summary. \
                 Progress: add_progress_entry/remove_progress_entry, list_progress_entries, get_progress_summary."
                    .into(),
            ),
        }
    }
}
