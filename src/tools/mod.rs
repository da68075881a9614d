//! FitPlan Tools module
//!
//! MCP tool implementations over the session.

pub mod energy;
pub mod meals;
pub mod progress;
pub mod status;
