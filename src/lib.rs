//! FitPlan Library
//!
//! BMR/TDEE estimation, meal macro aggregation, and progress deltas.

pub mod build_info;
pub mod energy;
pub mod input;
pub mod mcp;
pub mod models;
pub mod progress;
pub mod session;
pub mod tools;
