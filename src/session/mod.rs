//! Session module
//!
//! In-memory user state and the shared handle tools use to reach it.

pub mod state;
pub mod store;

pub use state::Session;
pub use store::{SessionError, SessionResult, SessionStore};
