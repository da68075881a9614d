//! Shared session handle
//!
//! Wraps the single in-memory session so tool handlers can reach it.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use super::Session;

/// Session access errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session lock poisoned")]
    Poisoned,
}

/// Result type for session access
pub type SessionResult<T> = Result<T, SessionError>;

/// Cloneable handle to the session
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<Session>>,
}

impl SessionStore {
    /// Create a store around an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute a closure with read access to the session
    pub fn with_session<F, T>(&self, f: F) -> SessionResult<T>
    where
        F: FnOnce(&Session) -> T,
    {
        let session = self.inner.lock().map_err(|_| SessionError::Poisoned)?;
        Ok(f(&session))
    }

    /// Execute a closure with write access to the session
    pub fn with_session_mut<F, T>(&self, f: F) -> SessionResult<T>
    where
        F: FnOnce(&mut Session) -> T,
    {
        let mut session = self.inner.lock().map_err(|_| SessionError::Poisoned)?;
        Ok(f(&mut session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOfWeek, MealForm, MealSlot};

    #[test]
    fn test_clones_share_session() {
        let store = SessionStore::new();
        let other = store.clone();

        let form = MealForm {
            name: "Toast".to_string(),
            calories: "120".to_string(),
            ..Default::default()
        };
        let added = store
            .with_session_mut(|s| s.add_meal(DayOfWeek::Monday, MealSlot::Breakfast, &form))
            .unwrap();
        assert!(added.is_ok());

        let count = other.with_session(|s| s.plan().meal_count()).unwrap();
        assert_eq!(count, 1);
    }
}
