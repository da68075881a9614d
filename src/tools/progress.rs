//! Progress MCP Tools
//!
//! Tools for recording body measurements and reading how they changed.

use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::models::{EntryId, ProgressEntry, ProgressForm};
use crate::progress::ProgressSummary;
use crate::session::SessionStore;

/// Response for add_progress_entry
#[derive(Debug, Serialize)]
pub struct AddProgressEntryResponse {
    /// false when the form was rejected and nothing changed
    pub added: bool,
    pub reason: Option<String>,
    pub id: Option<EntryId>,
    pub date: NaiveDate,
    pub entry_count: usize,
}

/// Response for list_progress_entries
#[derive(Debug, Serialize)]
pub struct ListProgressEntriesResponse {
    pub entries: Vec<ProgressEntry>,
    pub total: usize,
}

/// Response for delete operations
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub deleted_id: EntryId,
}

/// Record a progress entry dated today (UTC)
pub fn add_progress_entry(
    store: &SessionStore,
    form: &ProgressForm,
) -> Result<AddProgressEntryResponse, String> {
    add_progress_entry_on(store, form, Utc::now().date_naive())
}

/// Record a progress entry with an explicit date
pub fn add_progress_entry_on(
    store: &SessionStore,
    form: &ProgressForm,
    date: NaiveDate,
) -> Result<AddProgressEntryResponse, String> {
    let (result, entry_count) = store
        .with_session_mut(|session| {
            let result = session.add_progress_entry(form, date);
            (result, session.history().len())
        })
        .map_err(|e| format!("Session error: {}", e))?;

    let (id, reason) = match result {
        Ok(id) => (Some(id), None),
        Err(e) => (None, Some(e.to_string())),
    };

    Ok(AddProgressEntryResponse {
        added: id.is_some(),
        reason,
        id,
        date,
        entry_count,
    })
}

/// Remove a progress entry
pub fn remove_progress_entry(store: &SessionStore, id: u64) -> Result<DeleteResponse, String> {
    let id = EntryId(id);
    let success = store
        .with_session_mut(|session| session.remove_progress_entry(id))
        .map_err(|e| format!("Session error: {}", e))?;

    Ok(DeleteResponse {
        success,
        deleted_id: id,
    })
}

/// List all entries, newest first
pub fn list_progress_entries(store: &SessionStore) -> Result<ListProgressEntriesResponse, String> {
    let history = store
        .with_session(|session| session.history())
        .map_err(|e| format!("Session error: {}", e))?;

    Ok(ListProgressEntriesResponse {
        entries: history.entries().to_vec(),
        total: history.len(),
    })
}

/// Latest entry and per-metric changes
pub fn get_progress_summary(store: &SessionStore) -> Result<ProgressSummary, String> {
    store
        .with_session(|session| session.progress_summary())
        .map_err(|e| format!("Session error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Metric;
    use crate::progress::Trend;

    fn form(weight: &str, waist: &str) -> ProgressForm {
        ProgressForm {
            weight: weight.to_string(),
            waist: waist.to_string(),
            ..Default::default()
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, day).unwrap()
    }

    #[test]
    fn test_add_and_list() {
        let store = SessionStore::new();
        let first = add_progress_entry_on(&store, &form("160", "34"), date(1)).unwrap();
        assert!(first.added);
        assert_eq!(first.entry_count, 1);

        add_progress_entry_on(&store, &form("158", "33.5"), date(8)).unwrap();

        let list = list_progress_entries(&store).unwrap();
        assert_eq!(list.total, 2);
        assert_eq!(list.entries[0].weight, 158.0);
        assert_eq!(list.entries[1].date, date(1));
    }

    #[test]
    fn test_rejected_entry() {
        let store = SessionStore::new();
        let response = add_progress_entry_on(&store, &form("", "34"), date(1)).unwrap();
        assert!(!response.added);
        assert_eq!(response.reason.as_deref(), Some("weight is required"));
        assert_eq!(response.entry_count, 0);
    }

    #[test]
    fn test_summary() {
        let store = SessionStore::new();
        add_progress_entry_on(&store, &form("160", "34"), date(1)).unwrap();
        add_progress_entry_on(&store, &form("155", "34.5"), date(8)).unwrap();

        let summary = get_progress_summary(&store).unwrap();
        assert_eq!(summary.latest_date, Some(date(8)));

        let weight = summary.metric(Metric::Weight).unwrap();
        assert_eq!(weight.trend, Trend::Favorable);

        let waist = summary.metric(Metric::Waist).unwrap();
        assert_eq!(waist.trend, Trend::Unfavorable);
        assert_eq!(waist.formatted_change, "+0.5in");
    }

    #[test]
    fn test_remove_entry() {
        let store = SessionStore::new();
        let added = add_progress_entry_on(&store, &form("160", ""), date(1)).unwrap();
        let id = added.id.unwrap();

        assert!(remove_progress_entry(&store, id.0).unwrap().success);
        assert!(!remove_progress_entry(&store, id.0).unwrap().success);
        assert_eq!(list_progress_entries(&store).unwrap().total, 0);
    }

    #[test]
    fn test_add_uses_today() {
        let store = SessionStore::new();
        let response = add_progress_entry(&store, &form("150", "")).unwrap();
        assert!(response.added);
        assert_eq!(list_progress_entries(&store).unwrap().entries[0].date, response.date);
    }
}
