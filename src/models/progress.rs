//! Progress entry model
//!
//! Dated body-measurement snapshots, kept newest first.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::input::{optional_float, optional_text, required_float, InputResult};

/// Progress entry identifier, unique within a history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tracked body metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Weight,
    BodyFat,
    MuscleMass,
    Waist,
    Chest,
    Arms,
    Thighs,
}

impl Metric {
    /// Metrics in display order
    pub const ALL: [Metric; 7] = [
        Metric::Weight,
        Metric::BodyFat,
        Metric::MuscleMass,
        Metric::Waist,
        Metric::Chest,
        Metric::Arms,
        Metric::Thighs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Weight => "weight",
            Metric::BodyFat => "body_fat",
            Metric::MuscleMass => "muscle_mass",
            Metric::Waist => "waist",
            Metric::Chest => "chest",
            Metric::Arms => "arms",
            Metric::Thighs => "thighs",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Metric::Weight => "Weight",
            Metric::BodyFat => "Body Fat",
            Metric::MuscleMass => "Muscle Mass",
            Metric::Waist => "Waist",
            Metric::Chest => "Chest",
            Metric::Arms => "Arms",
            Metric::Thighs => "Thighs",
        }
    }

    /// Unit suffix used when displaying changes
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Weight | Metric::MuscleMass => "lbs",
            Metric::BodyFat => "%",
            Metric::Waist | Metric::Chest | Metric::Arms | Metric::Thighs => "in",
        }
    }

    /// Whether a decrease counts as progress. Circumferences follow weight.
    pub fn lower_is_better(&self) -> bool {
        !matches!(self, Metric::MuscleMass)
    }

    /// This metric's value in an entry, if recorded
    pub fn value_of(&self, entry: &ProgressEntry) -> Option<f64> {
        match self {
            Metric::Weight => Some(entry.weight),
            Metric::BodyFat => entry.body_fat,
            Metric::MuscleMass => entry.muscle_mass,
            Metric::Waist => entry.waist,
            Metric::Chest => entry.chest,
            Metric::Arms => entry.arms,
            Metric::Thighs => entry.thighs,
        }
    }
}

/// A dated measurement snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub id: EntryId,
    pub date: NaiveDate,
    pub weight: f64, // lbs
    pub body_fat: Option<f64>, // percent
    pub muscle_mass: Option<f64>, // lbs
    pub waist: Option<f64>, // inches
    pub chest: Option<f64>,
    pub arms: Option<f64>,
    pub thighs: Option<f64>,
    pub notes: Option<String>,
}

/// Raw progress form as entered by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressForm {
    pub weight: String,
    #[serde(default)]
    pub body_fat: String,
    #[serde(default)]
    pub muscle_mass: String,
    #[serde(default)]
    pub waist: String,
    #[serde(default)]
    pub chest: String,
    #[serde(default)]
    pub arms: String,
    #[serde(default)]
    pub thighs: String,
    #[serde(default)]
    pub notes: String,
}

/// Validated measurements, waiting for an id and date
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressDraft {
    pub weight: f64,
    pub body_fat: Option<f64>,
    pub muscle_mass: Option<f64>,
    pub waist: Option<f64>,
    pub chest: Option<f64>,
    pub arms: Option<f64>,
    pub thighs: Option<f64>,
    pub notes: Option<String>,
}

impl ProgressDraft {
    /// Parse a form. Weight is required; every other measurement is kept
    /// only if it parses. A supplied zero is a recorded value.
    pub fn from_form(form: &ProgressForm) -> InputResult<Self> {
        Ok(Self {
            weight: required_float("weight", &form.weight)?,
            body_fat: optional_float(&form.body_fat),
            muscle_mass: optional_float(&form.muscle_mass),
            waist: optional_float(&form.waist),
            chest: optional_float(&form.chest),
            arms: optional_float(&form.arms),
            thighs: optional_float(&form.thighs),
            notes: optional_text(&form.notes),
        })
    }

    /// Attach an id and date
    pub fn into_entry(self, id: EntryId, date: NaiveDate) -> ProgressEntry {
        ProgressEntry {
            id,
            date,
            weight: self.weight,
            body_fat: self.body_fat,
            muscle_mass: self.muscle_mass,
            waist: self.waist,
            chest: self.chest,
            arms: self.arms,
            thighs: self.thighs,
            notes: self.notes,
        }
    }
}

/// Progress entries, newest first by insertion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressHistory {
    entries: Vec<ProgressEntry>,
    last_id: u64,
}

impl ProgressHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries, newest first
    pub fn entries(&self) -> &[ProgressEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently added entry
    pub fn latest(&self) -> Option<&ProgressEntry> {
        self.entries.first()
    }

    /// Entry added just before the latest
    pub fn previous(&self) -> Option<&ProgressEntry> {
        self.entries.get(1)
    }

    /// Copy of this history with the entry at the front
    pub fn with_entry(&self, draft: ProgressDraft, date: NaiveDate) -> (Self, EntryId) {
        let mut next = self.clone();
        next.last_id += 1;
        let id = EntryId(next.last_id);
        next.entries.insert(0, draft.into_entry(id, date));
        (next, id)
    }

    /// Copy of this history without the entry, or None if no entry has that id
    pub fn without_entry(&self, id: EntryId) -> Option<Self> {
        let position = self.entries.iter().position(|e| e.id == id)?;
        let mut next = self.clone();
        next.entries.remove(position);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn weight_only(weight: f64) -> ProgressDraft {
        ProgressDraft {
            weight,
            body_fat: None,
            muscle_mass: None,
            waist: None,
            chest: None,
            arms: None,
            thighs: None,
            notes: None,
        }
    }

    #[test]
    fn test_draft_requires_weight() {
        let form = ProgressForm {
            body_fat: "18".to_string(),
            ..Default::default()
        };
        assert!(ProgressDraft::from_form(&form).is_err());

        let form = ProgressForm {
            weight: "heavy".to_string(),
            ..Default::default()
        };
        assert!(ProgressDraft::from_form(&form).is_err());
    }

    #[test]
    fn test_draft_optional_fields() {
        let form = ProgressForm {
            weight: "160.5".to_string(),
            body_fat: "18.2".to_string(),
            waist: "abc".to_string(),
            notes: "  ".to_string(),
            ..Default::default()
        };
        let draft = ProgressDraft::from_form(&form).unwrap();
        assert_eq!(draft.weight, 160.5);
        assert_eq!(draft.body_fat, Some(18.2));
        assert_eq!(draft.muscle_mass, None);
        assert_eq!(draft.waist, None);
        assert_eq!(draft.notes, None);
    }

    #[test]
    fn test_zero_measurement_is_recorded() {
        let form = ProgressForm {
            weight: "150".to_string(),
            body_fat: "0".to_string(),
            ..Default::default()
        };
        let draft = ProgressDraft::from_form(&form).unwrap();
        assert_eq!(draft.body_fat, Some(0.0));
    }

    #[test]
    fn test_history_is_newest_first() {
        let history = ProgressHistory::new();
        assert!(history.latest().is_none());
        assert!(history.previous().is_none());

        let (history, first) = history.with_entry(weight_only(160.0), date(1));
        assert_eq!(history.latest().map(|e| e.id), Some(first));
        assert!(history.previous().is_none());

        let (history, second) = history.with_entry(weight_only(155.0), date(8));
        assert_eq!(history.latest().map(|e| e.id), Some(second));
        assert_eq!(history.previous().map(|e| e.id), Some(first));
    }

    #[test]
    fn test_insertion_order_wins_over_date() {
        let (history, _) = ProgressHistory::new().with_entry(weight_only(160.0), date(20));
        let (history, older_date) = history.with_entry(weight_only(158.0), date(2));
        assert_eq!(history.latest().map(|e| e.id), Some(older_date));
    }

    #[test]
    fn test_without_entry() {
        let (history, first) = ProgressHistory::new().with_entry(weight_only(160.0), date(1));
        let (history, second) = history.with_entry(weight_only(158.0), date(2));

        assert!(history.without_entry(EntryId(42)).is_none());

        let trimmed = history.without_entry(second).unwrap();
        assert_eq!(trimmed.len(), 1);
        assert_eq!(trimmed.latest().map(|e| e.id), Some(first));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_metric_values() {
        let mut draft = weight_only(170.0);
        draft.muscle_mass = Some(130.0);
        let entry = draft.into_entry(EntryId(1), date(5));

        assert_eq!(Metric::Weight.value_of(&entry), Some(170.0));
        assert_eq!(Metric::MuscleMass.value_of(&entry), Some(130.0));
        assert_eq!(Metric::Chest.value_of(&entry), None);
    }

    #[test]
    fn test_metric_directionality() {
        assert!(Metric::Weight.lower_is_better());
        assert!(Metric::BodyFat.lower_is_better());
        assert!(Metric::Waist.lower_is_better());
        assert!(Metric::Thighs.lower_is_better());
        assert!(!Metric::MuscleMass.lower_is_better());
    }

    #[test]
    fn test_entry_date_serializes_as_iso() {
        let entry = weight_only(150.0).into_entry(EntryId(3), date(9));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["date"], "2024-03-09");
        assert_eq!(json["id"], 3);
        assert!(json["body_fat"].is_null());
    }
}
