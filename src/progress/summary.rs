//! Per-metric deltas between the two most recent progress entries

use chrono::NaiveDate;
use serde::Serialize;

use super::delta::{classify, delta, format_change, Trend};
use crate::models::{Metric, ProgressEntry, ProgressHistory};

/// Change in one metric between the latest and previous entries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDelta {
    pub metric: Metric,
    pub name: &'static str,
    pub unit: &'static str,
    pub current_value: Option<f64>,
    pub previous_value: Option<f64>,
    pub change: Option<f64>,
    pub lower_is_better: bool,
    pub trend: Trend,
    pub formatted_change: String,
}

/// Latest measurements and how each metric moved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSummary {
    pub entry_count: usize,
    pub latest_date: Option<NaiveDate>,
    pub latest: Option<ProgressEntry>,
    pub previous: Option<ProgressEntry>,
    pub metrics: Vec<MetricDelta>,
}

impl ProgressSummary {
    /// Delta for one metric
    pub fn metric(&self, metric: Metric) -> Option<&MetricDelta> {
        self.metrics.iter().find(|d| d.metric == metric)
    }
}

/// Compute one metric's delta from a pair of entries
pub fn metric_delta(
    metric: Metric,
    latest: Option<&ProgressEntry>,
    previous: Option<&ProgressEntry>,
) -> MetricDelta {
    let current_value = latest.and_then(|e| metric.value_of(e));
    let previous_value = previous.and_then(|e| metric.value_of(e));
    let change = delta(current_value, previous_value);
    let lower_is_better = metric.lower_is_better();

    MetricDelta {
        metric,
        name: metric.display_name(),
        unit: metric.unit(),
        current_value,
        previous_value,
        change,
        lower_is_better,
        trend: classify(change, lower_is_better),
        formatted_change: format_change(change, metric.unit()),
    }
}

/// Summarize a history: every metric, compared across the two newest entries
pub fn summarize(history: &ProgressHistory) -> ProgressSummary {
    let latest = history.latest();
    let previous = history.previous();

    ProgressSummary {
        entry_count: history.len(),
        latest_date: latest.map(|e| e.date),
        latest: latest.cloned(),
        previous: previous.cloned(),
        metrics: Metric::ALL
            .iter()
            .map(|m| metric_delta(*m, latest, previous))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProgressDraft;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
    }

    fn draft(weight: f64, body_fat: Option<f64>, muscle_mass: Option<f64>) -> ProgressDraft {
        ProgressDraft {
            weight,
            body_fat,
            muscle_mass,
            waist: None,
            chest: None,
            arms: None,
            thighs: None,
            notes: None,
        }
    }

    #[test]
    fn test_empty_history() {
        let summary = summarize(&ProgressHistory::new());
        assert_eq!(summary.entry_count, 0);
        assert_eq!(summary.latest_date, None);
        assert_eq!(summary.metrics.len(), Metric::ALL.len());
        for d in &summary.metrics {
            assert_eq!(d.change, None);
            assert_eq!(d.trend, Trend::Unknown);
            assert_eq!(d.formatted_change, "—");
        }
    }

    #[test]
    fn test_single_entry_has_no_change() {
        let (history, _) =
            ProgressHistory::new().with_entry(draft(160.0, Some(20.0), None), date(1));
        let summary = summarize(&history);

        let weight = summary.metric(Metric::Weight).unwrap();
        assert_eq!(weight.current_value, Some(160.0));
        assert_eq!(weight.previous_value, None);
        assert_eq!(weight.change, None);
        assert_eq!(weight.trend, Trend::Unknown);
        assert_eq!(summary.latest_date, Some(date(1)));
    }

    #[test]
    fn test_two_entries() {
        let (history, _) =
            ProgressHistory::new().with_entry(draft(160.0, Some(20.0), Some(130.0)), date(1));
        let (history, _) = history.with_entry(draft(155.0, Some(19.5), Some(125.0)), date(8));
        let summary = summarize(&history);

        let weight = summary.metric(Metric::Weight).unwrap();
        assert_eq!(weight.change, Some(-5.0));
        assert_eq!(weight.trend, Trend::Favorable);
        assert_eq!(weight.formatted_change, "-5.0lbs");

        let body_fat = summary.metric(Metric::BodyFat).unwrap();
        assert_eq!(body_fat.trend, Trend::Favorable);
        assert_eq!(body_fat.formatted_change, "-0.5%");

        let muscle = summary.metric(Metric::MuscleMass).unwrap();
        assert_eq!(muscle.change, Some(-5.0));
        assert_eq!(muscle.trend, Trend::Unfavorable);
    }

    #[test]
    fn test_missing_endpoint_gives_unknown() {
        let (history, _) = ProgressHistory::new().with_entry(draft(160.0, None, None), date(1));
        let (history, _) = history.with_entry(draft(158.0, Some(18.0), None), date(2));
        let summary = summarize(&history);

        let body_fat = summary.metric(Metric::BodyFat).unwrap();
        assert_eq!(body_fat.current_value, Some(18.0));
        assert_eq!(body_fat.change, None);
        assert_eq!(body_fat.trend, Trend::Unknown);
    }

    #[test]
    fn test_zero_body_fat_is_compared() {
        let (history, _) =
            ProgressHistory::new().with_entry(draft(160.0, Some(0.0), None), date(1));
        let (history, _) = history.with_entry(draft(160.0, Some(2.0), None), date(2));
        let summary = summarize(&history);

        let body_fat = summary.metric(Metric::BodyFat).unwrap();
        assert_eq!(body_fat.change, Some(2.0));
        assert_eq!(body_fat.trend, Trend::Unfavorable);

        let weight = summary.metric(Metric::Weight).unwrap();
        assert_eq!(weight.trend, Trend::Neutral);
        assert_eq!(weight.formatted_change, "+0.0lbs");
    }

    #[test]
    fn test_summary_is_repeatable() {
        let (history, _) = ProgressHistory::new().with_entry(draft(160.0, None, None), date(1));
        let (history, _) = history.with_entry(draft(155.0, None, None), date(2));
        assert_eq!(summarize(&history), summarize(&history));
    }
}
