//! Progress delta engine
//!
//! Compares the two most recent progress entries metric by metric.

pub mod delta;
pub mod summary;

pub use delta::{classify, delta, format_change, Trend, CHANGE_PLACEHOLDER};
pub use summary::{metric_delta, summarize, MetricDelta, ProgressSummary};
