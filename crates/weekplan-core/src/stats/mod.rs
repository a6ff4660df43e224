//! Schedule statistics.
//!
//! Derived on demand from the grid and never persisted:
//! - Per-day productive, break and free minutes
//! - Week totals and utilization

mod day_usage;
mod week_summary;

pub use day_usage::{DayAnalyzer, DayStats, FreeTimeMethod};
pub use week_summary::WeekSummary;
