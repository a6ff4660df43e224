//! Whole-week roll-up of [`DayStats`].

use serde::{Deserialize, Serialize};

use super::{DayAnalyzer, DayStats};
use crate::grid::{TimeGrid, DAYS_PER_WEEK};

/// Seven days of usage plus totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    pub days: [DayStats; DAYS_PER_WEEK],
    pub total: DayStats,
    /// Booked share of each day, see [`DayStats::utilization`].
    pub utilization: [f64; DAYS_PER_WEEK],
}

impl WeekSummary {
    /// Analyze every day of `grid`.
    pub fn from_grid(grid: &TimeGrid, analyzer: &DayAnalyzer) -> Self {
        let mut days = [DayStats::default(); DAYS_PER_WEEK];
        let mut total = DayStats::default();
        let mut utilization = [0.0; DAYS_PER_WEEK];

        for (index, slots) in grid.iter_days() {
            let stats = analyzer.analyze(slots);
            total.productive_minutes += stats.productive_minutes;
            total.break_minutes += stats.break_minutes;
            total.free_minutes += stats.free_minutes;
            utilization[index] = stats.utilization();
            days[index] = stats;
        }

        Self {
            days,
            total,
            utilization,
        }
    }

    /// Day index with the most productive minutes (earliest on ties).
    pub fn busiest_day(&self) -> Option<usize> {
        self.days
            .iter()
            .enumerate()
            .filter(|(_, d)| d.productive_minutes > 0)
            .max_by(|(ia, a), (ib, b)| {
                a.productive_minutes
                    .cmp(&b.productive_minutes)
                    .then_with(|| ib.cmp(ia))
            })
            .map(|(i, _)| i)
    }
}
