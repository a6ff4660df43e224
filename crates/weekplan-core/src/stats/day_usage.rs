//! Per-day time usage.
//!
//! Every interval exactly one slot long counts as productive time, every
//! other interval as break time. Occupied blocks are not told apart from
//! bookings: the schedule file only stores intervals.

use serde::{Deserialize, Serialize};

use crate::grid::{TimeSlot, END_OF_DAY, SLOT_MINUTES};

/// How free time is derived from a day's intervals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreeTimeMethod {
    /// Sort by start and count uncovered minutes up to 23:00.
    #[default]
    IntervalUnion,
    /// Walk in insertion order with a running end watermark. Reproduces
    /// summaries of older versions; miscounts when intervals are unsorted.
    Watermark,
}

/// Usage totals for one day, in minutes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStats {
    pub productive_minutes: i64,
    pub break_minutes: i64,
    pub free_minutes: i64,
}

impl DayStats {
    /// Productive plus break minutes.
    pub fn busy_minutes(&self) -> i64 {
        self.productive_minutes + self.break_minutes
    }

    /// Share of the operating day that is booked (0.0..=1.0 for in-bound days).
    pub fn utilization(&self) -> f64 {
        self.busy_minutes() as f64 / f64::from(END_OF_DAY)
    }
}

/// Computes [`DayStats`] from a day's interval list.
#[derive(Debug, Clone, Copy, Default)]
pub struct DayAnalyzer {
    method: FreeTimeMethod,
}

impl DayAnalyzer {
    pub fn new(method: FreeTimeMethod) -> Self {
        Self { method }
    }

    /// Analyze one day's intervals.
    pub fn analyze(&self, slots: &[TimeSlot]) -> DayStats {
        let mut stats = DayStats::default();
        for slot in slots {
            let minutes = i64::from(slot.duration_minutes());
            if slot.duration_minutes() == SLOT_MINUTES {
                stats.productive_minutes += minutes;
            } else {
                stats.break_minutes += minutes;
            }
        }

        stats.free_minutes = match self.method {
            FreeTimeMethod::Watermark => watermark_free_time(slots.iter()),
            FreeTimeMethod::IntervalUnion => {
                let mut sorted = slots.to_vec();
                sorted.sort_by_key(|s| (s.start, s.end));
                union_free_time(&sorted)
            }
        };
        stats
    }
}

fn watermark_free_time<'a>(slots: impl Iterator<Item = &'a TimeSlot>) -> i64 {
    let mut free = 0;
    let mut last_end = 0;
    for slot in slots {
        if slot.start > last_end {
            free += i64::from(slot.start - last_end);
        }
        last_end = last_end.max(slot.end);
    }
    free + i64::from(END_OF_DAY) - i64::from(last_end)
}

/// `sorted` must be ordered by start.
fn union_free_time(sorted: &[TimeSlot]) -> i64 {
    let mut free = 0;
    let mut last_end = 0;
    for slot in sorted {
        let start = slot.start.min(END_OF_DAY);
        if start > last_end {
            free += i64::from(start - last_end);
        }
        last_end = last_end.max(slot.end.min(END_OF_DAY));
    }
    free + i64::from(END_OF_DAY - last_end)
}
