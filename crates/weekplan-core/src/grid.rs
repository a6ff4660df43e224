//! Weekly occupancy grid.
//!
//! Holds, for each of the seven days, the intervals that are already taken:
//! pre-existing commitments plus the work and break slots the placer books.
//! Intervals are kept in insertion order, never sorted, so every query scans
//! the whole day.

use serde::{Deserialize, Serialize};

/// Length of one work slot in minutes.
pub const SLOT_MINUTES: u32 = 30;

/// Number of days in a planning week.
pub const DAYS_PER_WEEK: usize = 7;

/// Latest minute (23:00) any placed slot may end at.
pub const END_OF_DAY: u32 = 1380;

/// Index of the last day in the week.
pub const LAST_DAY: usize = DAYS_PER_WEEK - 1;

/// Half-open interval `[start, end)` in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: u32,
    pub end: u32,
}

impl TimeSlot {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Length in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Check if this slot overlaps `[start, end)`.
    pub fn overlaps(&self, start: u32, end: u32) -> bool {
        self.start.max(start) < self.end.min(end)
    }
}

/// Seven per-day interval lists, index 0 = day 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeGrid {
    days: [Vec<TimeSlot>; DAYS_PER_WEEK],
}

impl TimeGrid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff nothing on `day` overlaps `[start, end)`.
    ///
    /// # Panics
    /// Panics if `day` is not a valid day index (0-6).
    pub fn is_free(&self, day: usize, start: u32, end: u32) -> bool {
        !self.days[day].iter().any(|slot| slot.overlaps(start, end))
    }

    /// Append `[start, end)` to `day`.
    ///
    /// Callers confirm the interval with [`is_free`](Self::is_free) first;
    /// no overlap check happens here.
    ///
    /// # Panics
    /// Panics if `day` is not a valid day index (0-6).
    pub fn reserve(&mut self, day: usize, start: u32, end: u32) {
        self.days[day].push(TimeSlot::new(start, end));
    }

    /// Slots of `day` in insertion order.
    pub fn day(&self, day: usize) -> &[TimeSlot] {
        &self.days[day]
    }

    /// Iterate `(day_index, slots)` for the whole week.
    pub fn iter_days(&self) -> impl Iterator<Item = (usize, &[TimeSlot])> {
        self.days.iter().enumerate().map(|(i, d)| (i, d.as_slice()))
    }

    /// Total number of slots across the week.
    pub fn slot_count(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    /// Mark the current end of `day`'s list for a later [`rollback`](Self::rollback).
    pub fn checkpoint(&self, day: usize) -> usize {
        self.days[day].len()
    }

    /// Drop every slot appended to `day` since `mark`.
    ///
    /// Returns how many slots were removed.
    pub fn rollback(&mut self, day: usize, mark: usize) -> usize {
        let list = &mut self.days[day];
        let removed = list.len().saturating_sub(mark);
        list.truncate(mark);
        removed
    }
}
