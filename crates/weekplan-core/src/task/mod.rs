//! Tasks waiting to be placed on the weekly grid.
//!
//! A task is created by intake, owned by the [`TaskQueue`] until it is
//! dequeued, and then either consumed by a successful placement or pushed
//! back with its deadline moved one day later.

mod queue;

pub use queue::TaskQueue;

use serde::{Deserialize, Serialize};

use crate::grid::{END_OF_DAY, LAST_DAY};

/// Lowest accepted priority.
pub const MIN_PRIORITY: u8 = 1;
/// Highest accepted priority (most urgent).
pub const MAX_PRIORITY: u8 = 10;

/// A unit of work to be split into 30-minute slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    /// Total work in minutes.
    pub duration_minutes: u32,
    /// 1-10, 10 = most urgent.
    pub priority: u8,
    /// Last day index (0-6) the task may be placed on.
    pub deadline_day: usize,
    /// Earliest start, minutes since midnight.
    #[serde(default)]
    pub preferred_start: u32,
    /// Latest end, minutes since midnight.
    #[serde(default = "default_preferred_end")]
    pub preferred_end: u32,
}

fn default_preferred_end() -> u32 {
    END_OF_DAY
}

impl Task {
    /// Create a task with the whole operating day as its preferred window.
    pub fn new(
        name: impl Into<String>,
        duration_minutes: u32,
        priority: u8,
        deadline_day: usize,
    ) -> Self {
        Self {
            name: name.into(),
            duration_minutes,
            priority,
            deadline_day,
            preferred_start: 0,
            preferred_end: END_OF_DAY,
        }
    }

    /// Set the preferred window `[start, end)`.
    pub fn with_window(mut self, start: u32, end: u32) -> Self {
        self.preferred_start = start;
        self.preferred_end = end;
        self
    }

    /// Latest minute a work slot may end at for this task.
    pub fn window_end(&self) -> u32 {
        self.preferred_end.min(END_OF_DAY)
    }

    /// Whether the deadline can still move one day later.
    pub fn can_roll_over(&self) -> bool {
        self.deadline_day < LAST_DAY
    }

    /// Move the deadline one day later.
    ///
    /// Returns `false` and leaves the task unchanged when the deadline is
    /// already the last day of the week.
    pub fn roll_over(&mut self) -> bool {
        if !self.can_roll_over() {
            return false;
        }
        self.deadline_day += 1;
        true
    }
}
