//! Greedy slot placement for a single task.
//!
//! # Algorithm
//!
//! 1. Try each day from 0 through the task's deadline day, earliest first.
//! 2. On a day, walk candidate starts from the preferred start in 30-minute
//!    steps while a whole slot still fits in the preferred window (capped at
//!    23:00) and work remains.
//! 3. Book every free candidate. Occupied candidates are skipped.
//! 4. After `break_after_minutes` of booked work, if work remains, book a
//!    break right after the last slot when that interval is free; the scan
//!    resumes past the break.
//! 5. Stop at the first day that absorbs the whole duration.
//!
//! Each day starts again from the full duration. What happens to the slots
//! of a day that did not finish the task depends on [`PlacementMode`].

use serde::{Deserialize, Serialize};

use crate::events::ScheduleEvent;
use crate::grid::{TimeGrid, END_OF_DAY, SLOT_MINUTES};
use crate::task::Task;

/// What to do with a day's bookings when the task does not fit that day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementMode {
    /// Release the day's bookings before trying the next day.
    #[default]
    Transactional,
    /// Keep them. Schedules saved by older versions were produced this way,
    /// including the fragments of failed days.
    Committed,
}

/// Placer tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacerConfig {
    /// Booked work before a break is due (minutes)
    #[serde(default = "default_break_after")]
    pub break_after_minutes: u32,
    /// Break length (minutes)
    #[serde(default = "default_break_duration")]
    pub break_duration_minutes: u32,
    #[serde(default)]
    pub mode: PlacementMode,
}

fn default_break_after() -> u32 {
    90
}
fn default_break_duration() -> u32 {
    30
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self {
            break_after_minutes: default_break_after(),
            break_duration_minutes: default_break_duration(),
            mode: PlacementMode::default(),
        }
    }
}

/// Result of one [`Placer::place`] call.
#[derive(Debug, Clone, Default)]
pub struct PlacementOutcome {
    /// Day index the task was completed on.
    pub placed_on: Option<usize>,
    /// Bookings made, in order. In transactional mode only the successful
    /// day's bookings are reported.
    pub events: Vec<ScheduleEvent>,
}

/// Greedy placer.
#[derive(Debug, Clone, Default)]
pub struct Placer {
    config: PlacerConfig,
}

impl Placer {
    /// Create a placer with default config (break of 30 after 90 minutes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom config.
    pub fn with_config(config: PlacerConfig) -> Self {
        Self { config }
    }

    /// Place `task` on `grid`, booking slots as it goes.
    pub fn place(&self, task: &Task, grid: &mut TimeGrid) -> PlacementOutcome {
        let mut outcome = PlacementOutcome::default();

        for day in 0..=task.deadline_day {
            let grid_mark = grid.checkpoint(day);
            let event_mark = outcome.events.len();

            if self.place_on_day(task, day, grid, &mut outcome.events) {
                tracing::debug!(task = %task.name, day, "task placed");
                outcome.placed_on = Some(day);
                return outcome;
            }

            if self.config.mode == PlacementMode::Transactional {
                let released = grid.rollback(day, grid_mark);
                outcome.events.truncate(event_mark);
                if released > 0 {
                    tracing::debug!(task = %task.name, day, released, "released partial day");
                }
            }
        }

        outcome
    }

    /// One day's scan. Returns true when the whole duration was booked.
    fn place_on_day(
        &self,
        task: &Task,
        day: usize,
        grid: &mut TimeGrid,
        events: &mut Vec<ScheduleEvent>,
    ) -> bool {
        let duration = i64::from(task.duration_minutes);
        let window_end = task.window_end();
        let mut remaining = duration;
        let mut worked = 0;
        let mut time = task.preferred_start;

        while time.saturating_add(SLOT_MINUTES) <= window_end && remaining > 0 {
            let slot_end = time + SLOT_MINUTES;
            if grid.is_free(day, time, slot_end) {
                grid.reserve(day, time, slot_end);
                tracing::debug!(task = %task.name, day, start = time, end = slot_end, "work slot");
                events.push(ScheduleEvent::WorkPlaced {
                    day,
                    start: time,
                    end: slot_end,
                    task: task.name.clone(),
                    split: remaining < duration,
                });
                remaining -= i64::from(SLOT_MINUTES);
                worked += SLOT_MINUTES;

                if worked >= self.config.break_after_minutes && remaining > 0 {
                    let break_end = slot_end
                        .checked_add(self.config.break_duration_minutes)
                        .filter(|&end| end <= END_OF_DAY);
                    if let Some(break_end) =
                        break_end.filter(|&end| grid.is_free(day, slot_end, end))
                    {
                        grid.reserve(day, slot_end, break_end);
                        tracing::debug!(day, start = slot_end, end = break_end, "break slot");
                        events.push(ScheduleEvent::BreakPlaced {
                            day,
                            start: slot_end,
                            end: break_end,
                        });
                        worked = 0;
                        time = break_end - SLOT_MINUTES;
                    }
                }
            }
            time += SLOT_MINUTES;
        }

        remaining <= 0
    }
}
