use serde::{Deserialize, Serialize};

use crate::grid::TimeSlot;

/// Every change the scheduler makes produces an Event, in the order it
/// happened. Renderers print them; tests inspect them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScheduleEvent {
    /// A 30-minute work slot was booked for a task.
    WorkPlaced {
        day: usize,
        start: u32,
        end: u32,
        task: String,
        /// Not the first slot placed for this task.
        split: bool,
    },
    /// A rest break was booked after sustained work.
    BreakPlaced { day: usize, start: u32, end: u32 },
    /// Placement failed; the task was queued again with a later deadline.
    RolledOver { task: String, deadline_day: usize },
    /// Placement failed on the last day of the week. Terminal.
    Unschedulable { task: String },
}

impl ScheduleEvent {
    /// Day and interval for slot-booking events.
    pub fn slot(&self) -> Option<(usize, TimeSlot)> {
        match self {
            ScheduleEvent::WorkPlaced { day, start, end, .. }
            | ScheduleEvent::BreakPlaced { day, start, end } => {
                Some((*day, TimeSlot::new(*start, *end)))
            }
            _ => None,
        }
    }

    pub fn is_break(&self) -> bool {
        matches!(self, ScheduleEvent::BreakPlaced { .. })
    }
}
