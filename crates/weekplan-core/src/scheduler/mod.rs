//! Weekly scheduler.
//!
//! Drains the task queue in priority order and hands each task to the
//! [`Placer`]:
//! - Placed tasks are done
//! - Failed tasks with a deadline before the last day roll over: the
//!   deadline moves one day later and the task is queued again
//! - Failed tasks already due on the last day are reported unschedulable
//!
//! Every task rolls over at most six times, so a run always terminates.

mod placer;

pub use placer::{PlacementMode, PlacementOutcome, Placer, PlacerConfig};

use serde::{Deserialize, Serialize};

use crate::events::ScheduleEvent;
use crate::grid::TimeGrid;
use crate::task::TaskQueue;

/// Everything one scheduling run did, in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleReport {
    pub events: Vec<ScheduleEvent>,
    /// Names of tasks fully placed, in placement order.
    pub placed: Vec<String>,
    /// Names of tasks that could not be placed by the end of the week.
    pub unschedulable: Vec<String>,
}

impl ScheduleReport {
    /// Number of rollovers during the run.
    pub fn rollover_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, ScheduleEvent::RolledOver { .. }))
            .count()
    }

    /// Booked work and break slots, in order.
    pub fn bookings(&self) -> impl Iterator<Item = &ScheduleEvent> {
        self.events.iter().filter(|e| e.slot().is_some())
    }
}

/// Queue-draining scheduler.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    placer: Placer,
}

impl Scheduler {
    /// Create a scheduler with default placer config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom placer config.
    pub fn with_config(config: PlacerConfig) -> Self {
        Self {
            placer: Placer::with_config(config),
        }
    }

    /// Place every queued task on `grid`, leaving the queue empty.
    pub fn run(&self, queue: &mut TaskQueue, grid: &mut TimeGrid) -> ScheduleReport {
        let mut report = ScheduleReport::default();

        while let Some(mut task) = queue.pop_max() {
            let outcome = self.placer.place(&task, grid);
            let placed_on = outcome.placed_on;
            report.events.extend(outcome.events);

            if let Some(day) = placed_on {
                tracing::info!(task = %task.name, day, "scheduled");
                report.placed.push(task.name);
            } else if task.roll_over() {
                tracing::info!(task = %task.name, deadline_day = task.deadline_day, "rolled over");
                report.events.push(ScheduleEvent::RolledOver {
                    task: task.name.clone(),
                    deadline_day: task.deadline_day,
                });
                queue.push(task);
            } else {
                tracing::warn!(task = %task.name, "could not schedule");
                report.events.push(ScheduleEvent::Unschedulable {
                    task: task.name.clone(),
                });
                report.unschedulable.push(task.name);
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{END_OF_DAY, LAST_DAY};
    use crate::task::Task;

    fn queue_of(tasks: Vec<Task>) -> TaskQueue {
        let mut queue = TaskQueue::new();
        queue.extend(tasks);
        queue
    }

    #[test]
    fn empty_queue_produces_empty_report() {
        let mut grid = TimeGrid::new();
        let report = Scheduler::new().run(&mut TaskQueue::new(), &mut grid);
        assert!(report.events.is_empty());
        assert!(report.placed.is_empty());
        assert!(report.unschedulable.is_empty());
    }

    #[test]
    fn higher_priority_gets_earlier_slots() {
        let mut grid = TimeGrid::new();
        let mut queue = queue_of(vec![
            Task::new("low", 30, 1, 0).with_window(480, 540),
            Task::new("high", 30, 9, 0).with_window(480, 540),
        ]);

        let report = Scheduler::new().run(&mut queue, &mut grid);

        assert_eq!(report.placed, ["high", "low"]);
        assert!(report.events.contains(&ScheduleEvent::WorkPlaced {
            day: 0,
            start: 480,
            end: 510,
            task: "high".into(),
            split: false,
        }));
        assert!(report.events.contains(&ScheduleEvent::WorkPlaced {
            day: 0,
            start: 510,
            end: 540,
            task: "low".into(),
            split: false,
        }));
    }

    #[test]
    fn rollover_moves_task_to_next_day() {
        let mut grid = TimeGrid::new();
        grid.reserve(0, 0, END_OF_DAY);
        let mut queue = queue_of(vec![Task::new("Essay", 60, 5, 0)]);

        let report = Scheduler::new().run(&mut queue, &mut grid);

        assert_eq!(report.rollover_count(), 1);
        assert_eq!(
            report.events[0],
            ScheduleEvent::RolledOver {
                task: "Essay".into(),
                deadline_day: 1
            }
        );
        assert_eq!(report.placed, ["Essay"]);
        assert!(report.bookings().all(|e| e.slot().map(|(d, _)| d) == Some(1)));
        assert!(queue.is_empty());
    }

    #[test]
    fn full_week_reports_unschedulable_once() {
        let mut grid = TimeGrid::new();
        for day in 0..=LAST_DAY {
            grid.reserve(day, 0, END_OF_DAY);
        }
        let mut queue = queue_of(vec![Task::new("Impossible", 30, 5, 2)]);

        let report = Scheduler::new().run(&mut queue, &mut grid);

        // Deadline 2 -> 3 -> 4 -> 5 -> 6, then give up
        assert_eq!(report.rollover_count(), 4);
        let deadlines: Vec<usize> = report
            .events
            .iter()
            .filter_map(|e| match e {
                ScheduleEvent::RolledOver { deadline_day, .. } => Some(*deadline_day),
                _ => None,
            })
            .collect();
        assert_eq!(deadlines, [3, 4, 5, 6]);
        assert_eq!(report.unschedulable, ["Impossible"]);
        assert_eq!(
            report.events.last(),
            Some(&ScheduleEvent::Unschedulable {
                task: "Impossible".into()
            })
        );
    }

    #[test]
    fn deadline_on_last_day_fails_without_rollover() {
        let mut grid = TimeGrid::new();
        for day in 0..=LAST_DAY {
            grid.reserve(day, 0, END_OF_DAY);
        }
        let mut queue = queue_of(vec![Task::new("Late", 30, 5, LAST_DAY)]);
        let report = Scheduler::new().run(&mut queue, &mut grid);
        assert_eq!(report.rollover_count(), 0);
        assert_eq!(report.unschedulable, ["Late"]);
    }

    #[test]
    fn committed_mode_accumulates_fragments_across_rollovers() {
        let mut grid = TimeGrid::new();
        let scheduler = Scheduler::with_config(PlacerConfig {
            mode: PlacementMode::Committed,
            ..PlacerConfig::default()
        });
        // 120 minutes of work never fits a 120-minute window once the break is booked
        let mut queue = queue_of(vec![Task::new("Thesis", 120, 10, 0).with_window(480, 600)]);

        let report = scheduler.run(&mut queue, &mut grid);

        assert_eq!(report.unschedulable, ["Thesis"]);
        assert_eq!(report.rollover_count(), 6);
        // Each day keeps three work slots and one break from its failed attempt
        for day in 0..=LAST_DAY {
            assert_eq!(grid.day(day).len(), 4, "day {day}");
        }
    }

    #[test]
    fn transactional_mode_leaves_grid_clean_on_failure() {
        let mut grid = TimeGrid::new();
        let mut queue = queue_of(vec![Task::new("Thesis", 120, 10, 0).with_window(480, 600)]);

        let report = Scheduler::new().run(&mut queue, &mut grid);

        assert_eq!(report.unschedulable, ["Thesis"]);
        assert_eq!(grid.slot_count(), 0);
        assert_eq!(report.bookings().count(), 0);
    }
}
