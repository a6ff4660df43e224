//! Planning session.
//!
//! Owns the week's grid, the pending task queue and the configuration.
//! Every mutation goes through `&mut WeekPlanner`, so one value is one
//! independent plan.

use std::path::Path;

use crate::error::ScheduleFileError;
use crate::grid::{TimeGrid, TimeSlot};
use crate::scheduler::{ScheduleReport, Scheduler};
use crate::stats::{DayAnalyzer, WeekSummary};
use crate::storage::{load_grid, save_grid, Config};
use crate::task::{Task, TaskQueue};

/// One week being planned.
#[derive(Debug, Clone, Default)]
pub struct WeekPlanner {
    config: Config,
    grid: TimeGrid,
    queue: TaskQueue,
}

impl WeekPlanner {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            grid: TimeGrid::new(),
            queue: TaskQueue::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Block `slot` on `day` (0-6) as a pre-existing commitment.
    ///
    /// Occupied blocks are taken as given: they may overlap each other.
    pub fn add_occupied(&mut self, day: usize, slot: TimeSlot) {
        tracing::debug!(day, start = slot.start, end = slot.end, "occupied block added");
        self.grid.reserve(day, slot.start, slot.end);
    }

    /// Queue a task for the next [`generate`](Self::generate).
    pub fn add_task(&mut self, task: Task) {
        tracing::debug!(task = %task.name, priority = task.priority, "task queued");
        self.queue.push(task);
    }

    /// Pending tasks in the order they will be scheduled.
    pub fn pending_tasks(&self) -> Vec<Task> {
        self.queue.to_sorted_vec()
    }

    /// Place every pending task.
    pub fn generate(&mut self) -> ScheduleReport {
        if self.queue.is_empty() {
            tracing::debug!("no pending tasks");
            return ScheduleReport::default();
        }

        let pending = self.queue.len();
        let scheduler = Scheduler::with_config(self.config.placement.clone());
        let report = scheduler.run(&mut self.queue, &mut self.grid);
        tracing::info!(
            pending,
            placed = report.placed.len(),
            unschedulable = report.unschedulable.len(),
            rollovers = report.rollover_count(),
            booked = report.bookings().count(),
            "schedule generated"
        );
        report
    }

    fn analyzer(&self) -> DayAnalyzer {
        DayAnalyzer::new(self.config.summary.free_time_method)
    }

    /// Usage statistics for the whole week.
    pub fn summary(&self) -> WeekSummary {
        WeekSummary::from_grid(&self.grid, &self.analyzer())
    }

    /// Write the grid to `path`. The session is not modified.
    pub fn save(&self, path: &Path) -> Result<(), ScheduleFileError> {
        save_grid(path, &self.grid)
    }

    /// Replace the grid with the contents of `path`.
    ///
    /// Pending tasks are kept. On error the current grid is untouched.
    pub fn load(&mut self, path: &Path) -> Result<(), ScheduleFileError> {
        self.grid = load_grid(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::END_OF_DAY;

    #[test]
    fn generate_without_tasks_books_nothing() {
        let mut planner = WeekPlanner::default();
        planner.add_occupied(0, TimeSlot::new(540, 600));
        let report = planner.generate();
        assert!(report.events.is_empty());
        assert_eq!(planner.grid().slot_count(), 1);
    }

    #[test]
    fn generate_drains_pending_tasks() {
        let mut planner = WeekPlanner::default();
        planner.add_task(Task::new("a", 30, 1, 0));
        planner.add_task(Task::new("b", 30, 9, 0));
        assert_eq!(planner.pending_tasks()[0].name, "b");

        let report = planner.generate();
        assert_eq!(report.placed, ["b", "a"]);
        assert!(planner.pending_tasks().is_empty());
        assert_eq!(planner.grid().day(0).len(), 2);
    }

    #[test]
    fn load_failure_keeps_grid() {
        let mut planner = WeekPlanner::default();
        planner.add_occupied(0, TimeSlot::new(540, 600));
        let dir = tempfile::tempdir().unwrap();

        assert!(planner.load(&dir.path().join("missing.txt")).is_err());
        assert_eq!(planner.grid().day(0), &[TimeSlot::new(540, 600)]);
    }

    #[test]
    fn load_replaces_grid_but_keeps_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.txt");

        let mut saved = WeekPlanner::default();
        saved.add_occupied(2, TimeSlot::new(600, 660));
        saved.save(&path).unwrap();

        let mut planner = WeekPlanner::default();
        planner.add_occupied(0, TimeSlot::new(0, END_OF_DAY));
        planner.add_task(Task::new("Read", 30, 3, 6));
        planner.load(&path).unwrap();

        assert!(planner.grid().day(0).is_empty());
        assert_eq!(planner.grid().day(2), &[TimeSlot::new(600, 660)]);
        assert_eq!(planner.pending_tasks().len(), 1);
    }

    #[test]
    fn day_stats_follow_config() {
        let mut planner = WeekPlanner::default();
        planner.add_occupied(4, TimeSlot::new(480, 510));
        let stats = planner.summary().days[4];
        assert_eq!(stats.productive_minutes, 30);
        assert_eq!(stats.free_minutes, 1350);
    }
}
