//! # weekplan Core Library
//!
//! Weekly time-block scheduling: pre-occupied intervals and prioritized
//! tasks go in, 30-minute work slots with rest breaks come out, along with
//! per-day usage statistics.
//!
//! ## Architecture
//!
//! - **Grid**: seven per-day interval lists with free/occupied queries
//! - **Task queue**: priority-ordered pending tasks
//! - **Scheduler**: greedy placer plus the deadline-rollover retry loop
//! - **Stats**: productive, break and free minutes per day
//! - **Storage**: flat text schedule file and TOML configuration
//!
//! ## Key Components
//!
//! - [`WeekPlanner`]: session owning grid, queue and config
//! - [`Placer`]: single-task greedy placement
//! - [`Scheduler`]: queue draining with rollover
//! - [`DayAnalyzer`]: per-day statistics

pub mod error;
pub mod events;
pub mod grid;
pub mod planner;
pub mod scheduler;
pub mod stats;
pub mod storage;
pub mod task;
pub mod validation;

pub use error::{ConfigError, CoreError, ScheduleFileError, ValidationError};
pub use events::ScheduleEvent;
pub use grid::{TimeGrid, TimeSlot, DAYS_PER_WEEK, END_OF_DAY, LAST_DAY, SLOT_MINUTES};
pub use planner::WeekPlanner;
pub use scheduler::{PlacementMode, PlacementOutcome, Placer, PlacerConfig, ScheduleReport, Scheduler};
pub use stats::{DayAnalyzer, DayStats, FreeTimeMethod, WeekSummary};
pub use storage::Config;
pub use task::{Task, TaskQueue};
pub use validation::{OccupiedBlock, TaskSpec};
