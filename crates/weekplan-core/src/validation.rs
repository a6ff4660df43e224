//! Intake validation.
//!
//! Raw user input (1-based days, hours and minutes) is checked and converted
//! here before anything reaches the grid or the queue. The scheduling core
//! trusts its inputs and does not check them again.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::grid::TimeSlot;
use crate::task::{Task, MAX_PRIORITY, MIN_PRIORITY};

pub const DAY_RANGE: RangeInclusive<i64> = 1..=7;
pub const HOUR_RANGE: RangeInclusive<i64> = 0..=23;
pub const MINUTE_RANGE: RangeInclusive<i64> = 0..=59;
pub const PRIORITY_RANGE: RangeInclusive<i64> = MIN_PRIORITY as i64..=MAX_PRIORITY as i64;
/// A task window needs at least one hour before 23:00.
pub const PREFERRED_START_HOUR_RANGE: RangeInclusive<i64> = 0..=22;
pub const PREFERRED_END_HOUR_RANGE: RangeInclusive<i64> = 1..=23;

/// Check `value` against `range`.
pub fn check_range(
    field: &str,
    value: i64,
    range: &RangeInclusive<i64>,
) -> Result<i64, ValidationError> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::out_of_range(
            field,
            value,
            *range.start(),
            *range.end(),
        ))
    }
}

/// A pre-existing commitment as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupiedBlock {
    /// 1-7
    pub day: i64,
    pub start_hour: i64,
    pub start_minute: i64,
    pub end_hour: i64,
    pub end_minute: i64,
}

impl OccupiedBlock {
    /// Validate and convert to a day index and interval.
    pub fn validate(&self) -> Result<(usize, TimeSlot), ValidationError> {
        let day = check_range("day", self.day, &DAY_RANGE)?;
        check_range("start hour", self.start_hour, &HOUR_RANGE)?;
        check_range("start minute", self.start_minute, &MINUTE_RANGE)?;
        check_range("end hour", self.end_hour, &HOUR_RANGE)?;
        check_range("end minute", self.end_minute, &MINUTE_RANGE)?;

        // In range, so these fit in u32
        let start = (self.start_hour * 60 + self.start_minute) as u32;
        let end = (self.end_hour * 60 + self.end_minute) as u32;
        if end <= start {
            return Err(ValidationError::InvalidTimeRange { start, end });
        }
        Ok(((day - 1) as usize, TimeSlot::new(start, end)))
    }
}

/// A task as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSpec {
    pub name: String,
    pub duration_minutes: i64,
    pub priority: i64,
    /// 1-7
    pub deadline_day: i64,
    #[serde(default)]
    pub preferred_start_hour: i64,
    #[serde(default = "default_preferred_end_hour")]
    pub preferred_end_hour: i64,
}

fn default_preferred_end_hour() -> i64 {
    23
}

impl TaskSpec {
    /// Validate and convert to a [`Task`] with a 0-based deadline and a
    /// preferred window in minutes.
    pub fn into_task(self) -> Result<Task, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::Empty("task name".into()));
        }
        if self.duration_minutes <= 0 || self.duration_minutes > i64::from(u32::MAX) {
            return Err(ValidationError::InvalidValue {
                field: "duration".into(),
                message: "must be a positive number of minutes".into(),
            });
        }
        let priority = check_range("priority", self.priority, &PRIORITY_RANGE)?;
        let deadline = check_range("deadline day", self.deadline_day, &DAY_RANGE)?;
        let start_hour = check_range(
            "preferred start hour",
            self.preferred_start_hour,
            &PREFERRED_START_HOUR_RANGE,
        )?;
        let end_hour = check_range(
            "preferred end hour",
            self.preferred_end_hour,
            &PREFERRED_END_HOUR_RANGE,
        )?;
        if end_hour <= start_hour {
            return Err(ValidationError::InvalidValue {
                field: "preferred end hour".into(),
                message: "must be greater than the start hour".into(),
            });
        }

        Ok(Task::new(
            name,
            self.duration_minutes as u32,
            priority as u8,
            (deadline - 1) as usize,
        )
        .with_window((start_hour * 60) as u32, (end_hour * 60) as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> TaskSpec {
        TaskSpec {
            name: "Write Report".into(),
            duration_minutes: 60,
            priority: 5,
            deadline_day: 1,
            preferred_start_hour: 8,
            preferred_end_hour: 12,
        }
    }

    fn block(day: i64, sh: i64, sm: i64, eh: i64, em: i64) -> OccupiedBlock {
        OccupiedBlock {
            day,
            start_hour: sh,
            start_minute: sm,
            end_hour: eh,
            end_minute: em,
        }
    }

    #[test]
    fn converts_task_to_zero_based_minutes() {
        let task = spec().into_task().unwrap();
        assert_eq!(task.deadline_day, 0);
        assert_eq!(task.preferred_start, 480);
        assert_eq!(task.preferred_end, 720);
        assert_eq!(task.priority, 5);
    }

    #[test]
    fn trims_task_name() {
        let task = TaskSpec {
            name: "  Gym  ".into(),
            ..spec()
        }
        .into_task()
        .unwrap();
        assert_eq!(task.name, "Gym");
    }

    #[test]
    fn rejects_bad_tasks() {
        let cases = [
            TaskSpec { name: "   ".into(), ..spec() },
            TaskSpec { duration_minutes: 0, ..spec() },
            TaskSpec { priority: 11, ..spec() },
            TaskSpec { priority: 0, ..spec() },
            TaskSpec { deadline_day: 8, ..spec() },
            TaskSpec { preferred_start_hour: 24, ..spec() },
            TaskSpec { preferred_start_hour: 23, ..spec() },
            TaskSpec { preferred_end_hour: 0, ..spec() },
            TaskSpec { preferred_start_hour: 12, preferred_end_hour: 12, ..spec() },
        ];
        for case in cases {
            assert!(case.clone().into_task().is_err(), "{case:?}");
        }
    }

    #[test]
    fn converts_occupied_block() {
        let (day, slot) = block(1, 9, 0, 10, 0).validate().unwrap();
        assert_eq!(day, 0);
        assert_eq!(slot, TimeSlot::new(540, 600));
        let (day, slot) = block(7, 23, 0, 23, 59).validate().unwrap();
        assert_eq!(day, 6);
        assert_eq!(slot, TimeSlot::new(1380, 1439));
    }

    #[test]
    fn rejects_bad_blocks() {
        assert!(matches!(
            block(1, 10, 0, 9, 0).validate(),
            Err(ValidationError::InvalidTimeRange { start: 600, end: 540 })
        ));
        assert!(block(1, 9, 0, 9, 0).validate().is_err());
        assert!(block(0, 9, 0, 10, 0).validate().is_err());
        assert!(block(1, 9, 60, 10, 0).validate().is_err());
        assert!(block(1, 9, 0, 24, 0).validate().is_err());
    }

    #[test]
    fn latest_task_window_starts_at_22() {
        let task = TaskSpec {
            preferred_start_hour: 22,
            preferred_end_hour: 23,
            ..spec()
        }
        .into_task()
        .unwrap();
        assert_eq!(task.preferred_start, 1320);
        assert_eq!(task.preferred_end, 1380);

        let err = TaskSpec {
            preferred_start_hour: 23,
            ..spec()
        }
        .into_task()
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "preferred start hour must be between 0 and 22, got 23"
        );
    }

    #[test]
    fn range_error_message() {
        let err = check_range("priority", 12, &PRIORITY_RANGE).unwrap_err();
        assert_eq!(err.to_string(), "priority must be between 1 and 10, got 12");
    }

    #[test]
    fn task_spec_defaults_window_from_toml() {
        let spec: TaskSpec =
            toml::from_str("name = \"Read\"\nduration_minutes = 30\npriority = 2\ndeadline_day = 3\n")
                .unwrap();
        let task = spec.into_task().unwrap();
        assert_eq!(task.preferred_start, 0);
        assert_eq!(task.preferred_end, 1380);
    }
}
