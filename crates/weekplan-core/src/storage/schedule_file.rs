//! Flat text schedule file.
//!
//! ```text
//! Day 1:
//! 540 600
//! 480 510
//! -1 -1
//! Day 2:
//! -1 -1
//! ...
//! ```
//!
//! Every day is written as a `Day N:` label, one `start end` line per slot
//! in insertion order, and a `-1 -1` terminator. The reader skips lines
//! starting with `Day` and moves to the next day only on `-1 -1`, so the
//! labels are decorative: a missing terminator shifts every later slot to
//! the wrong day. Slots after the seventh terminator are dropped. A slot
//! must end after it starts.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::ScheduleFileError;
use crate::grid::{TimeGrid, DAYS_PER_WEEK};

const DAY_LABEL: &str = "Day";
const TERMINATOR: (i64, i64) = (-1, -1);

/// Render `grid` in the schedule file format.
pub fn format_grid(grid: &TimeGrid) -> String {
    let mut out = String::new();
    for (day, slots) in grid.iter_days() {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{DAY_LABEL} {}:", day + 1);
        for slot in slots {
            let _ = writeln!(out, "{} {}", slot.start, slot.end);
        }
        let _ = writeln!(out, "{} {}", TERMINATOR.0, TERMINATOR.1);
    }
    out
}

/// Parse the schedule file format into a fresh grid.
pub fn parse_grid(content: &str) -> Result<TimeGrid, ScheduleFileError> {
    let mut grid = TimeGrid::new();
    let mut day = 0usize;
    let mut dropped = 0usize;

    for (index, line) in content.lines().enumerate() {
        if line.starts_with(DAY_LABEL) || line.trim().is_empty() {
            continue;
        }

        let malformed = || ScheduleFileError::Malformed {
            line: index + 1,
            content: line.to_string(),
        };

        let mut fields = line.split_whitespace().map(str::parse::<i64>);
        let (start, end) = match (fields.next(), fields.next()) {
            (Some(Ok(start)), Some(Ok(end))) => (start, end),
            _ => return Err(malformed()),
        };

        if (start, end) == TERMINATOR {
            day += 1;
            continue;
        }

        let start = u32::try_from(start).map_err(|_| malformed())?;
        let end = u32::try_from(end).map_err(|_| malformed())?;
        if end <= start {
            return Err(malformed());
        }

        if day < DAYS_PER_WEEK {
            grid.reserve(day, start, end);
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        tracing::warn!(dropped, "ignored slots after the last day");
    }
    Ok(grid)
}

/// Write `grid` to `path`, replacing any existing file.
pub fn save_grid(path: &Path, grid: &TimeGrid) -> Result<(), ScheduleFileError> {
    std::fs::write(path, format_grid(grid)).map_err(|source| ScheduleFileError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), slots = grid.slot_count(), "schedule saved");
    Ok(())
}

/// Read a grid from `path`.
pub fn load_grid(path: &Path) -> Result<TimeGrid, ScheduleFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| ScheduleFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = parse_grid(&content)?;
    tracing::info!(path = %path.display(), slots = grid.slot_count(), "schedule loaded");
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::TimeSlot;

    #[test]
    fn empty_grid_format() {
        let text = format_grid(&TimeGrid::new());
        let expected: String = (1..=7).map(|d| format!("Day {d}:\n-1 -1\n")).collect();
        assert_eq!(text, expected);
    }

    #[test]
    fn format_keeps_insertion_order() {
        let mut grid = TimeGrid::new();
        grid.reserve(0, 540, 600);
        grid.reserve(0, 480, 510);
        grid.reserve(2, 60, 90);

        let text = format_grid(&grid);
        assert!(text.starts_with("Day 1:\n540 600\n480 510\n-1 -1\nDay 2:\n-1 -1\nDay 3:\n60 90\n-1 -1\n"));
        assert!(text.ends_with("Day 7:\n-1 -1\n"));
    }

    #[test]
    fn parse_inverts_format() {
        let mut grid = TimeGrid::new();
        grid.reserve(0, 540, 600);
        grid.reserve(0, 480, 510);
        grid.reserve(6, 1350, 1380);
        assert_eq!(parse_grid(&format_grid(&grid)).unwrap(), grid);
    }

    #[test]
    fn labels_do_not_select_day() {
        // Labels are out of order; only terminators move the day index
        let text = "Day 5:\n100 130\n-1 -1\nDay 1:\n200 230\n-1 -1\n";
        let grid = parse_grid(text).unwrap();
        assert_eq!(grid.day(0), &[TimeSlot::new(100, 130)]);
        assert_eq!(grid.day(1), &[TimeSlot::new(200, 230)]);
        assert!(grid.day(4).is_empty());
    }

    #[test]
    fn missing_terminator_shifts_later_days() {
        let text = "Day 1:\n100 130\nDay 2:\n200 230\n-1 -1\nDay 3:\n300 330\n-1 -1\n";
        let grid = parse_grid(text).unwrap();
        assert_eq!(grid.day(0).len(), 2);
        assert_eq!(grid.day(1), &[TimeSlot::new(300, 330)]);
    }

    #[test]
    fn slots_after_seventh_day_are_dropped() {
        let mut text: String = (1..=7).map(|d| format!("Day {d}:\n-1 -1\n")).collect();
        text.push_str("Day 8:\n480 510\n-1 -1\n");
        let grid = parse_grid(&text).unwrap();
        assert_eq!(grid.slot_count(), 0);
    }

    #[test]
    fn tolerates_blank_lines_and_extra_fields() {
        let text = "Day 1:\n\n480 510 trailing\n  -1   -1  \n";
        let grid = parse_grid(text).unwrap();
        assert_eq!(grid.day(0), &[TimeSlot::new(480, 510)]);
    }

    #[test]
    fn malformed_line_is_reported_with_number() {
        let err = parse_grid("Day 1:\n480 510\nlunch\n-1 -1\n").unwrap_err();
        match err {
            ScheduleFileError::Malformed { line, content } => {
                assert_eq!(line, 3);
                assert_eq!(content, "lunch");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(parse_grid("480\n").is_err());
        assert!(parse_grid("-5 30\n").is_err());
    }

    #[test]
    fn reversed_or_empty_interval_is_malformed() {
        let err = parse_grid("Day 1:\n600 500\n-1 -1\n").unwrap_err();
        assert!(matches!(
            err,
            ScheduleFileError::Malformed { line: 2, ref content } if content == "600 500"
        ));
        assert!(parse_grid("Day 1:\n480 510\n540 540\n-1 -1\n").is_err());
    }

    #[test]
    fn save_then_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.txt");
        let mut grid = TimeGrid::new();
        grid.reserve(3, 600, 630);
        grid.reserve(3, 630, 660);

        save_grid(&path, &grid).unwrap();
        assert_eq!(load_grid(&path).unwrap(), grid);
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_grid(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, ScheduleFileError::Read { .. }));
    }
}
