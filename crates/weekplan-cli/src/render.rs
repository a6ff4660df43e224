//! Console rendering of schedule events and day summaries.

use std::io::{self, Write};

use weekplan_core::{DayStats, ScheduleEvent, WeekSummary};

/// `HH:MM` for minutes since midnight.
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn slot_prefix(day: usize, start: u32, end: u32) -> String {
    format!(
        "[Day {}] {} - {}",
        day + 1,
        format_minutes(start),
        format_minutes(end)
    )
}

/// One console line per user-visible event. Rollovers are not shown.
pub fn event_line(event: &ScheduleEvent) -> Option<String> {
    match event {
        ScheduleEvent::WorkPlaced {
            day,
            start,
            end,
            task,
            split,
        } => Some(format!(
            "{} : {}{}",
            slot_prefix(*day, *start, *end),
            task,
            if *split { " (split)" } else { "" }
        )),
        ScheduleEvent::BreakPlaced { day, start, end } => {
            Some(format!("{} : BREAK", slot_prefix(*day, *start, *end)))
        }
        ScheduleEvent::Unschedulable { task } => Some(format!("\u{274C} Could not schedule: {task}")),
        ScheduleEvent::RolledOver { .. } => None,
    }
}

pub fn write_events<W: Write>(out: &mut W, events: &[ScheduleEvent]) -> io::Result<()> {
    writeln!(out, "\n\n======= GENERATED WEEKLY SCHEDULE =======")?;
    for line in events.iter().filter_map(event_line) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn write_day<W: Write>(
    out: &mut W,
    day: usize,
    stats: &DayStats,
    utilization: f64,
) -> io::Result<()> {
    writeln!(out, "\n[Day {}]", day + 1)?;
    writeln!(out, "Productive Time: {} mins", stats.productive_minutes)?;
    writeln!(out, "Break Time:      {} mins", stats.break_minutes)?;
    writeln!(out, "Free Time Left:  {} mins", stats.free_minutes)?;
    writeln!(out, "Utilization:     {:.1}%", utilization * 100.0)
}

pub fn write_summary<W: Write>(out: &mut W, summary: &WeekSummary) -> io::Result<()> {
    writeln!(out, "\n======= DAILY SUMMARY =======")?;
    for (day, (stats, utilization)) in summary.days.iter().zip(summary.utilization).enumerate() {
        write_day(out, day, stats, utilization)?;
    }
    writeln!(
        out,
        "\nWeek: {} productive, {} break, {} free mins",
        summary.total.productive_minutes, summary.total.break_minutes, summary.total.free_minutes
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use weekplan_core::{DayAnalyzer, TimeGrid};

    #[test]
    fn formats_minutes() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(545), "09:05");
        assert_eq!(format_minutes(1380), "23:00");
    }

    #[test]
    fn work_and_break_lines() {
        let first = ScheduleEvent::WorkPlaced {
            day: 0,
            start: 480,
            end: 510,
            task: "Write Report".into(),
            split: false,
        };
        let second = ScheduleEvent::WorkPlaced {
            day: 0,
            start: 510,
            end: 540,
            task: "Write Report".into(),
            split: true,
        };
        let rest = ScheduleEvent::BreakPlaced {
            day: 2,
            start: 570,
            end: 600,
        };
        assert_eq!(
            event_line(&first).unwrap(),
            "[Day 1] 08:00 - 08:30 : Write Report"
        );
        assert_eq!(
            event_line(&second).unwrap(),
            "[Day 1] 08:30 - 09:00 : Write Report (split)"
        );
        assert_eq!(event_line(&rest).unwrap(), "[Day 3] 09:30 - 10:00 : BREAK");
    }

    #[test]
    fn rollover_is_silent_and_failure_is_not() {
        let rolled = ScheduleEvent::RolledOver {
            task: "Essay".into(),
            deadline_day: 3,
        };
        assert!(event_line(&rolled).is_none());
        let failed = ScheduleEvent::Unschedulable { task: "Essay".into() };
        assert!(event_line(&failed).unwrap().ends_with("Could not schedule: Essay"));
    }

    #[test]
    fn summary_lists_every_day() {
        let summary = WeekSummary::from_grid(&TimeGrid::new(), &DayAnalyzer::default());
        let mut out = Vec::new();
        write_summary(&mut out, &summary).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[Day 1]\nProductive Time: 0 mins"));
        assert!(text.contains("[Day 7]"));
        assert!(text.contains("Free Time Left:  1380 mins\nUtilization:     0.0%"));
    }

    #[test]
    fn summary_shows_utilization_percent() {
        let mut grid = TimeGrid::new();
        // 690 of 1380 minutes booked on day 2
        grid.reserve(1, 0, 690);
        let summary = WeekSummary::from_grid(&grid, &DayAnalyzer::default());
        let mut out = Vec::new();
        write_summary(&mut out, &summary).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[Day 2]\nProductive Time: 0 mins\nBreak Time:      690 mins\nFree Time Left:  690 mins\nUtilization:     50.0%"));
    }
}
