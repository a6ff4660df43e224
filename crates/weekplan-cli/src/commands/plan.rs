//! Batch planning from a TOML plan file.
//!
//! ```toml
//! [[occupied]]
//! day = 1
//! start = "09:00"
//! end = "10:00"
//!
//! [[tasks]]
//! name = "Write Report"
//! duration_minutes = 60
//! priority = 5
//! deadline_day = 1
//! preferred_start_hour = 8
//! preferred_end_hour = 12
//! ```

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{NaiveTime, Timelike};
use clap::Args;
use serde::{Deserialize, Serialize};
use weekplan_core::error::Result;
use weekplan_core::{
    CoreError, OccupiedBlock, ScheduleReport, TaskSpec, ValidationError, WeekPlanner, WeekSummary,
};

use super::load_config;
use crate::render;

#[derive(Args)]
pub struct PlanArgs {
    /// Plan file (TOML with [[occupied]] and [[tasks]] tables)
    pub file: PathBuf,
    /// Start from a saved schedule file instead of an empty week
    #[arg(long)]
    pub base: Option<PathBuf>,
    /// Save the resulting schedule to this file
    #[arg(long)]
    pub save: Option<PathBuf>,
    /// Print the report and summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Deserialize)]
pub struct OccupiedEntry {
    /// 1-7
    pub day: i64,
    pub start: String,
    pub end: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlanFile {
    #[serde(default)]
    pub occupied: Vec<OccupiedEntry>,
    #[serde(default)]
    pub tasks: Vec<TaskSpec>,
}

#[derive(Serialize)]
struct PlanOutput<'a> {
    report: &'a ScheduleReport,
    summary: &'a WeekSummary,
}

fn parse_clock(field: &str, value: &str) -> Result<(i64, i64), ValidationError> {
    let time = NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|e| {
        ValidationError::InvalidValue {
            field: field.to_string(),
            message: format!("expected HH:MM, got '{value}' ({e})"),
        }
    })?;
    Ok((i64::from(time.hour()), i64::from(time.minute())))
}

impl OccupiedEntry {
    pub fn to_block(&self) -> Result<OccupiedBlock, ValidationError> {
        let (start_hour, start_minute) = parse_clock("start", &self.start)?;
        let (end_hour, end_minute) = parse_clock("end", &self.end)?;
        Ok(OccupiedBlock {
            day: self.day,
            start_hour,
            start_minute,
            end_hour,
            end_minute,
        })
    }
}

impl PlanFile {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CoreError::Custom(format!("invalid plan file: {e}")))
    }

    /// Validate every entry, then hand them to the planner. Nothing is
    /// applied if any entry is invalid.
    pub fn apply(self, planner: &mut WeekPlanner) -> Result<()> {
        let blocks = self
            .occupied
            .iter()
            .map(|entry| entry.to_block()?.validate())
            .collect::<Result<Vec<_>, _>>()?;
        let tasks = self
            .tasks
            .into_iter()
            .map(TaskSpec::into_task)
            .collect::<Result<Vec<_>, _>>()?;

        for (day, slot) in blocks {
            planner.add_occupied(day, slot);
        }
        for task in tasks {
            planner.add_task(task);
        }
        Ok(())
    }
}

fn write_json<W: Write>(
    out: &mut W,
    report: &ScheduleReport,
    summary: &WeekSummary,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(&PlanOutput { report, summary })?;
    writeln!(out, "{json}")?;
    Ok(())
}

pub fn run(args: PlanArgs, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let mut planner = WeekPlanner::new(config);

    if let Some(base) = &args.base {
        planner.load(base)?;
    }

    let content = std::fs::read_to_string(&args.file).map_err(CoreError::from)?;
    let plan = PlanFile::from_toml(&content)?;
    tracing::debug!(
        file = %args.file.display(),
        occupied = plan.occupied.len(),
        tasks = plan.tasks.len(),
        "plan file read"
    );
    plan.apply(&mut planner)?;

    let report = planner.generate();
    let summary = planner.summary();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        write_json(&mut out, &report, &summary)?;
    } else {
        render::write_events(&mut out, &report.events)?;
        render::write_summary(&mut out, &summary)?;
    }

    if let Some(path) = &args.save {
        planner.save(path)?;
        if !args.json {
            writeln!(out, "\nSchedule saved to {}", path.display())?;
        }
    }
    Ok(())
}
