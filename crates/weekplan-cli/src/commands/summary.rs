use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use weekplan_core::{DayAnalyzer, WeekSummary};

use super::load_config;
use crate::render;

#[derive(Args)]
pub struct SummaryArgs {
    /// Schedule file (default: storage.schedule_file from config)
    pub file: Option<PathBuf>,
    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SummaryArgs, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let path = args
        .file
        .unwrap_or_else(|| PathBuf::from(&config.storage.schedule_file));

    let grid = weekplan_core::storage::load_grid(&path)?;
    let analyzer = DayAnalyzer::new(config.summary.free_time_method);
    let summary = WeekSummary::from_grid(&grid, &analyzer);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        render::write_summary(&mut out, &summary)?;
        if let Some(day) = summary.busiest_day() {
            writeln!(out, "Busiest day: Day {}", day + 1)?;
        }
    }
    Ok(())
}
