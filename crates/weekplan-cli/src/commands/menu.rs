//! Interactive planning menu.
//!
//! Every numeric prompt is asked again until the answer parses and is in
//! range, so the planner only ever sees validated input. End of input exits
//! the menu.

use std::io::{self, BufRead, Write};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use weekplan_core::validation::{
    DAY_RANGE, HOUR_RANGE, MINUTE_RANGE, PREFERRED_END_HOUR_RANGE, PREFERRED_START_HOUR_RANGE,
    PRIORITY_RANGE,
};
use weekplan_core::{OccupiedBlock, TaskSpec, ValidationError, WeekPlanner};

use super::load_config;
use crate::render;

/// Line-oriented prompt reader.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the answer is an integer.
    pub fn int(&mut self, prompt: &str) -> io::Result<i64> {
        write!(self.output, "{prompt}")?;
        loop {
            match self.read_line()?.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => write!(self.output, "Invalid input. Try again: ")?,
            }
        }
    }

    /// Ask until the answer is an integer inside `range`.
    pub fn int_in(
        &mut self,
        prompt: &str,
        range: &RangeInclusive<i64>,
        complaint: &str,
    ) -> io::Result<i64> {
        loop {
            let value = self.int(prompt)?;
            if range.contains(&value) {
                return Ok(value);
            }
            writeln!(self.output, "{complaint}")?;
        }
    }

    /// Ask until a non-blank line is entered.
    pub fn text(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        loop {
            let line = self.read_line()?;
            if !line.is_empty() {
                return Ok(line);
            }
        }
    }
}

fn read_block<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> io::Result<OccupiedBlock> {
    Ok(OccupiedBlock {
        day: p.int_in("Enter day [1-7]: ", &DAY_RANGE, "Day must be between 1 and 7.")?,
        start_hour: p.int_in(
            "Enter start hour [0-23]: ",
            &HOUR_RANGE,
            "Start hour must be between 0 and 23.",
        )?,
        start_minute: p.int_in(
            "Enter start minute [0-59]: ",
            &MINUTE_RANGE,
            "Start minute must be between 0 and 59.",
        )?,
        end_hour: p.int_in(
            "Enter end hour [0-23]: ",
            &HOUR_RANGE,
            "End hour must be between 0 and 23.",
        )?,
        end_minute: p.int_in(
            "Enter end minute [0-59]: ",
            &MINUTE_RANGE,
            "End minute must be between 0 and 59.",
        )?,
    })
}

fn add_occupied<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    planner: &mut WeekPlanner,
) -> io::Result<()> {
    let count = p.int("Enter number of pre-occupied time blocks (e.g., classes, meals): ")?;
    let mut added = 0;
    while added < count {
        writeln!(p.output(), "\n--- Block {} ---", added + 1)?;
        match read_block(p)?.validate() {
            Ok((day, slot)) => {
                planner.add_occupied(day, slot);
                added += 1;
            }
            Err(ValidationError::InvalidTimeRange { .. }) => {
                writeln!(p.output(), "End time must be after start time. Try again.")?;
            }
            Err(e) => writeln!(p.output(), "{e}. Try again.")?,
        }
    }
    Ok(())
}

fn read_task<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> io::Result<TaskSpec> {
    let name = p.text("Enter task name: ")?;
    let duration_minutes = p.int_in(
        "Enter duration (in minutes): ",
        &(1..=i64::from(u32::MAX)),
        "Duration must be a positive number of minutes.",
    )?;
    let priority = p.int_in(
        "Enter priority [1-10]: ",
        &PRIORITY_RANGE,
        "Priority must be between 1 and 10.",
    )?;
    let deadline_day = p.int_in(
        "Enter deadline day [1-7]: ",
        &DAY_RANGE,
        "Deadline day must be between 1 and 7.",
    )?;
    let preferred_start_hour = p.int_in(
        "Enter preferred start hour [0-22]: ",
        &PREFERRED_START_HOUR_RANGE,
        "Start hour must be between 0 and 22.",
    )?;
    let end_range = preferred_start_hour + 1..=*PREFERRED_END_HOUR_RANGE.end();
    let preferred_end_hour = p.int_in(
        "Enter preferred end hour [1-23]: ",
        &end_range,
        "End hour must be between 1 and 23 and greater than start hour.",
    )?;

    Ok(TaskSpec {
        name,
        duration_minutes,
        priority,
        deadline_day,
        preferred_start_hour,
        preferred_end_hour,
    })
}

fn add_tasks<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    planner: &mut WeekPlanner,
) -> io::Result<()> {
    let count = p.int("\nEnter number of tasks to schedule: ")?;
    let mut added = 0;
    while added < count {
        writeln!(p.output(), "\n--- Task {} ---", added + 1)?;
        match read_task(p)?.into_task() {
            Ok(task) => {
                planner.add_task(task);
                added += 1;
            }
            Err(e) => writeln!(p.output(), "{e}. Try again.")?,
        }
    }
    Ok(())
}

const MENU: &str = "\n========= MENU =========\n\
1. Add Occupied Time Slots\n\
2. Add Tasks\n\
3. Generate Schedule\n\
4. View Daily Summary\n\
5. Exit\n\
6. Save Schedule to File\n\
7. Load Schedule from File\n";

/// Run the menu loop until the user exits or input ends.
pub fn run_session<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    planner: &mut WeekPlanner,
    schedule_file: &Path,
) -> io::Result<()> {
    writeln!(p.output(), "===========================")?;
    writeln!(p.output(), " WEEKLY TIME-BLOCK PLANNER ")?;
    writeln!(p.output(), "===========================")?;

    loop {
        write!(p.output(), "{MENU}")?;
        let choice = match p.int("Choose an option: ") {
            Ok(choice) => choice,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
            Err(e) => return Err(e),
        };

        let step = match choice {
            1 => add_occupied(p, planner),
            2 => add_tasks(p, planner),
            3 => {
                let report = planner.generate();
                render::write_events(p.output(), &report.events)
            }
            4 => render::write_summary(p.output(), &planner.summary()),
            5 => {
                writeln!(p.output(), "\nThank you for using the weekly planner!")?;
                return Ok(());
            }
            6 => match planner.save(schedule_file) {
                Ok(()) => writeln!(
                    p.output(),
                    "\n\u{2705} Schedule saved to {}",
                    schedule_file.display()
                ),
                Err(e) => writeln!(p.output(), "{e}"),
            },
            7 => match planner.load(schedule_file) {
                Ok(()) => writeln!(
                    p.output(),
                    "\n\u{2705} Schedule loaded from {}",
                    schedule_file.display()
                ),
                Err(e) => writeln!(p.output(), "{e}"),
            },
            _ => writeln!(p.output(), "Invalid choice. Please try again."),
        };

        match step {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(()),
            other => other?,
        }
    }
}

pub fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let schedule_file = PathBuf::from(&config.storage.schedule_file);
    let mut planner = WeekPlanner::new(config);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    run_session(&mut prompter, &mut planner, &schedule_file)?;
    Ok(())
}
