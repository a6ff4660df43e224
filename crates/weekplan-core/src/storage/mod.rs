mod config;
pub mod schedule_file;

pub use config::{Config, StorageConfig, SummaryConfig};
pub use schedule_file::{format_grid, load_grid, parse_grid, save_grid};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/weekplan[-dev]/` based on WEEKPLAN_ENV.
///
/// Set WEEKPLAN_ENV=dev to use the development data directory, or
/// WEEKPLAN_HOME to use an explicit directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("WEEKPLAN_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("WEEKPLAN_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("weekplan-dev")
            } else {
                base_dir.join("weekplan")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
