pub mod config;
pub mod menu;
pub mod plan;
pub mod summary;

use std::path::Path;

use weekplan_core::{Config, ConfigError};

/// Config from `path` if given, otherwise from the default location.
/// An explicit path that does not exist yet yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) if !path.exists() => Ok(Config::default()),
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}
