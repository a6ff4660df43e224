//! Core error types for weekplan-core.
//!
//! Placement failure is not an error: `Placer::place` reports it through
//! its outcome. The types here cover intake validation, configuration and
//! the schedule file.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for weekplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Intake validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Schedule file errors
    #[error("Schedule file error: {0}")]
    ScheduleFile(#[from] ScheduleFileError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Home/config directory could not be prepared
    #[error("Cannot prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Intake validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid time range
    #[error("Invalid time range: end ({end}) must be greater than start ({start})")]
    InvalidTimeRange { start: u32, end: u32 },

    /// Value outside its allowed range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Empty text field
    #[error("{0} must not be empty")]
    Empty(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Errors reading or writing the flat schedule file.
#[derive(Error, Debug)]
pub enum ScheduleFileError {
    /// File could not be opened or read
    #[error("Error opening {path} for reading: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File could not be created or written
    #[error("Error opening {path} for writing: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data line is not a pair of integers
    #[error("Line {line}: expected '<start> <end>' with start < end, got '{content}'")]
    Malformed { line: usize, content: String },
}

impl ValidationError {
    pub(crate) fn out_of_range(field: &str, value: i64, min: i64, max: i64) -> Self {
        ValidationError::OutOfRange {
            field: field.to_string(),
            value,
            min,
            max,
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
