//! Core error types for meterlife-core.
//!
//! This module defines the error hierarchy using thiserror. Every failure is
//! detected and reported at the point of first violation; the library never
//! downgrades an error to a default value.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for meterlife-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Interpolation errors
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Root-finding and optimization errors
    #[error("Solver error: {0}")]
    Solve(#[from] SolveError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Input validation errors.
///
/// All of these are rejected before any numeric work starts.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Two history samples share a day index
    #[error("Duplicate day index {day} in usage history")]
    DuplicateDay { day: u32 },

    /// Day indices are not strictly increasing
    #[error("Usage history days must be strictly increasing: day {next} follows day {prev}")]
    DaysNotIncreasing { prev: u32, next: u32 },

    /// Not enough history to interpolate
    #[error("Usage history has {len} samples, need at least {min}")]
    HistoryTooShort { len: usize, min: usize },

    /// Negative metered usage
    #[error("Negative usage {kwh} kWh on day {day}")]
    NegativeUsage { day: u32, kwh: f64 },

    /// NaN or infinite numeric input
    #[error("Non-finite value for '{field}': {value}")]
    NonFiniteValue { field: String, value: f64 },

    /// Tariff must be positive
    #[error("Tariff must be positive, got {tariff}")]
    NonPositiveTariff { tariff: f64 },

    /// Balance must be non-negative
    #[error("Balance must be non-negative, got {balance}")]
    NegativeBalance { balance: f64 },

    /// Appliance with a negative rating or runtime
    #[error("Invalid appliance '{name}': {message}")]
    InvalidAppliance { name: String, message: String },
}

/// Interpolation errors.
#[derive(Error, Debug)]
pub enum InterpolationError {
    /// Two fit points share an abscissa, making divided differences undefined
    #[error("Duplicate abscissa {x} in interpolation points")]
    DuplicateAbscissa { x: f64 },

    /// Fewer than two fit points
    #[error("Interpolation needs at least 2 points, got {len}")]
    TooFewPoints { len: usize },
}

/// Root-finding and optimization errors.
#[derive(Error, Debug)]
pub enum SolveError {
    /// The initial bracket does not straddle a root
    #[error(
        "Bracket [{low}, {high}] does not straddle a root: f(low) = {f_low}, f(high) = {f_high}"
    )]
    InvalidBracket {
        low: f64,
        high: f64,
        f_low: f64,
        f_high: f64,
    },

    /// Iteration cap reached before the bracket met tolerance
    #[error(
        "No convergence after {iterations} iterations: bracket width {achieved} > tolerance {tolerance}"
    )]
    ConvergenceFailure {
        achieved: f64,
        tolerance: f64,
        iterations: u32,
    },

    /// Degenerate search interval
    #[error("Search interval [{low}, {high}] is empty or reversed")]
    EmptyInterval { low: f64, high: f64 },
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load a run file
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse TOML
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
