pub mod config;
pub mod reward;
pub mod savings;

use chrono::Duration;
use foom_core::error::Result;
use foom_core::FoomConfig;
use serde::Serialize;
use std::path::Path;

/// Load the config from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<FoomConfig> {
    match path {
        Some(path) => FoomConfig::load_from(path),
        None => FoomConfig::load(),
    }
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Fractional hours to a millisecond-precision duration.
pub fn hours_to_duration(hours: f64) -> Duration {
    Duration::milliseconds((hours * 3_600_000.0).round() as i64)
}
