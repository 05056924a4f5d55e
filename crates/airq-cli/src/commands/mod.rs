pub mod check;
pub mod classify;
pub mod thresholds;

use airq_core::error::AirqError;
use airq_core::rules::{builtin, load_table, ThresholdTable};
use std::path::Path;

/// Load a custom table if one was given, otherwise the built-in preset.
pub fn resolve_table(path: Option<&Path>) -> Result<ThresholdTable, AirqError> {
    match path {
        Some(path) => load_table(path),
        None => Ok(builtin::openweather()),
    }
}
