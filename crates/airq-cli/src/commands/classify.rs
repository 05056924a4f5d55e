use airq_core::error::AirqError;
use airq_core::model::PollutantReading;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    thresholds: Option<PathBuf>,
    output_format: &str,
    explain: bool,
) -> Result<(), AirqError> {
    let table = super::resolve_table(thresholds.as_deref())?;

    let json_bytes = std::fs::read(&input_file)?;
    let reading: PollutantReading = serde_json::from_slice(&json_bytes)?;
    let verdict = airq_core::classify_reading_with(&reading, &table);

    match output_format {
        "json" => output::json::print(&verdict)?,
        _ => output::table::print_verdict(&reading, &verdict, explain),
    }

    Ok(())
}
